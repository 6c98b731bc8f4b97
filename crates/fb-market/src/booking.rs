//! Booking resolution: the risk outcome of handing a load to a carrier.
//!
//! Resolution is a pure preview — it computes the monetary and reputational
//! outcome without touching any state, so the embedding UI can show the
//! result before the player commits.  The engine applies a confirmed result
//! as its own atomic transition.
//!
//! Resolution order (first matching rule wins):
//!
//! 1. Equipment mismatch — deterministic critical failure, $1,000 penalty.
//!    Always fails regardless of the dice; mismatched equipment ruins the
//!    freight, it doesn't merely risk it.
//! 2. Reliability roll — uniform [0, 100) against the carrier's score;
//!    exceeding it is a breakdown, $200 penalty.
//! 3. Otherwise success, margin unchanged.

use fb_core::GameRng;

use crate::load::Load;
use crate::quote::Quote;

/// Penalty for dispatching mismatched equipment (spoiled/rejected freight).
const MISMATCH_PENALTY: i64 = 1_000;
/// Penalty for a carrier breakdown en route to pickup.
const BREAKDOWN_PENALTY: i64 = 200;

/// Outcome of resolving one quote against one load.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingResult {
    /// `quote.margin` minus any penalty.
    pub final_margin: i64,
    pub success:      bool,
    /// Narrative outcome line for the ledger / result screen.
    pub message:      String,
    /// Penalty applied, 0 on success.
    pub penalty:      i64,
}

/// Resolve a chosen quote against a load.  Pure: no state is mutated; the
/// only inputs beyond the arguments are the RNG draws.
pub fn resolve_booking(load: &Load, quote: &Quote, rng: &mut GameRng) -> BookingResult {
    if !quote.equipment_match {
        return BookingResult {
            final_margin: quote.margin - MISMATCH_PENALTY,
            success:      false,
            message:      format!(
                "CRITICAL FAILURE: booked a {} for a {} load. Product spoiled/rejected.",
                quote.fleet, load.mode
            ),
            penalty:      MISMATCH_PENALTY,
        };
    }

    if rng.percent_roll() > quote.score as f64 {
        return BookingResult {
            final_margin: quote.margin - BREAKDOWN_PENALTY,
            success:      false,
            message:      format!("DELAY: {} broke down. Customer is angry.", quote.carrier),
            penalty:      BREAKDOWN_PENALTY,
        };
    }

    BookingResult {
        final_margin: quote.margin,
        success:      true,
        message:      "Carrier dispatched. Load covered at quoted cost.".to_string(),
        penalty:      0,
    }
}
