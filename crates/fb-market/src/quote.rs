//! Stochastic carrier quoting.
//!
//! Quotes are ephemeral: generated fresh each time a load is presented for
//! booking, never cached or persisted.  Re-quoting the same load yields a
//! different set — that churn is part of the market model.

use fb_catalog::{CarrierDirectory, CarrierProfile};
use fb_core::{FleetKind, GameRng};

use crate::load::Load;

/// Quotes produced per solicitation.
pub const QUOTES_PER_LOAD: usize = 3;

/// Premium carriers (score above this) price 10% over market.
const PREMIUM_SCORE: u8 = 90;
/// Discount carriers (score below this) price 20% under market — cheaper,
/// riskier.
const DISCOUNT_SCORE: u8 = 75;
/// Cost factor when the carrier must outsource mismatched equipment.
const MISMATCH_FACTOR: f64 = 1.5;

/// Cosmetic driver roster for quote cards.
const DRIVERS: [&str; 4] = ["Bob", "Sarah", "Mike", "Big Al"];

// ── Quote ─────────────────────────────────────────────────────────────────────

/// One carrier's priced offer to haul a specific load.
#[derive(Clone, Debug, PartialEq)]
pub struct Quote {
    pub carrier: String,
    /// Reliability score copied from the carrier profile.
    pub score:   u8,
    pub fleet:   FleetKind,
    pub cost:    i64,
    /// `load.revenue − cost`.
    pub margin:  i64,
    /// Whether the carrier's fleet actually covers the load's mode.
    pub equipment_match: bool,
    /// Cosmetic: assigned driver name.
    pub driver:  String,
    /// Cosmetic: tractor model year.
    pub truck_year: u16,
}

/// Price one carrier against one load.
fn quote_carrier(load: &Load, carrier: &CarrierProfile, rng: &mut GameRng) -> Quote {
    let mut cost_factor = if carrier.score > PREMIUM_SCORE {
        1.1
    } else if carrier.score < DISCOUNT_SCORE {
        0.8
    } else {
        1.0
    };

    // A mismatched dedicated fleet can still quote — it outsources the
    // trailer at a steep markup.  Power Only loads accept any tractor.
    let equipment_match = carrier.fleet.matches(load.mode);
    if !equipment_match {
        cost_factor = MISMATCH_FACTOR;
    }

    let variance = rng.gen_range(0.9..1.1);
    let cost = (load.base_cost as f64 * cost_factor * variance).floor() as i64;

    Quote {
        carrier: carrier.name.clone(),
        score:   carrier.score,
        fleet:   carrier.fleet,
        cost,
        margin:  load.revenue - cost,
        equipment_match,
        driver:  rng.choose(&DRIVERS).copied().unwrap_or("Bob").to_string(),
        truck_year: 2018 + rng.gen_range(0..6u16),
    }
}

/// Solicit [`QUOTES_PER_LOAD`] quotes for a load.
///
/// The first slot draws from the equipment-matching subset of the directory
/// when that subset is non-empty, so the board usually shows at least one
/// safe option.  Best-effort UX bias only — nothing guarantees the matched
/// quote is the profitable one.
pub fn generate_quotes(load: &Load, carriers: &CarrierDirectory, rng: &mut GameRng) -> Vec<Quote> {
    let matching = carriers.matching(load.mode);

    (0..QUOTES_PER_LOAD)
        .map(|slot| {
            let carrier = if slot == 0 && !matching.is_empty() {
                rng.choose(&matching).copied().expect("subset is non-empty")
            } else {
                rng.choose(carriers.all()).expect("carrier directory is non-empty")
            };
            quote_carrier(load, carrier, rng)
        })
        .collect()
}

/// Rank quotes for assisted booking: `margin × (score/100)³` over the
/// equipment-matched subset.  The cubic term penalizes unreliable carriers
/// hard while still caring about profit.  `None` if no quote matches.
pub fn best_quote(quotes: &[Quote]) -> Option<&Quote> {
    quotes
        .iter()
        .filter(|q| q.equipment_match)
        .max_by(|a, b| {
            let score = |q: &Quote| q.margin as f64 * (q.score as f64 / 100.0).powi(3);
            score(a).total_cmp(&score(b))
        })
}
