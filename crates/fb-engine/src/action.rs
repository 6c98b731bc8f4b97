//! Named state transitions.
//!
//! Every mutation of [`SimState`] goes through [`SimState::apply`] with an
//! explicit [`Action`].  Each arm validates all preconditions before its
//! first write: an `Err` return guarantees the state is bit-for-bit what it
//! was, which is the atomicity contract the rest of the system leans on.

use fb_catalog::{CarrierDirectory, CityMap, CustomerDirectory};
use fb_core::{CustomerId, GameRng, LoadId};
use fb_market::{BookingResult, CarrierAssignment, MarketTuning, Quote};

use crate::day::{self, DayReport};
use crate::error::{EngineError, EngineResult};
use crate::ledger::LedgerEntry;
use crate::state::SimState;
use crate::tuning::EngineTuning;

/// Reputation delta for a clean booking.
const REP_BOOKING_SUCCESS: i32 = 1;
/// Reputation delta for a failed booking (mismatch or breakdown).
const REP_BOOKING_FAILURE: i32 = -10;

// ── MarketCtx ─────────────────────────────────────────────────────────────────

/// The read-only world an action executes against: catalogs and tuning.
/// Actions read nothing outside their state parameter, this context, and
/// the RNG.
#[derive(Copy, Clone)]
pub struct MarketCtx<'a> {
    pub cities:    &'a CityMap,
    pub carriers:  &'a CarrierDirectory,
    pub directory: &'a CustomerDirectory,
    pub market:    &'a MarketTuning,
    pub tuning:    &'a EngineTuning,
}

// ── Action ────────────────────────────────────────────────────────────────────

/// A player- or autopilot-triggered state transition.
#[derive(Clone, Debug)]
pub enum Action {
    /// Buy a prospect from the directory into the active customer set.
    AcquireCustomer(CustomerId),

    /// Commit a previously resolved booking.  Resolution
    /// (`fb_market::resolve_booking`) is a pure preview; this action applies
    /// its already-rolled outcome, so confirming never re-rolls the dice.
    ConfirmBooking {
        load:   LoadId,
        quote:  Quote,
        result: BookingResult,
    },

    /// Flip the autopilot flag.
    ToggleAutopilot,

    /// Run the end-of-day state machine and roll the day counter.
    AdvanceDay,
}

/// What an applied action reported back.
#[derive(Clone, Debug)]
pub enum ActionOutcome {
    CustomerAcquired(CustomerId),
    BookingConfirmed { load: LoadId, success: bool, final_margin: i64 },
    AutopilotToggled(bool),
    DayAdvanced(DayReport),
}

// ── apply ─────────────────────────────────────────────────────────────────────

impl SimState {
    /// Apply one action as a single atomic transition.
    pub fn apply(
        &mut self,
        action: Action,
        ctx:    &MarketCtx<'_>,
        rng:    &mut GameRng,
    ) -> EngineResult<ActionOutcome> {
        match action {
            Action::AcquireCustomer(id) => self.acquire_customer(id, ctx),
            Action::ConfirmBooking { load, quote, result } => {
                self.confirm_booking(load, &quote, &result)
            }
            Action::ToggleAutopilot => {
                self.autopilot = !self.autopilot;
                Ok(ActionOutcome::AutopilotToggled(self.autopilot))
            }
            Action::AdvanceDay => {
                let report = day::advance_day(self, ctx, rng);
                Ok(ActionOutcome::DayAdvanced(report))
            }
        }
    }

    fn acquire_customer(
        &mut self,
        id:  CustomerId,
        ctx: &MarketCtx<'_>,
    ) -> EngineResult<ActionOutcome> {
        let profile = ctx
            .directory
            .get(id)
            .ok_or(EngineError::CustomerNotFound(id))?;
        if self.is_customer_active(id) {
            return Err(EngineError::AlreadyAcquired(id));
        }
        if self.profile.cash < profile.fee {
            return Err(EngineError::InsufficientFunds {
                needed:    profile.fee,
                available: self.profile.cash,
            });
        }

        self.profile.cash -= profile.fee;
        self.customers.push(profile.clone());
        Ok(ActionOutcome::CustomerAcquired(id))
    }

    fn confirm_booking(
        &mut self,
        id:     LoadId,
        quote:  &Quote,
        result: &BookingResult,
    ) -> EngineResult<ActionOutcome> {
        // Validate fully before the first write.
        {
            let load = self.load(id).ok_or(EngineError::LoadNotFound(id))?;
            if !load.is_available() {
                return Err(EngineError::LoadNotAvailable(id));
            }
        }

        let day = self.day;
        self.profile.cash += result.final_margin;
        self.profile.adjust_reputation(if result.success {
            REP_BOOKING_SUCCESS
        } else {
            REP_BOOKING_FAILURE
        });

        let load = self
            .load_mut(id)
            .expect("validated above; loads are never removed");
        load.dispatch(
            CarrierAssignment {
                name:   quote.carrier.clone(),
                driver: quote.driver.clone(),
            },
            result.final_margin,
        );
        let (origin, destination) = (load.origin.clone(), load.destination.clone());

        self.ledger.push(LedgerEntry::Booking {
            day,
            load: id,
            message: format!("Booked {origin} -> {destination}"),
            origin,
            destination,
            carrier: quote.carrier.clone(),
            margin: result.final_margin,
            success: result.success,
        });

        Ok(ActionOutcome::BookingConfirmed {
            load:         id,
            success:      result.success,
            final_margin: result.final_margin,
        })
    }
}
