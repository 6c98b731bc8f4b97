//! The `Game` struct: state + catalogs + tuning + RNG, and the synchronous
//! call surface the embedding presentation layer uses.
//!
//! Every method fully completes before returning — there is no background
//! scheduler and no overlapping mutation.  The only nondeterminism is the
//! owned, seeded RNG.

use fb_catalog::{CarrierDirectory, CityMap, CustomerDirectory, CustomerProfile};
use fb_core::{CustomerId, GameRng, LoadId};
use fb_market::{BookingResult, MarketTuning, Quote, generate_quotes, resolve_booking};

use crate::action::{Action, ActionOutcome, MarketCtx};
use crate::day::DayReport;
use crate::error::{EngineError, EngineResult};
use crate::ledger::LedgerStats;
use crate::observer::DayObserver;
use crate::state::SimState;
use crate::tuning::EngineTuning;

/// A running simulation.  Create via [`GameBuilder`][crate::GameBuilder].
#[derive(Debug)]
pub struct Game {
    /// Geography table.
    pub cities: CityMap,
    /// Carrier catalog quotes draw from.
    pub carriers: CarrierDirectory,
    /// Customer catalog acquisitions draw from.
    pub directory: CustomerDirectory,
    /// Market-rate policy.
    pub market: MarketTuning,
    /// Engine balance policy.
    pub tuning: EngineTuning,

    pub(crate) state: SimState,
    pub(crate) rng:   GameRng,
}

impl Game {
    // ── State access ──────────────────────────────────────────────────────

    /// Read-only view of the authoritative state — also the serializable
    /// snapshot handed to the persistence collaborator (with the `serde`
    /// feature enabled).
    pub fn state(&self) -> &SimState {
        &self.state
    }

    /// Ledger aggregates for the analytics surface.
    pub fn stats(&self) -> LedgerStats {
        LedgerStats::from_entries(&self.state.ledger)
    }

    /// Directory customers not yet on the books, in catalog order.
    pub fn prospects(&self) -> Vec<&CustomerProfile> {
        self.directory
            .all()
            .iter()
            .filter(|c| !self.state.is_customer_active(c.id))
            .collect()
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Apply one action as an atomic transition.
    pub fn apply(&mut self, action: Action) -> EngineResult<ActionOutcome> {
        let ctx = MarketCtx {
            cities:    &self.cities,
            carriers:  &self.carriers,
            directory: &self.directory,
            market:    &self.market,
            tuning:    &self.tuning,
        };
        self.state.apply(action, &ctx, &mut self.rng)
    }

    /// Buy a prospect into the active customer set.
    pub fn acquire_customer(&mut self, id: CustomerId) -> EngineResult<()> {
        self.apply(Action::AcquireCustomer(id)).map(|_| ())
    }

    /// Flip the autopilot flag, returning the new value.
    pub fn toggle_autopilot(&mut self) -> bool {
        match self.apply(Action::ToggleAutopilot) {
            Ok(ActionOutcome::AutopilotToggled(on)) => on,
            _ => unreachable!("toggle cannot fail"),
        }
    }

    /// Advance one day, returning what it did.
    pub fn advance_day(&mut self) -> DayReport {
        match self.apply(Action::AdvanceDay) {
            Ok(ActionOutcome::DayAdvanced(report)) => report,
            _ => unreachable!("day advancement cannot fail"),
        }
    }

    /// Advance `n` days, reporting each to `observer`.
    pub fn run_days<O: DayObserver>(&mut self, n: u32, observer: &mut O) {
        for _ in 0..n {
            let day = self.state.day;
            observer.on_day_start(day);
            let report = self.advance_day();
            observer.on_day_end(day, &report);
        }
    }

    // ── Quoting & booking ─────────────────────────────────────────────────

    /// Solicit a fresh set of quotes for an available load.  Quotes are
    /// ephemeral — each call re-draws.
    pub fn quotes_for(&mut self, id: LoadId) -> EngineResult<Vec<Quote>> {
        let load = self
            .state
            .load(id)
            .ok_or(EngineError::LoadNotFound(id))?;
        if !load.is_available() {
            return Err(EngineError::LoadNotAvailable(id));
        }
        Ok(generate_quotes(load, &self.carriers, &mut self.rng))
    }

    /// Resolve a quote without committing — the preview-before-commit step.
    pub fn preview_booking(&mut self, id: LoadId, quote: &Quote) -> EngineResult<BookingResult> {
        let load = self
            .state
            .load(id)
            .ok_or(EngineError::LoadNotFound(id))?;
        if !load.is_available() {
            return Err(EngineError::LoadNotAvailable(id));
        }
        Ok(resolve_booking(load, quote, &mut self.rng))
    }

    /// Resolve and immediately confirm a booking in one call.
    pub fn book(&mut self, id: LoadId, quote: Quote) -> EngineResult<BookingResult> {
        let result = self.preview_booking(id, &quote)?;
        self.apply(Action::ConfirmBooking {
            load: id,
            quote,
            result: result.clone(),
        })?;
        Ok(result)
    }
}
