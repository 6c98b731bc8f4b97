//! `fb-engine` — the orchestrating state machine of the freight_broker
//! simulation.
//!
//! # Transition model
//!
//! All mutable game state lives in one aggregate, [`SimState`].  Every
//! player-visible change is a named [`Action`] applied through
//! [`SimState::apply`]; an action validates its preconditions before its
//! first write, so a returned error always leaves the state exactly as it
//! was.  Randomness enters only through the explicit [`GameRng`] argument —
//! replaying the same seed replays the run.
//!
//! ```text
//! AdvanceDay, per invocation:
//!   ① Snapshot  — record pre-increment (day, cash) for the trend history.
//!   ② Transit   — every Dispatched load: +1 day, 10% delay event,
//!                 progress = clamp(max(forced, analytic), 100),
//!                 deliver exactly once at ≥ 100.
//!   ③ Autopilot — if enabled, book every Available load at the standard
//!                 market margin with the synthetic AutoBroker carrier.
//!   ④ Tender    — generate the incoming day's loads for all active
//!                 customers.
//!   ⑤ Roll      — increment the day counter.
//! ```
//!
//! [`Game`] bundles the state with the immutable catalogs, tuning, and RNG,
//! and offers the call surface the embedding presentation layer uses.
//! Create one via [`GameBuilder`].

pub mod action;
pub mod builder;
pub mod day;
pub mod error;
pub mod game;
pub mod ledger;
pub mod observer;
pub mod state;
pub mod tuning;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use action::{Action, ActionOutcome, MarketCtx};
pub use builder::GameBuilder;
pub use day::DayReport;
pub use error::{EngineError, EngineResult};
pub use game::Game;
pub use ledger::{LedgerEntry, LedgerKind, LedgerStats};
pub use observer::{DayObserver, NoopObserver};
pub use state::{CompanyProfile, DailyCash, GameSettings, SimState};
pub use tuning::EngineTuning;
