//! The authoritative mutable snapshot: everything a saved game contains.
//!
//! `SimState` is the single source of truth.  Components outside this crate
//! treat their inputs as read-only and return derived values; only
//! [`SimState::apply`][crate::Action] transitions mutate it, which is what
//! keeps transitions atomic and the whole thing trivially snapshot-able
//! (enable the `serde` feature and hand the blob to the persistence
//! collaborator).

use fb_catalog::CustomerProfile;
use fb_core::{Day, Difficulty, LoadId};
use fb_market::Load;

use crate::ledger::LedgerEntry;

// ── CompanyProfile ────────────────────────────────────────────────────────────

/// The player's brokerage.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompanyProfile {
    pub company_name: String,
    pub player_name:  String,
    /// Whole dollars.  May go negative — there is no bankruptcy floor.
    pub cash:         i64,
    /// Clamped to [0, 100] by every mutation.
    pub reputation:   u8,
    pub level:        u32,
}

impl CompanyProfile {
    /// Apply a reputation delta, clamping to [0, 100].
    pub fn adjust_reputation(&mut self, delta: i32) {
        self.reputation = (self.reputation as i32 + delta).clamp(0, 100) as u8;
    }
}

// ── DailyCash / GameSettings ──────────────────────────────────────────────────

/// One point on the cash trend chart, keyed by the pre-increment day.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyCash {
    pub day:  Day,
    pub cash: i64,
}

/// Run settings recorded at start.  The day cap is informational — the core
/// never ends the run on its own.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSettings {
    pub difficulty: Difficulty,
    pub max_days:   Option<u32>,
}

// ── SimState ──────────────────────────────────────────────────────────────────

/// The full mutable simulation state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimState {
    pub profile:    CompanyProfile,
    pub day:        Day,
    /// Active customers — copies of directory profiles made at acquisition.
    pub customers:  Vec<CustomerProfile>,
    /// Every load ever generated this run, in creation order.
    pub loads:      Vec<Load>,
    /// Append-only activity ledger.
    pub ledger:     Vec<LedgerEntry>,
    /// Pre-increment cash snapshots, one per completed day.
    pub daily_cash: Vec<DailyCash>,
    pub autopilot:  bool,
    pub settings:   GameSettings,
}

impl SimState {
    pub fn load(&self, id: LoadId) -> Option<&Load> {
        self.loads.iter().find(|l| l.id == id)
    }

    pub(crate) fn load_mut(&mut self, id: LoadId) -> Option<&mut Load> {
        self.loads.iter_mut().find(|l| l.id == id)
    }

    /// All loads still waiting to be covered.
    pub fn available_loads(&self) -> impl Iterator<Item = &Load> {
        self.loads.iter().filter(|l| l.is_available())
    }

    /// All loads currently rolling.
    pub fn dispatched_loads(&self) -> impl Iterator<Item = &Load> {
        self.loads.iter().filter(|l| l.is_dispatched())
    }

    pub fn is_customer_active(&self, id: fb_core::CustomerId) -> bool {
        self.customers.iter().any(|c| c.id == id)
    }
}
