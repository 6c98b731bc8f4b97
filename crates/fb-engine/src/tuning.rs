//! Engine-side balance knobs.
//!
//! Like the market rates, these are policy constants: the defaults are the
//! canonical game values, and tests disable pieces (forced progress in
//! particular) to pin down the analytic behavior.

/// Tunable day-advancement policy.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineTuning {
    /// Per-day chance of a narrative in-transit delay event.  The event is
    /// ledger-only: it does not extend transit time or reduce margin.
    pub delay_event_chance: f64,

    /// Per-day forced-progress bump range in percentage points, applied as
    /// `max(previous + U(range), analytic)` so even short hops visibly move.
    /// `None` disables the bump and leaves progress purely analytic.
    pub forced_progress: Option<(f64, f64)>,

    /// Margin fraction the autopilot locks in when booking at the standard
    /// market rate.
    pub autopilot_margin_fraction: f64,

    /// Autopilot's per-booking success probability.  The roll is recorded on
    /// the ledger entry but does not gate margin or cash.
    pub autopilot_success_rate: f64,
}

impl Default for EngineTuning {
    fn default() -> Self {
        Self {
            delay_event_chance:        0.10,
            forced_progress:           Some((15.0, 20.0)),
            autopilot_margin_fraction: 0.15,
            autopilot_success_rate:    0.90,
        }
    }
}
