//! Top-level game configuration.
//!
//! Consumed exactly once at game start by the engine's builder to seed the
//! company profile and record the run settings.  The day cap is *recorded*,
//! not enforced — ending the run is the embedding application's call.

/// Difficulty label chosen at setup.  Currently cosmetic: it is recorded on
/// the state snapshot for the embedding UI but does not alter the market
/// constants.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy   => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard   => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── GameConfig ────────────────────────────────────────────────────────────────

/// Run parameters fixed at game start.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Player's display name.
    pub player_name: String,

    /// Brokerage company name shown on the profile.
    pub company_name: String,

    /// Difficulty label (recorded, not interpreted by the core).
    pub difficulty: Difficulty,

    /// Run length in days; `None` means endless.  Not enforced by the core.
    pub max_days: Option<u32>,

    /// Startup capital in whole dollars.
    pub starting_cash: i64,

    /// Starting reputation, clamped to [0, 100].
    pub starting_reputation: u8,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name:         String::new(),
            company_name:        "Nano Banana Logistics".to_string(),
            difficulty:          Difficulty::Normal,
            max_days:            None,
            starting_cash:       50_000,
            starting_reputation: 100,
            seed:                0,
        }
    }
}
