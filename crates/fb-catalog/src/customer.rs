//! Customer directory: the immutable catalog of prospects the player can
//! acquire.
//!
//! Acquisition copies the profile into the player's active set; the catalog
//! entry itself is never mutated.

use fb_core::{CustomerId, EquipmentMode};

/// How many loads a customer tenders per day, statistically.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VolumeTier {
    /// 0–1 loads per day.
    #[default]
    Med,
    /// 1–2 loads per day.
    High,
    /// 2–3 loads per day.
    VeryHigh,
}

impl VolumeTier {
    pub fn as_str(self) -> &'static str {
        match self {
            VolumeTier::Med      => "Med",
            VolumeTier::High     => "High",
            VolumeTier::VeryHigh => "Very High",
        }
    }
}

impl std::fmt::Display for VolumeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── CustomerProfile ───────────────────────────────────────────────────────────

/// One shipper's catalog entry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomerProfile {
    pub id:          CustomerId,
    pub name:        String,
    /// What they ship ("Lumber", "Produce", …).
    pub commodity:   String,
    /// Trailer type their freight requires.
    pub mode:        EquipmentMode,
    /// Special handling requirement, narrative only ("Must Tarp", …).
    pub requirement: String,
    /// One-time acquisition fee in whole dollars.
    pub fee:         i64,
    pub volume:      VolumeTier,
}

// ── CustomerDirectory ─────────────────────────────────────────────────────────

/// The immutable customer catalog.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomerDirectory {
    customers: Vec<CustomerProfile>,
}

impl CustomerDirectory {
    /// Build from profiles; each profile's `id` should equal its index.
    pub fn new(customers: Vec<CustomerProfile>) -> Self {
        Self { customers }
    }

    /// The stock catalog: six shippers spanning every equipment mode and
    /// volume tier.
    pub fn standard() -> Self {
        use EquipmentMode::*;
        let entries: [(&str, &str, EquipmentMode, &str, i64, VolumeTier); 6] = [
            ("Home Depot", "Lumber", Flatbed, "Must Tarp", 5_000, VolumeTier::High),
            ("Coca-Cola", "Syrup", Reefer, "Temp: 34°F", 8_000, VolumeTier::High),
            ("Georgia Pacific", "Paper", DryVan, "Clean Trailer", 4_000, VolumeTier::Med),
            ("Shaw Floors", "Carpet", DryVan, "Floor Load", 3_000, VolumeTier::Med),
            ("Publix", "Produce", Reefer, "Continuous Cool", 6_000, VolumeTier::High),
            ("Amazon", "Drop Trailer", PowerOnly, "Bobtail In", 10_000, VolumeTier::VeryHigh),
        ];
        let customers = entries
            .into_iter()
            .enumerate()
            .map(|(i, (name, commodity, mode, requirement, fee, volume))| CustomerProfile {
                id:          CustomerId(i as u16),
                name:        name.to_string(),
                commodity:   commodity.to_string(),
                mode,
                requirement: requirement.to_string(),
                fee,
                volume,
            })
            .collect();
        Self { customers }
    }

    pub fn all(&self) -> &[CustomerProfile] {
        &self.customers
    }

    pub fn get(&self, id: CustomerId) -> Option<&CustomerProfile> {
        self.customers.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}
