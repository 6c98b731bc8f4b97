//! Carrier directory: the immutable catalog of carriers a load can be
//! quoted against.

use fb_core::{CarrierId, EquipmentMode, FleetKind};

/// One carrier's catalog entry.
///
/// `score` is read as "percent chance of an on-time, successful delivery":
/// the booking resolver rolls uniform [0, 100) against it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarrierProfile {
    pub name:  String,
    /// Reliability score, 0–100.
    pub score: u8,
    pub fleet: FleetKind,
}

impl CarrierProfile {
    pub fn new(name: impl Into<String>, score: u8, fleet: FleetKind) -> Self {
        Self {
            name: name.into(),
            score: score.min(100),
            fleet,
        }
    }
}

// ── CarrierDirectory ──────────────────────────────────────────────────────────

/// The immutable carrier catalog.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarrierDirectory {
    carriers: Vec<CarrierProfile>,
}

impl CarrierDirectory {
    pub fn new(carriers: Vec<CarrierProfile>) -> Self {
        Self { carriers }
    }

    /// The stock catalog: seven carriers across all fleet types.
    pub fn standard() -> Self {
        use EquipmentMode::*;
        Self::new(vec![
            CarrierProfile::new("Swift", 75, FleetKind::Only(DryVan)),
            CarrierProfile::new("Old Dominion", 95, FleetKind::Only(DryVan)),
            CarrierProfile::new("Maverick", 92, FleetKind::Only(Flatbed)),
            CarrierProfile::new("Prime Inc", 90, FleetKind::Only(Reefer)),
            CarrierProfile::new("Billy Bob's Trucking", 60, FleetKind::Any),
            CarrierProfile::new("Coyote", 85, FleetKind::Only(PowerOnly)),
            CarrierProfile::new("Landstar", 88, FleetKind::Only(Flatbed)),
        ])
    }

    pub fn all(&self) -> &[CarrierProfile] {
        &self.carriers
    }

    pub fn get(&self, id: CarrierId) -> Option<&CarrierProfile> {
        self.carriers.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.carriers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carriers.is_empty()
    }

    /// Carriers whose fleet can cover `mode` with the right equipment.
    pub fn matching(&self, mode: EquipmentMode) -> Vec<&CarrierProfile> {
        self.carriers.iter().filter(|c| c.fleet.matches(mode)).collect()
    }
}
