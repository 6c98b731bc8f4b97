//! Trailer equipment types shared across the market and engine crates.
//!
//! Two sides of the same coin: a load *requires* an [`EquipmentMode`]; a
//! carrier *operates* a [`FleetKind`], which is either a concrete mode or
//! `Any` (a brokerage-style fleet that can source whatever trailer is asked
//! for).

/// Trailer type a load requires.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipmentMode {
    /// Standard enclosed 53' trailer.
    #[default]
    DryVan,
    /// Refrigerated trailer for temperature-controlled freight.
    Reefer,
    /// Open deck for oversize/construction freight.
    Flatbed,
    /// Customer supplies the trailer; carrier brings only a tractor.
    PowerOnly,
}

impl EquipmentMode {
    pub fn as_str(self) -> &'static str {
        match self {
            EquipmentMode::DryVan    => "Dry Van",
            EquipmentMode::Reefer    => "Reefer",
            EquipmentMode::Flatbed   => "Flatbed",
            EquipmentMode::PowerOnly => "Power Only",
        }
    }
}

impl std::fmt::Display for EquipmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── FleetKind ─────────────────────────────────────────────────────────────────

/// What a carrier's fleet runs.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FleetKind {
    /// Fleet dedicated to one trailer type.
    Only(EquipmentMode),
    /// Mixed/brokered fleet — can cover any mode.
    Any,
}

impl FleetKind {
    /// Whether this fleet can haul a load requiring `mode` with the right
    /// equipment.  `Any` fleets always match; Power Only loads accept any
    /// tractor, so every fleet matches them.
    #[inline]
    pub fn matches(self, mode: EquipmentMode) -> bool {
        match self {
            FleetKind::Any        => true,
            FleetKind::Only(m)    => m == mode || mode == EquipmentMode::PowerOnly,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FleetKind::Only(m) => m.as_str(),
            FleetKind::Any     => "Any",
        }
    }
}

impl std::fmt::Display for FleetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
