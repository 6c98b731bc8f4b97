//! Map coordinates, scaled lane distance, and lane classification.
//!
//! Coordinates are abstract map units, not geodetic: the game board is a
//! stylized state map.  Distance is Euclidean, scaled by a fixed factor and
//! floored to whole miles, which keeps revenue arithmetic exact.

/// A 2D map coordinate in abstract map units.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapPoint {
    pub x: f32,
    pub y: f32,
}

/// Map-unit → mile scale factor applied after the Euclidean norm.
const MILE_SCALE: f32 = 1.5;

impl MapPoint {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Lane distance in whole miles: `floor(|a - b| × 1.5)`.
    ///
    /// Symmetric by construction; `a.distance_miles(a) == 0`.
    pub fn distance_miles(self, other: MapPoint) -> u32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        ((dx * dx + dy * dy).sqrt() * MILE_SCALE).floor() as u32
    }
}

impl std::fmt::Display for MapPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

// ── LaneKind ──────────────────────────────────────────────────────────────────

/// Freight-lane classification of a location, determined by its market:
/// outbound-heavy (premium rates), inbound-heavy (discount rates), or
/// balanced.  Rating uses the classification of the *origin* city.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LaneKind {
    /// Outbound freight exceeds inbound — carriers charge a premium.
    Headhaul,
    /// Return-leg market — carriers discount to avoid deadheading home.
    Backhaul,
    /// Balanced market, base rate.
    #[default]
    Neutral,
}

impl LaneKind {
    /// Human-readable label, useful for ledger messages and CSV columns.
    pub fn as_str(self) -> &'static str {
        match self {
            LaneKind::Headhaul => "Headhaul",
            LaneKind::Backhaul => "Backhaul",
            LaneKind::Neutral  => "Neutral",
        }
    }
}

impl std::fmt::Display for LaneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
