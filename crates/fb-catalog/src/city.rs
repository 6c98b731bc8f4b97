//! Geography table: named cities with map coordinates and lane classification.
//!
//! Distance between two cities is a pure function of their coordinates
//! (scaled Euclidean, see `fb_core::geo`).  An unknown city name yields a
//! distance of 0 — callers must treat 0 as the "invalid route" sentinel, not
//! a real zero-length lane.

use fb_core::{LaneKind, MapPoint};

/// One named location on the board.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub name:  String,
    pub point: MapPoint,
    pub lane:  LaneKind,
    /// Short market label shown on the map ("Hub", "Port", …).
    pub label: String,
}

// ── CityMap ───────────────────────────────────────────────────────────────────

/// The immutable geography table.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityMap {
    cities: Vec<City>,
}

impl CityMap {
    /// The stock Georgia board: seven cities, three lane classes.
    pub fn georgia() -> Self {
        let mut b = CityMapBuilder::new();
        b.add_city("Atlanta", MapPoint::new(140.0, 150.0), LaneKind::Headhaul, "Hub");
        b.add_city("Savannah", MapPoint::new(330.0, 300.0), LaneKind::Headhaul, "Port");
        b.add_city("Dalton", MapPoint::new(130.0, 50.0), LaneKind::Backhaul, "Mfg");
        b.add_city("Valdosta", MapPoint::new(200.0, 400.0), LaneKind::Backhaul, "Ag");
        b.add_city("Augusta", MapPoint::new(280.0, 180.0), LaneKind::Neutral, "Mix");
        b.add_city("Columbus", MapPoint::new(80.0, 260.0), LaneKind::Neutral, "Mix");
        b.add_city("Athens", MapPoint::new(200.0, 130.0), LaneKind::Neutral, "Mix");
        b.build()
    }

    /// Look up a city by name.
    pub fn get(&self, name: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.name == name)
    }

    /// All cities, in insertion order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Lane distance in miles between two named cities.
    ///
    /// Returns 0 if either name is unknown — the invalid-route sentinel.
    pub fn distance(&self, origin: &str, dest: &str) -> u32 {
        match (self.get(origin), self.get(dest)) {
            (Some(a), Some(b)) => a.point.distance_miles(b.point),
            _ => 0,
        }
    }

    /// Lane classification of a named city, `Neutral` if unknown.
    pub fn lane(&self, name: &str) -> LaneKind {
        self.get(name).map(|c| c.lane).unwrap_or_default()
    }
}

// ── CityMapBuilder ────────────────────────────────────────────────────────────

/// Incremental construction of a [`CityMap`].
#[derive(Default)]
pub struct CityMapBuilder {
    cities: Vec<City>,
}

impl CityMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a city.  Later entries with a duplicate name are shadowed by
    /// the first (lookups scan in insertion order).
    pub fn add_city(
        &mut self,
        name:  impl Into<String>,
        point: MapPoint,
        lane:  LaneKind,
        label: impl Into<String>,
    ) -> &mut Self {
        self.cities.push(City {
            name:  name.into(),
            point,
            lane,
            label: label.into(),
        });
        self
    }

    pub fn build(self) -> CityMap {
        CityMap { cities: self.cities }
    }
}
