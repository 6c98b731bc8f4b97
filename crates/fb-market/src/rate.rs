//! Per-mile rates, revenue, and market base cost.
//!
//! All constants here are policy, not physics — they live in [`MarketTuning`]
//! so balance changes never touch the engine's structure.  The defaults are
//! the canonical game values.

use fb_core::{EquipmentMode, GameRng, LaneKind};

/// Tunable market-rate policy.
///
/// Lane rates *replace* the base rate; equipment surcharges then stack
/// additively on top of whichever lane rate applied.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketTuning {
    /// Rate for a Neutral lane, $/mile.
    pub base_rate: f64,
    /// Rate for a Headhaul origin (premium).
    pub headhaul_rate: f64,
    /// Rate for a Backhaul origin (discount).
    pub backhaul_rate: f64,
    /// Additive surcharge for Reefer freight.
    pub reefer_surcharge: f64,
    /// Additive surcharge for Flatbed freight.
    pub flatbed_surcharge: f64,
    /// Additive adjustment for Power Only freight (negative: no trailer).
    pub power_only_surcharge: f64,
    /// Base cost is a uniform fraction of revenue in this closed range,
    /// giving the intended 15–30% headline margin before carrier variance.
    pub cost_fraction_min: f64,
    pub cost_fraction_max: f64,
}

impl Default for MarketTuning {
    fn default() -> Self {
        Self {
            base_rate:            2.5,
            headhaul_rate:        3.8,
            backhaul_rate:        2.2,
            reefer_surcharge:     0.5,
            flatbed_surcharge:    0.6,
            power_only_surcharge: -0.4,
            cost_fraction_min:    0.70,
            cost_fraction_max:    0.85,
        }
    }
}

impl MarketTuning {
    /// Market rate in $/mile for a lane/equipment combination.
    pub fn rate_per_mile(&self, lane: LaneKind, mode: EquipmentMode) -> f64 {
        let lane_rate = match lane {
            LaneKind::Headhaul => self.headhaul_rate,
            LaneKind::Backhaul => self.backhaul_rate,
            LaneKind::Neutral  => self.base_rate,
        };
        let surcharge = match mode {
            EquipmentMode::Reefer    => self.reefer_surcharge,
            EquipmentMode::Flatbed   => self.flatbed_surcharge,
            EquipmentMode::PowerOnly => self.power_only_surcharge,
            EquipmentMode::DryVan    => 0.0,
        };
        lane_rate + surcharge
    }

    /// Price charged to the customer: `floor(distance × rate)`.
    pub fn revenue(&self, distance_miles: u32, lane: LaneKind, mode: EquipmentMode) -> i64 {
        (distance_miles as f64 * self.rate_per_mile(lane, mode)).floor() as i64
    }

    /// Underlying market cost: a uniform 70–85% fraction of revenue (under
    /// the default tuning).  Carrier quotes are derived from this figure.
    pub fn base_cost(&self, revenue: i64, rng: &mut GameRng) -> i64 {
        let fraction = rng.gen_range(self.cost_fraction_min..self.cost_fraction_max);
        (revenue as f64 * fraction).floor() as i64
    }
}
