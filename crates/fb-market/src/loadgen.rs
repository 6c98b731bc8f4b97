//! Daily load generation.
//!
//! Invoked once when the simulation starts (seeding day 1) and once per day
//! advancement.  Each active customer independently tenders a volume-tier
//! dependent number of loads on a uniformly random origin → destination pair
//! (destination resampled away from the origin; terminates because the map
//! has at least two cities).
//!
//! Lane classification — and therefore the rate — comes from the *origin*
//! city: freight prices on where it leaves from, not where it lands.

use fb_catalog::{CityMap, CustomerProfile, VolumeTier};
use fb_core::{Day, GameRng, LoadId};

use crate::load::{Load, LoadStatus};
use crate::rate::MarketTuning;

/// Loads tendered by one customer today, drawn from the tier distribution:
/// VeryHigh → 3 (p=0.9) else 2; High → 2 (p=0.7) else 1; Med → 1 (p=0.4)
/// else 0.
fn daily_load_count(tier: VolumeTier, rng: &mut GameRng) -> u32 {
    match tier {
        VolumeTier::VeryHigh => {
            if rng.gen_bool(0.9) { 3 } else { 2 }
        }
        VolumeTier::High => {
            if rng.gen_bool(0.7) { 2 } else { 1 }
        }
        VolumeTier::Med => {
            if rng.gen_bool(0.4) { 1 } else { 0 }
        }
    }
}

/// Generate the day's fresh load offers for every active customer.
///
/// All returned loads are `Available` and stamped with `day`; ids are unique
/// within the call (per-customer sequence) and across the run (day-scoped).
/// Returns an empty vec if the map has fewer than two cities — no valid
/// lane exists.
pub fn generate_loads_for_day(
    customers: &[CustomerProfile],
    cities:    &CityMap,
    day:       Day,
    tuning:    &MarketTuning,
    rng:       &mut GameRng,
) -> Vec<Load> {
    if cities.len() < 2 {
        return Vec::new();
    }

    let mut loads = Vec::new();
    for customer in customers {
        let count = daily_load_count(customer.volume, rng);
        for seq in 0..count {
            // Uniform origin, then resample the destination until distinct.
            let origin = rng
                .choose(cities.cities())
                .expect("city map is non-empty")
                .clone();
            let destination = loop {
                let candidate = rng.choose(cities.cities()).expect("city map is non-empty");
                if candidate.name != origin.name {
                    break candidate.clone();
                }
            };

            let distance = origin.point.distance_miles(destination.point);
            let lane = origin.lane;
            let revenue = tuning.revenue(distance, lane, customer.mode);
            let base_cost = tuning.base_cost(revenue, rng);

            loads.push(Load {
                id:             LoadId::new(day, customer.id, seq as u16),
                customer:       customer.id,
                customer_name:  customer.name.clone(),
                commodity:      customer.commodity.clone(),
                mode:           customer.mode,
                requirement:    customer.requirement.clone(),
                origin:         origin.name,
                destination:    destination.name,
                distance_miles: distance,
                lane,
                revenue,
                base_cost,
                created:        day,
                status:         LoadStatus::Available,
            });
        }
    }
    loads
}
