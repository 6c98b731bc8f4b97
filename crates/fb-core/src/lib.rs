//! `fb-core` — foundational types for the `freight_broker` simulation.
//!
//! This crate is a dependency of every other `fb-*` crate.  It intentionally
//! has no `fb-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).  Nothing here can fail: lookups that can miss return
//! sentinels (`CityMap` distance) or `Option`; error enums live in the
//! crates whose operations actually reject (`fb-engine`, `fb-output`).
//!
//! # What lives here
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`ids`]       | `CustomerId`, `CarrierId`, `LoadId`                 |
//! | [`geo`]       | `MapPoint`, scaled map distance, `LaneKind`         |
//! | [`day`]       | `Day` counter                                       |
//! | [`rng`]       | `GameRng` (seedable simulation RNG)                 |
//! | [`equipment`] | `EquipmentMode`, `FleetKind`                        |
//! | [`config`]    | `GameConfig`, `Difficulty`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types (the engine's snapshot contract needs it). |

pub mod config;
pub mod day;
pub mod equipment;
pub mod geo;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{Difficulty, GameConfig};
pub use day::Day;
pub use equipment::{EquipmentMode, FleetKind};
pub use geo::{LaneKind, MapPoint};
pub use ids::{CarrierId, CustomerId, LoadId};
pub use rng::GameRng;
