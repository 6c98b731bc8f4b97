//! `fb-catalog` — the static data tables the simulation draws from.
//!
//! Three pure-data directories, loaded once and never mutated:
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`city`]     | `City`, `CityMap` — geography and lane distances       |
//! | [`carrier`]  | `CarrierProfile`, `CarrierDirectory`                   |
//! | [`customer`] | `CustomerProfile`, `CustomerDirectory`, `VolumeTier`   |
//!
//! Each directory ships a built-in default (`CityMap::georgia()`,
//! `CarrierDirectory::standard()`, `CustomerDirectory::standard()`) carrying
//! the stock game data; applications with their own world build custom
//! tables via `CityMapBuilder` and the directory constructors.

pub mod carrier;
pub mod city;
pub mod customer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use carrier::{CarrierDirectory, CarrierProfile};
pub use city::{City, CityMap, CityMapBuilder};
pub use customer::{CustomerDirectory, CustomerProfile, VolumeTier};
