//! `fb-market` — the market-facing policy layer of the freight_broker
//! simulation: how loads are priced, tendered, quoted, and resolved.
//!
//! Everything here is a pure function of `(inputs, random draws)`; nothing
//! in this crate mutates simulation state.  The engine crate owns the store
//! and applies these functions' outputs as atomic transitions.
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`rate`]    | `MarketTuning`, per-mile rates, revenue and base cost   |
//! | [`load`]    | `Load`, `LoadStatus`, `CarrierAssignment`               |
//! | [`loadgen`] | `generate_loads_for_day`                                |
//! | [`quote`]   | `Quote`, `generate_quotes`, `best_quote`                |
//! | [`booking`] | `BookingResult`, `resolve_booking`                      |

pub mod booking;
pub mod load;
pub mod loadgen;
pub mod quote;
pub mod rate;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use booking::{BookingResult, resolve_booking};
pub use load::{CarrierAssignment, Load, LoadStatus, transit_days};
pub use loadgen::generate_loads_for_day;
pub use quote::{QUOTES_PER_LOAD, Quote, best_quote, generate_quotes};
pub use rate::MarketTuning;
