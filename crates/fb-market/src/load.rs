//! The central mutable entity: a shipment offer and its lifecycle.
//!
//! # Lifecycle
//!
//! ```text
//! Available ──book──▶ Dispatched ──advance…──▶ Delivered (terminal)
//! ```
//!
//! The status-specific mutable fields (assigned carrier, realized margin,
//! transit progress) live inside the [`LoadStatus`] variants, so an
//! `Available` load structurally cannot carry a margin and a `Delivered`
//! load cannot be advanced — the invariants are encoded in the type.

use fb_core::{CustomerId, Day, EquipmentMode, LaneKind, LoadId};

/// Nominal line-haul pace used to derive transit time from distance.
const MILES_PER_DAY: u32 = 500;

/// Transit duration at booking time: `ceil(distance / 500) + 1`.
/// The `+1` models fixed load/unload overhead at the two docks.
#[inline]
pub fn transit_days(distance_miles: u32) -> u32 {
    distance_miles.div_ceil(MILES_PER_DAY) + 1
}

// ── CarrierAssignment ─────────────────────────────────────────────────────────

/// The carrier set on a load at booking.  Name and driver only — the score
/// and fleet were consumed by resolution and matter no further.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarrierAssignment {
    pub name:   String,
    pub driver: String,
}

// ── LoadStatus ────────────────────────────────────────────────────────────────

/// Where a load is in its lifecycle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadStatus {
    /// Tendered, waiting for the broker to cover it.
    Available,
    /// Covered and rolling.
    Dispatched {
        carrier: CarrierAssignment,
        /// Realized margin, set once at booking (revenue − final cost ± penalty).
        margin: i64,
        /// Transit progress, 0–100.  Monotonically non-decreasing.
        progress: f64,
        days_in_transit: u32,
        /// Total days to deliver, fixed at booking from distance.
        total_days: u32,
    },
    /// Delivered — terminal.  Margin and carrier are retained for rendering.
    Delivered {
        carrier: CarrierAssignment,
        margin:  i64,
    },
}

// ── Load ──────────────────────────────────────────────────────────────────────

/// A single shipment offer.
///
/// All fields other than `status` are immutable once the load is created;
/// customer name/commodity and origin/destination are denormalized copies so
/// the load (and later, ledger entries) render without directory lookups.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Load {
    pub id:             LoadId,
    pub customer:       CustomerId,
    pub customer_name:  String,
    pub commodity:      String,
    pub mode:           EquipmentMode,
    pub requirement:    String,
    pub origin:         String,
    pub destination:    String,
    pub distance_miles: u32,
    pub lane:           LaneKind,
    /// Price charged to the customer.
    pub revenue:        i64,
    /// Underlying market cost carrier quotes derive from.
    pub base_cost:      i64,
    pub created:        Day,
    pub status:         LoadStatus,
}

impl Load {
    #[inline]
    pub fn is_available(&self) -> bool {
        matches!(self.status, LoadStatus::Available)
    }

    #[inline]
    pub fn is_dispatched(&self) -> bool {
        matches!(self.status, LoadStatus::Dispatched { .. })
    }

    #[inline]
    pub fn is_delivered(&self) -> bool {
        matches!(self.status, LoadStatus::Delivered { .. })
    }

    /// Transition `Available → Dispatched` with a fresh transit state.
    ///
    /// Caller must have checked `is_available()`; booking a non-available
    /// load is a precondition violation the engine guards against.
    pub fn dispatch(&mut self, carrier: CarrierAssignment, margin: i64) {
        self.status = LoadStatus::Dispatched {
            carrier,
            margin,
            progress: 0.0,
            days_in_transit: 0,
            total_days: transit_days(self.distance_miles),
        };
    }
}
