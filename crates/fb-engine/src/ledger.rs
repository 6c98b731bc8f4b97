//! The append-only activity ledger and its aggregate analytics.
//!
//! Booking and delivery entries deliberately duplicate origin/destination:
//! loads can be mutated or dropped after history is written, and downstream
//! consumers (map trails, analytics) must be able to render history
//! self-contained.  Do not normalize this away.

use fb_core::{Day, LoadId};

/// Discriminant for filtering without matching the full entry.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LedgerKind {
    Booking,
    Delivery,
    Event,
}

impl LedgerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LedgerKind::Booking  => "BOOKING",
            LedgerKind::Delivery => "DELIVERY",
            LedgerKind::Event    => "EVENT",
        }
    }
}

impl std::fmt::Display for LedgerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── LedgerEntry ───────────────────────────────────────────────────────────────

/// One immutable record on the activity ledger.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LedgerEntry {
    /// A load was covered — by the player or by the autopilot.
    Booking {
        day:         Day,
        load:        LoadId,
        origin:      String,
        destination: String,
        carrier:     String,
        /// Realized margin after any booking penalty.
        margin:      i64,
        success:     bool,
        message:     String,
    },
    /// A dispatched load reached 100% progress and paid out.
    Delivery {
        day:         Day,
        load:        LoadId,
        origin:      String,
        destination: String,
        carrier:     String,
        margin:      i64,
        success:     bool,
        message:     String,
    },
    /// A narrative in-transit event.  Cosmetic: no financial fields.
    Event {
        day:     Day,
        load:    Option<LoadId>,
        message: String,
    },
}

impl LedgerEntry {
    pub fn kind(&self) -> LedgerKind {
        match self {
            LedgerEntry::Booking { .. }  => LedgerKind::Booking,
            LedgerEntry::Delivery { .. } => LedgerKind::Delivery,
            LedgerEntry::Event { .. }    => LedgerKind::Event,
        }
    }

    pub fn day(&self) -> Day {
        match self {
            LedgerEntry::Booking { day, .. }
            | LedgerEntry::Delivery { day, .. }
            | LedgerEntry::Event { day, .. } => *day,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            LedgerEntry::Booking { message, .. }
            | LedgerEntry::Delivery { message, .. }
            | LedgerEntry::Event { message, .. } => message,
        }
    }

    /// Realized margin for financial entries, `None` for events.
    pub fn margin(&self) -> Option<i64> {
        match self {
            LedgerEntry::Booking { margin, .. } | LedgerEntry::Delivery { margin, .. } => {
                Some(*margin)
            }
            LedgerEntry::Event { .. } => None,
        }
    }

    /// Success flag for financial entries, `None` for events.
    pub fn success(&self) -> Option<bool> {
        match self {
            LedgerEntry::Booking { success, .. } | LedgerEntry::Delivery { success, .. } => {
                Some(*success)
            }
            LedgerEntry::Event { .. } => None,
        }
    }
}

// ── LedgerStats ───────────────────────────────────────────────────────────────

/// Aggregates derived from the ledger for the analytics surface.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LedgerStats {
    pub bookings:            usize,
    pub successful_bookings: usize,
    pub deliveries:          usize,
    pub events:              usize,
    /// Sum of delivery margins — realized profit on completed freight.
    pub delivered_profit:    i64,
}

impl LedgerStats {
    /// Scan the ledger once and accumulate every aggregate.
    pub fn from_entries(entries: &[LedgerEntry]) -> Self {
        let mut stats = LedgerStats::default();
        for entry in entries {
            match entry {
                LedgerEntry::Booking { success, .. } => {
                    stats.bookings += 1;
                    if *success {
                        stats.successful_bookings += 1;
                    }
                }
                LedgerEntry::Delivery { margin, .. } => {
                    stats.deliveries += 1;
                    stats.delivered_profit += margin;
                }
                LedgerEntry::Event { .. } => stats.events += 1,
            }
        }
        stats
    }

    /// On-time performance: share of bookings resolved without a mismatch or
    /// breakdown, in percent.  100.0 with no bookings yet.
    pub fn on_time_performance(&self) -> f64 {
        if self.bookings == 0 {
            100.0
        } else {
            self.successful_bookings as f64 / self.bookings as f64 * 100.0
        }
    }

    pub fn failed_bookings(&self) -> usize {
        self.bookings - self.successful_bookings
    }
}
