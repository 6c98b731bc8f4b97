//! Strongly typed, zero-cost identifier wrappers.
//!
//! Catalog IDs (`CustomerId`, `CarrierId`) index into the static directory
//! tables and are `Copy + Ord + Hash` so they work as map keys without
//! ceremony.  `LoadId` is structured rather than a bare counter: it encodes
//! the creation day, the owning customer, and a per-generation sequence
//! number, which makes it unique across a simulation run by construction —
//! two generation passes never share a day, and two loads from the same pass
//! never share a (customer, seq) pair.

use std::fmt;

use crate::day::Day;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to the type's max.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a customer in the customer directory.
    pub struct CustomerId(u16);
}

typed_id! {
    /// Index of a carrier in the carrier directory.
    pub struct CarrierId(u16);
}

// ── LoadId ────────────────────────────────────────────────────────────────────

/// Structured load identifier: `(creation day, customer, per-pass sequence)`.
///
/// Uniqueness is a correctness requirement — delivery crediting and ledger
/// entries key off it — so the components are carried explicitly instead of
/// relying on a formatted string.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadId {
    pub day:      Day,
    pub customer: CustomerId,
    pub seq:      u16,
}

impl LoadId {
    pub fn new(day: Day, customer: CustomerId, seq: u16) -> Self {
        Self { day, customer, seq }
    }

    /// Short tag for narrative ledger messages, e.g. `D3-C1-0`.
    pub fn tag(&self) -> String {
        format!("D{}-C{}-{}", self.day.0, self.customer.0, self.seq)
    }
}

impl fmt::Display for LoadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}
