//! Simulation day counter.
//!
//! Time advances in whole days, exactly once per end-day action.  An integer
//! counter keeps transit arithmetic exact and comparisons O(1) — the same
//! reasoning as a tick counter in a continuous-time simulator, just coarser.

use std::fmt;

/// A 1-based simulation day.  Day 1 is the first playable day.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Day(pub u32);

impl Day {
    pub const FIRST: Day = Day(1);

    /// The day `n` days after `self`.
    #[inline]
    pub fn offset(self, n: u32) -> Day {
        Day(self.0 + n)
    }

    /// The next day.
    #[inline]
    pub fn next(self) -> Day {
        Day(self.0 + 1)
    }

    /// Days elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Day) -> u32 {
        self.0 - earlier.0
    }
}

impl Default for Day {
    fn default() -> Self {
        Day::FIRST
    }
}

impl std::ops::Add<u32> for Day {
    type Output = Day;
    #[inline]
    fn add(self, rhs: u32) -> Day {
        Day(self.0 + rhs)
    }
}

impl std::ops::Sub for Day {
    type Output = u32;
    #[inline]
    fn sub(self, rhs: Day) -> u32 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {}", self.0)
    }
}
