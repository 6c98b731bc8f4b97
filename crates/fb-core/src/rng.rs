//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! Randomness is the simulation's only nondeterminism, so it is threaded
//! through every stochastic operation as an explicit `&mut GameRng` argument
//! rather than read from an ambient source.  The same master seed always
//! replays the same run, which is what makes the stochastic outcome paths
//! (quotes, breakdown rolls, transit events) testable at all.
//!
//! `child()` derives an independent stream from the parent using a
//! golden-ratio mixing constant, for callers that need throwaway draws
//! without disturbing the main stream.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seedable RNG for all stochastic simulation draws.
#[derive(Debug)]
pub struct GameRng(SmallRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        GameRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent child stream for draws that must not perturb
    /// the parent sequence.
    pub fn child(&mut self, offset: u64) -> GameRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        GameRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Uniform draw in `[0, 100)` — the reliability-roll convention: the
    /// booking fails when the roll exceeds the carrier's score.
    #[inline]
    pub fn percent_roll(&mut self) -> f64 {
        self.0.gen_range(0.0..100.0)
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
