//! # Random indices
//!
//! The randomized operators of [`Permutation`](crate::permutation::Permutation) only ever
//! need two things from a source of randomness: a uniform index in `0..bound` and a fair
//! coin. [`RandomIndexer`] is that capability. It is implemented for every
//! [`rand::RngCore`], so any generator from the `rand` ecosystem (`SmallRng`, `StdRng`,
//! `ThreadRng`, ...) can be passed directly, including as `&mut dyn RngCore`.
//!
//! Indices are drawn with the multiply-shift method: a 32-bit draw is multiplied by the
//! bound and the high word is kept. [`RandomIndexer::next_index`] rejects the few draws
//! that would bias the result, [`RandomIndexer::next_biased_index`] does not.

use rand::RngCore;

/// A source of uniformly distributed indices and booleans.
pub trait RandomIndexer {
    /// Returns an index uniformly distributed in `0..bound`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use permkit::random::RandomIndexer;
    /// use rand::{rngs::SmallRng, SeedableRng};
    ///
    /// let mut rng = SmallRng::seed_from_u64(7);
    /// let i = rng.next_index(10);
    /// assert!(i < 10);
    /// ```
    fn next_index(&mut self, bound: usize) -> usize;

    /// Returns an index in `0..bound` without the rejection step of
    /// [`next_index`](RandomIndexer::next_index). The bias is at most `bound / 2^32`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    fn next_biased_index(&mut self, bound: usize) -> usize;

    /// Returns `true` or `false` with equal probability.
    fn next_bool(&mut self) -> bool;
}

impl<R: RngCore + ?Sized> RandomIndexer for R {
    fn next_index(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "bound must be positive");
        match u32::try_from(bound) {
            Ok(bound) => {
                let mut product = u64::from(self.next_u32()) * u64::from(bound);
                let mut low = product as u32;
                if low < bound {
                    let threshold = bound.wrapping_neg() % bound;
                    while low < threshold {
                        product = u64::from(self.next_u32()) * u64::from(bound);
                        low = product as u32;
                    }
                }
                (product >> 32) as usize
            }
            Err(_) => {
                let bound = bound as u64;
                let mut product = u128::from(self.next_u64()) * u128::from(bound);
                let mut low = product as u64;
                if low < bound {
                    let threshold = bound.wrapping_neg() % bound;
                    while low < threshold {
                        product = u128::from(self.next_u64()) * u128::from(bound);
                        low = product as u64;
                    }
                }
                (product >> 64) as usize
            }
        }
    }

    fn next_biased_index(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "bound must be positive");
        match u32::try_from(bound) {
            Ok(bound) => ((u64::from(self.next_u32()) * u64::from(bound)) >> 32) as usize,
            Err(_) => ((u128::from(self.next_u64()) * bound as u128) >> 64) as usize,
        }
    }

    fn next_bool(&mut self) -> bool {
        self.next_u32() >> 31 == 1
    }
}
