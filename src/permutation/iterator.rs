use std::iter::FusedIterator;

use tracing::trace;

use super::{factorial, Permutation};
use crate::{error::PermutationError, random::RandomIndexer};

/// Iterator over all `n!` permutations of length `n`, each visited exactly once.
///
/// Successive permutations differ by a few swaps driven by a per-position swap history,
/// so the full enumeration is never materialized. The starting permutation is returned
/// first. Each item is an owned snapshot: changing it has no effect on the iterator, and
/// the iterator never aliases the permutation it was started from.
///
/// `has_next` is O(1); advancing is O(n) in the worst case.
///
/// # Examples
///
/// ```
/// use permkit::permutation::{Permutation, PermutationIterator};
///
/// let all: Vec<Permutation> = PermutationIterator::new(3).collect();
/// assert_eq!(all.len(), 6);
/// assert!(all[0].is_identity());
/// ```
#[derive(Debug, Clone)]
pub struct PermutationIterator {
    current: Permutation,
    // swap_history[i] is in i..n: the position last swapped into i
    swap_history: Vec<usize>,
    // permutations not yet returned; None when n! overflows usize
    remaining: Option<usize>,
    done: bool,
}

impl PermutationIterator {
    /// Iterates over the permutations of length `n`, starting at the identity.
    pub fn new(n: usize) -> Self {
        Permutation::identity(n).into()
    }

    /// Iterates over the permutations of `start.len()`, starting at a copy of `start`.
    pub fn from_start(start: &Permutation) -> Self {
        start.clone().into()
    }

    /// Iterates over the permutations of length `n`, starting at a random one.
    pub fn random_with<R: RandomIndexer + ?Sized>(n: usize, rng: &mut R) -> Self {
        Permutation::random_with(n, rng).into()
    }

    pub fn has_next(&self) -> bool {
        !self.done
    }

    /// Returns the next permutation, or [`PermutationError::NoSuchElement`] once all of them
    /// have been returned.
    ///
    /// ```
    /// # use permkit::permutation::PermutationIterator;
    /// # use permkit::error::PermutationError;
    /// let mut it = PermutationIterator::new(1);
    /// assert_eq!(it.try_next().unwrap().as_slice(), &[0]);
    /// assert_eq!(it.try_next(), Err(PermutationError::NoSuchElement));
    /// ```
    pub fn try_next(&mut self) -> Result<Permutation, PermutationError> {
        if self.done {
            return Err(PermutationError::NoSuchElement);
        }
        let snapshot = self.current.clone();
        if let Some(remaining) = &mut self.remaining {
            *remaining -= 1;
        }
        self.advance();
        Ok(snapshot)
    }

    fn advance(&mut self) {
        let n = self.swap_history.len();
        if n <= 1 {
            self.done = true;
            trace!(n, "permutation iterator exhausted");
            return;
        }
        for i in (0..n - 1).rev() {
            let partner = self.swap_history[i];
            if partner != i {
                self.current.values.swap(i, partner);
            }
            if partner == n - 1 {
                self.swap_history[i] = i;
                if i == 0 {
                    self.done = true;
                    trace!(n, "permutation iterator exhausted");
                }
                continue;
            }
            self.swap_history[i] = partner + 1;
            self.current.values.swap(i, partner + 1);
            break;
        }
    }
}

impl From<Permutation> for PermutationIterator {
    /// Takes ownership of `start` as the working permutation.
    fn from(start: Permutation) -> Self {
        PermutationIterator {
            swap_history: (0..start.len()).collect(),
            remaining: factorial(start.len()),
            current: start,
            done: false,
        }
    }
}

impl Iterator for PermutationIterator {
    type Item = Permutation;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    /// Exact while `n!` fits a `usize`.
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            _ if self.done => (0, Some(0)),
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for PermutationIterator {}
