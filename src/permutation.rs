//! # Permutations
//!
//! This module provides a `Permutation` struct and associated functionalities
//! for representing, mutating and enumerating permutations of the integers `0..n`.
//!
//! ## Key Features:
//!
//! - **Representation**: A `Permutation` owns a `Vec<usize>` mapping each position to
//!   the value stored there. Every integer in `0..n` occurs exactly once; all checked
//!   operations preserve this.
//! - **Construction**:
//!   - Identity permutation: `Permutation::identity(n)`.
//!   - Random permutation: `Permutation::random(n)` or `Permutation::random_with(n, rng)`.
//!   - From a vector, validated: `Permutation::try_from_vec(vec![...])`.
//!   - From a rank: `Permutation::from_rank(n, rank)`, `Permutation::from_big_rank(n, &rank)`.
//!   - Prefix copy: `p.truncated(len)`.
//! - **Ranking**: `p.to_integer()` and `p.to_big_integer()` map the `n!` permutations of
//!   length `n` onto `0..n!` in a mixed-radix numbering, inverse to the unranking constructors.
//! - **Mutation**: `swap`, `swap_blocks`, `cycle`, `reverse`, `reverse_range`, `rotate`,
//!   `remove_and_insert`, `remove_and_insert_block`, `scramble`, `scramble_range`,
//!   `scramble_indexes`, `scramble_distinct`, the validated `set_all`, and the unchecked `set`.
//! - **Inverse**: `p.get_inverse()`, `p.inverse_permutation()`, `p.invert()`.
//! - **Enumeration**: `p.permutations()` returns a [`PermutationIterator`] visiting every
//!   permutation of the same length exactly once, starting at `p`.
//!
//! Operators taking positions return [`PermutationError::IndexOutOfRange`] instead of
//! panicking, and leave the permutation untouched when they do.

use std::{fmt, ops::Index, slice};

use bitvec::vec::BitVec;
use num_bigint::BigUint;
use rand::{rngs::SmallRng, SeedableRng};
use tracing::{debug, trace};

use crate::{error::PermutationError, random::RandomIndexer};

mod iterator;
pub use iterator::PermutationIterator;


/// The largest length whose permutations can be ranked into a `usize`, i.e. the largest
/// `n` with `n! <= usize::MAX` (20 on 64-bit targets).
pub const MAX_RANK_LEN: usize = {
    let mut n = 0;
    let mut fact: usize = 1;
    loop {
        match fact.checked_mul(n + 1) {
            Some(next) => {
                fact = next;
                n += 1;
            }
            None => break n,
        }
    }
};

/// A permutation of `0..n`, stored as the sequence of values in position order.
///
/// # Examples
///
/// ```
/// use permkit::permutation::Permutation;
///
/// let mut p = Permutation::try_from_vec(vec![2, 0, 1, 3]).unwrap();
/// p.swap(0, 3).unwrap();
/// assert_eq!(p.as_slice(), &[3, 0, 1, 2]);
/// assert_eq!(p.get_inverse(), vec![1, 2, 3, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Permutation {
    values: Vec<usize>,
}

impl Permutation {
    // --------------------------------------------------------------------------------------------
    // Constructors
    // --------------------------------------------------------------------------------------------

    /// Creates the identity permutation of length `n`.
    ///
    /// ```
    /// # use permkit::permutation::Permutation;
    /// let p = Permutation::identity(4);
    /// assert_eq!(p.as_slice(), &[0, 1, 2, 3]);
    /// ```
    pub fn identity(n: usize) -> Self {
        Permutation {
            values: (0..n).collect(),
        }
    }

    /// Creates a uniformly random permutation of length `n`, drawing from a `SmallRng`
    /// freshly seeded from OS entropy.
    pub fn random(n: usize) -> Self {
        Self::random_with(n, &mut SmallRng::from_entropy())
    }

    /// Creates a uniformly random permutation of length `n` using the supplied source of
    /// randomness.
    ///
    /// ```
    /// # use permkit::permutation::Permutation;
    /// use rand::{rngs::SmallRng, SeedableRng};
    ///
    /// let mut rng = SmallRng::seed_from_u64(11);
    /// let p = Permutation::random_with(6, &mut rng);
    /// assert_eq!(p.len(), 6);
    /// ```
    pub fn random_with<R: RandomIndexer + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut p = Self::identity(n);
        p.scramble(rng);
        p
    }

    /// Creates a permutation from a vector of values, checking that every integer in
    /// `0..values.len()` occurs exactly once. The vector is moved in, so no caller buffer
    /// is shared with the result.
    ///
    /// ```
    /// # use permkit::permutation::Permutation;
    /// # use permkit::error::PermutationError;
    /// assert!(Permutation::try_from_vec(vec![1, 2, 0]).is_ok());
    /// assert_eq!(
    ///     Permutation::try_from_vec(vec![1, 1, 0]),
    ///     Err(PermutationError::DuplicateValue { value: 1 })
    /// );
    /// ```
    pub fn try_from_vec(values: Vec<usize>) -> Result<Self, PermutationError> {
        if let Err(error) = Self::validate(&values) {
            debug!(len = values.len(), %error, "rejected permutation values");
            return Err(error);
        }
        Ok(Permutation { values })
    }

    fn validate(values: &[usize]) -> Result<(), PermutationError> {
        let len = values.len();
        let mut seen: BitVec = BitVec::repeat(false, len);
        for &value in values {
            if value >= len {
                return Err(PermutationError::ValueOutOfRange { value, len });
            }
            if seen.replace(value, true) {
                return Err(PermutationError::DuplicateValue { value });
            }
        }
        Ok(())
    }

    /// Unranks permutation `rank` of length `n`; the inverse of
    /// [`to_integer`](Permutation::to_integer).
    ///
    /// Digit `i` of the mixed-radix numeral (radix `n - i`) selects which of the values not
    /// yet placed goes to position `i`. Ranks at or above `n!` are reduced modulo `n!`.
    ///
    /// ```
    /// # use permkit::permutation::Permutation;
    /// assert_eq!(Permutation::from_rank(4, 0).as_slice(), &[0, 1, 2, 3]);
    /// assert_eq!(Permutation::from_rank(4, 23).as_slice(), &[3, 2, 1, 0]);
    /// assert_eq!(Permutation::from_rank(4, 24), Permutation::from_rank(4, 0));
    /// ```
    pub fn from_rank(n: usize, mut rank: usize) -> Self {
        if let Some(total) = factorial(n) {
            if rank >= total {
                trace!(n, rank, total, "reducing rank modulo n!");
            }
        }
        let mut values: Vec<usize> = (0..n).collect();
        for i in 0..n.saturating_sub(1) {
            let j = i + rank % (n - i);
            values[i..=j].rotate_right(1);
            rank /= n - i;
        }
        Permutation { values }
    }

    /// Unranks a permutation from an arbitrary precision rank, for lengths whose `n!`
    /// does not fit a `usize`. Agrees with [`from_rank`](Permutation::from_rank) wherever
    /// both apply, including the reduction modulo `n!`.
    pub fn from_big_rank(n: usize, rank: &BigUint) -> Self {
        let mut rank = rank.clone();
        let mut values: Vec<usize> = (0..n).collect();
        for i in 0..n.saturating_sub(1) {
            let radix = BigUint::from(n - i);
            let digit = &rank % &radix;
            let j = i + digit.to_u64_digits().first().copied().unwrap_or(0) as usize;
            values[i..=j].rotate_right(1);
            rank /= radix;
        }
        Permutation { values }
    }

    /// Copies the first `len` values of `self`, or all of them if `len >= self.len()`.
    ///
    /// The result is a prefix, not a re-validated permutation: `[3, 0, 2, 1].truncated(2)`
    /// holds `[3, 0]`, which is not a permutation of `0..2`.
    pub fn truncated(&self, len: usize) -> Self {
        let len = len.min(self.values.len());
        Permutation {
            values: self.values[..len].to_vec(),
        }
    }

    // --------------------------------------------------------------------------------------------
    // Accessors
    // --------------------------------------------------------------------------------------------

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value at position `i`, or `None` if `i` is out of range.
    pub fn get(&self, i: usize) -> Option<usize> {
        self.values.get(i).copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.values
    }

    pub fn iter(&self) -> slice::Iter<'_, usize> {
        self.values.iter()
    }

    /// Copies the values at positions `i..=j`.
    ///
    /// Fails with [`PermutationError::InvalidRange`] if `j < i`, and with
    /// [`PermutationError::IndexOutOfRange`] if `j` is past the end.
    ///
    /// ```
    /// # use permkit::permutation::Permutation;
    /// let p = Permutation::try_from_vec(vec![4, 2, 0, 3, 1]).unwrap();
    /// assert_eq!(p.get_range(1, 3).unwrap(), vec![2, 0, 3]);
    /// assert!(p.get_range(3, 1).is_err());
    /// ```
    pub fn get_range(&self, i: usize, j: usize) -> Result<Vec<usize>, PermutationError> {
        if j < i {
            return Err(PermutationError::InvalidRange { start: i, end: j });
        }
        self.check_index(j)?;
        Ok(self.values[i..=j].to_vec())
    }

    /// Copies the values into a new vector that shares nothing with `self`.
    pub fn to_vec(&self) -> Vec<usize> {
        self.values.clone()
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.values
    }

    pub fn is_identity(&self) -> bool {
        self.values.iter().enumerate().all(|(i, &v)| i == v)
    }

    /// Returns an iterator over all permutations of the same length, beginning with a copy
    /// of `self`. See [`PermutationIterator`].
    pub fn permutations(&self) -> PermutationIterator {
        PermutationIterator::from_start(self)
    }

    fn check_index(&self, index: usize) -> Result<(), PermutationError> {
        if index < self.values.len() {
            Ok(())
        } else {
            Err(PermutationError::IndexOutOfRange {
                index,
                len: self.values.len(),
            })
        }
    }

    // --------------------------------------------------------------------------------------------
    // Ranking
    // --------------------------------------------------------------------------------------------

    /// Ranks the permutation: maps the `n!` permutations of length `n` bijectively onto
    /// `0..n!`, inverse to [`from_rank`](Permutation::from_rank).
    ///
    /// # Panics
    ///
    /// Panics if `self.len() > MAX_RANK_LEN`; use [`to_big_integer`](Permutation::to_big_integer)
    /// for longer permutations. Also panics if a value is out of range or repeated, which
    /// only a [`truncated`](Permutation::truncated) prefix or a [`set`](Permutation::set)
    /// can cause.
    ///
    /// ```
    /// # use permkit::permutation::Permutation;
    /// let p = Permutation::try_from_vec(vec![2, 0, 1]).unwrap();
    /// assert_eq!(p.to_integer(), 2);
    /// assert_eq!(Permutation::from_rank(3, 2), p);
    /// ```
    pub fn to_integer(&self) -> usize {
        let n = self.values.len();
        assert!(
            n <= MAX_RANK_LEN,
            "Rank of a permutation of length {n} does not fit in usize (max length {MAX_RANK_LEN})"
        );
        // remaining[v]: rank of v among the values not yet placed
        let mut remaining: Vec<usize> = (0..n).collect();
        let mut placed: BitVec = BitVec::repeat(false, n);
        let mut rank = 0;
        let mut multiplier = 1;
        // the last value always contributes a zero digit; visiting it still checks it
        for (i, &v) in self.values.iter().enumerate() {
            assert!(!placed.replace(v, true), "Value {v} repeats in {self}");
            rank += multiplier * remaining[v];
            for r in &mut remaining[v + 1..] {
                *r -= 1;
            }
            multiplier *= n - i;
        }
        rank
    }

    /// Arbitrary precision version of [`to_integer`](Permutation::to_integer).
    ///
    /// # Panics
    ///
    /// Panics if a value is out of range or repeated (see [`set`](Permutation::set)).
    pub fn to_big_integer(&self) -> BigUint {
        let n = self.values.len();
        let mut remaining: Vec<usize> = (0..n).collect();
        let mut placed: BitVec = BitVec::repeat(false, n);
        let mut rank = BigUint::from(0u32);
        let mut multiplier = BigUint::from(1u32);
        for (i, &v) in self.values.iter().enumerate() {
            assert!(!placed.replace(v, true), "Value {v} repeats in {self}");
            rank += &multiplier * BigUint::from(remaining[v]);
            for r in &mut remaining[v + 1..] {
                *r -= 1;
            }
            multiplier *= BigUint::from(n - i);
        }
        rank
    }

    // --------------------------------------------------------------------------------------------
    // Inverse
    // --------------------------------------------------------------------------------------------

    /// Returns `inv` with `inv[self[i]] == i` for every position `i`.
    ///
    /// # Panics
    ///
    /// Panics if a value is out of range (see [`set`](Permutation::set)).
    pub fn get_inverse(&self) -> Vec<usize> {
        let mut inv = vec![0; self.values.len()];
        for (i, &v) in self.values.iter().enumerate() {
            inv[v] = i;
        }
        inv
    }

    pub fn inverse_permutation(&self) -> Self {
        Permutation {
            values: self.get_inverse(),
        }
    }

    /// Replaces `self` by its inverse.
    pub fn invert(&mut self) {
        self.values = self.get_inverse();
    }

    // --------------------------------------------------------------------------------------------
    // Structural Operations
    // --------------------------------------------------------------------------------------------

    /// Exchanges the values at positions `i` and `j`.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), PermutationError> {
        self.check_index(i)?;
        self.check_index(j)?;
        self.values.swap(i, j);
        Ok(())
    }

    /// Exchanges the blocks `a..=b` and `i..=j`, keeping the values between them in order.
    /// The blocks may differ in size.
    ///
    /// Fails with [`PermutationError::InvalidBlocks`] unless `a <= b < i <= j < self.len()`.
    ///
    /// ```
    /// # use permkit::permutation::Permutation;
    /// let mut p = Permutation::identity(8);
    /// p.swap_blocks(1, 2, 5, 7).unwrap();
    /// assert_eq!(p.as_slice(), &[0, 5, 6, 7, 3, 4, 1, 2]);
    /// ```
    pub fn swap_blocks(
        &mut self,
        a: usize,
        b: usize,
        i: usize,
        j: usize,
    ) -> Result<(), PermutationError> {
        let len = self.values.len();
        if !(a <= b && b < i && i <= j && j < len) {
            return Err(PermutationError::InvalidBlocks {
                first_start: a,
                first_end: b,
                second_start: i,
                second_end: j,
                len,
            });
        }
        // reversing the span, then each of its three parts, puts the blocks in swapped order
        let span = &mut self.values[a..=j];
        span.reverse();
        let (second, rest) = span.split_at_mut(j - i + 1);
        let (middle, first) = rest.split_at_mut(i - b - 1);
        second.reverse();
        middle.reverse();
        first.reverse();
        Ok(())
    }

    /// Moves the value at `indexes[k]` to `indexes[k - 1]` for each `k >= 1`, and the value
    /// at `indexes[0]` to the last listed position. Fewer than two indexes is a no-op, and
    /// two indexes is a [`swap`](Permutation::swap).
    ///
    /// Every index is checked before anything moves. The indexes are expected to be
    /// distinct; repeated ones still leave a valid permutation.
    ///
    /// ```
    /// # use permkit::permutation::Permutation;
    /// let mut p = Permutation::identity(5);
    /// p.cycle(&[4, 0, 2]).unwrap();
    /// assert_eq!(p.as_slice(), &[2, 1, 4, 3, 0]);
    /// ```
    pub fn cycle(&mut self, indexes: &[usize]) -> Result<(), PermutationError> {
        for &index in indexes {
            self.check_index(index)?;
        }
        for pair in indexes.windows(2) {
            self.values.swap(pair[0], pair[1]);
        }
        Ok(())
    }

    pub fn reverse(&mut self) {
        self.values.reverse();
    }

    /// Reverses the closed range between positions `i` and `j`, given in either order.
    ///
    /// ```
    /// # use permkit::permutation::Permutation;
    /// let mut p = Permutation::identity(6);
    /// p.reverse_range(4, 1).unwrap();
    /// assert_eq!(p.as_slice(), &[0, 4, 3, 2, 1, 5]);
    /// ```
    pub fn reverse_range(&mut self, i: usize, j: usize) -> Result<(), PermutationError> {
        self.check_index(i)?;
        self.check_index(j)?;
        let (lo, hi) = if i <= j { (i, j) } else { (j, i) };
        self.values[lo..=hi].reverse();
        Ok(())
    }

    /// Rotates left by `k` positions. Negative `k` rotates right; `k` is taken modulo the
    /// length.
    ///
    /// ```
    /// # use permkit::permutation::Permutation;
    /// let mut p = Permutation::identity(5);
    /// p.rotate(2);
    /// assert_eq!(p.as_slice(), &[2, 3, 4, 0, 1]);
    /// p.rotate(-2);
    /// assert!(p.is_identity());
    /// ```
    pub fn rotate(&mut self, k: isize) {
        let n = self.values.len();
        if n == 0 {
            return;
        }
        let shift = k.rem_euclid(n as isize) as usize;
        if shift != 0 {
            self.values.rotate_left(shift);
        }
    }

    /// Removes the value at position `i` and reinserts it at position `j`, shifting the
    /// values in between by one.
    ///
    /// ```
    /// # use permkit::permutation::Permutation;
    /// let mut p = Permutation::identity(5);
    /// p.remove_and_insert(1, 3).unwrap();
    /// assert_eq!(p.as_slice(), &[0, 2, 3, 1, 4]);
    /// ```
    pub fn remove_and_insert(&mut self, i: usize, j: usize) -> Result<(), PermutationError> {
        self.check_index(i)?;
        self.check_index(j)?;
        if i < j {
            self.values[i..=j].rotate_left(1);
        } else if i > j {
            self.values[j..=i].rotate_right(1);
        }
        Ok(())
    }

    /// Removes the block of `size` values starting at `i` and reinserts it so that it starts
    /// at position `j` of the result.
    ///
    /// A no-op when `size == 0` or `i == j`. Fails with
    /// [`PermutationError::InvalidBlock`] if either the block or its destination runs past
    /// the end.
    ///
    /// ```
    /// # use permkit::permutation::Permutation;
    /// let mut p = Permutation::identity(7);
    /// p.remove_and_insert_block(1, 2, 4).unwrap();
    /// assert_eq!(p.as_slice(), &[0, 3, 4, 5, 1, 2, 6]);
    /// ```
    pub fn remove_and_insert_block(
        &mut self,
        i: usize,
        size: usize,
        j: usize,
    ) -> Result<(), PermutationError> {
        if size == 0 || i == j {
            return Ok(());
        }
        let len = self.values.len();
        let fits = |start: usize| start.checked_add(size).is_some_and(|end| end <= len);
        if !fits(i) || !fits(j) {
            return Err(PermutationError::InvalidBlock {
                start: i,
                size,
                dest: j,
                len,
            });
        }
        if i < j {
            self.values[i..j + size].rotate_left(size);
        } else {
            self.values[j..i + size].rotate_right(size);
        }
        Ok(())
    }

    /// Replaces every value with those of `values`, which must be a permutation of the same
    /// length. On error `self` is left unchanged.
    ///
    /// ```
    /// # use permkit::permutation::Permutation;
    /// # use permkit::error::PermutationError;
    /// let mut p = Permutation::identity(3);
    /// p.set_all(&[2, 0, 1]).unwrap();
    /// assert_eq!(p.as_slice(), &[2, 0, 1]);
    /// assert_eq!(
    ///     p.set_all(&[0, 1]),
    ///     Err(PermutationError::LengthMismatch { expected: 3, found: 2 })
    /// );
    /// ```
    pub fn set_all(&mut self, values: &[usize]) -> Result<(), PermutationError> {
        if values.len() != self.values.len() {
            return Err(PermutationError::LengthMismatch {
                expected: self.values.len(),
                found: values.len(),
            });
        }
        if let Err(error) = Self::validate(values) {
            debug!(len = values.len(), %error, "rejected permutation values");
            return Err(error);
        }
        self.values.copy_from_slice(values);
        Ok(())
    }

    /// Overwrites the value at position `i` without any uniqueness check.
    ///
    /// This is the one operation that can break the permutation property; it exists for
    /// callers that rebuild a permutation value by value and restore the property
    /// themselves. Only the position is checked.
    pub fn set(&mut self, i: usize, value: usize) -> Result<(), PermutationError> {
        self.check_index(i)?;
        self.values[i] = value;
        Ok(())
    }

    // --------------------------------------------------------------------------------------------
    // Randomized Operations
    // --------------------------------------------------------------------------------------------

    /// Shuffles the values (Fisher–Yates). Every ordering of the current values is equally
    /// likely.
    pub fn scramble<R: RandomIndexer + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.values.len()).rev() {
            let j = rng.next_index(i + 1);
            if i != j {
                self.values.swap(i, j);
            }
        }
    }

    /// Shuffles the whole permutation, guaranteeing the result differs from the input when
    /// `self.len() >= 2`.
    pub fn scramble_distinct<R: RandomIndexer + ?Sized>(&mut self, rng: &mut R) {
        if self.values.len() >= 2 {
            self.scramble_segment(0, self.values.len() - 1, rng);
        }
    }

    /// Shuffles the closed range between positions `i` and `j`, given in either order.
    ///
    /// When the range holds at least two values the result always differs from the input
    /// on that range.
    ///
    /// ```
    /// # use permkit::permutation::Permutation;
    /// use rand::{rngs::SmallRng, SeedableRng};
    ///
    /// let mut rng = SmallRng::seed_from_u64(3);
    /// let mut p = Permutation::identity(8);
    /// p.scramble_range(2, 5, &mut rng).unwrap();
    /// assert_ne!(&p.as_slice()[2..=5], &[2, 3, 4, 5]);
    /// assert_eq!(&p.as_slice()[6..], &[6, 7]);
    /// ```
    pub fn scramble_range<R: RandomIndexer + ?Sized>(
        &mut self,
        i: usize,
        j: usize,
        rng: &mut R,
    ) -> Result<(), PermutationError> {
        self.check_index(i)?;
        self.check_index(j)?;
        if i != j {
            let (lo, hi) = if i < j { (i, j) } else { (j, i) };
            self.scramble_segment(lo, hi, rng);
        }
        Ok(())
    }

    /// Shuffles the values at the listed positions among themselves, leaving every other
    /// position alone. The positions need not be contiguous or sorted.
    ///
    /// Every index is checked before anything moves. When at least two distinct indexes
    /// are given, the values at those positions always end up in a different arrangement.
    ///
    /// ```
    /// # use permkit::permutation::Permutation;
    /// use rand::{rngs::SmallRng, SeedableRng};
    ///
    /// let mut rng = SmallRng::seed_from_u64(5);
    /// let mut p = Permutation::identity(6);
    /// p.scramble_indexes(&[5, 1, 3], &mut rng).unwrap();
    /// assert_eq!([p[0], p[2], p[4]], [0, 2, 4]);
    /// assert_ne!([p[5], p[1], p[3]], [5, 1, 3]);
    /// ```
    pub fn scramble_indexes<R: RandomIndexer + ?Sized>(
        &mut self,
        indexes: &[usize],
        rng: &mut R,
    ) -> Result<(), PermutationError> {
        for &index in indexes {
            self.check_index(index)?;
        }
        if indexes.len() >= 2 {
            self.scramble_positions(indexes.len(), |k| indexes[k], rng);
        }
        Ok(())
    }

    // requires lo < hi < len
    fn scramble_segment<R: RandomIndexer + ?Sized>(&mut self, lo: usize, hi: usize, rng: &mut R) {
        self.scramble_positions(hi - lo + 1, |k| lo + k, rng);
    }

    // Shuffles the values at position(0..count), requires count >= 2. A final swap of the
    // first two slots, forced when nothing else moved, rules out the original arrangement.
    fn scramble_positions<R, F>(&mut self, count: usize, position: F, rng: &mut R)
    where
        R: RandomIndexer + ?Sized,
        F: Fn(usize) -> usize,
    {
        let mut changed = false;
        for k in (2..count).rev() {
            let l = rng.next_index(k + 1);
            if l != k {
                self.values.swap(position(l), position(k));
                changed = true;
            }
        }
        if !changed || rng.next_bool() {
            self.values.swap(position(0), position(1));
        }
    }
}

/// `n!`, or `None` if it overflows.
fn factorial(n: usize) -> Option<usize> {
    (1..=n).try_fold(1usize, |acc, k| acc.checked_mul(k))
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl Index<usize> for Permutation {
    type Output = usize;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl<'a> IntoIterator for &'a Permutation {
    type Item = &'a usize;
    type IntoIter = slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl AsRef<[usize]> for Permutation {
    fn as_ref(&self) -> &[usize] {
        &self.values
    }
}

impl TryFrom<Vec<usize>> for Permutation {
    type Error = PermutationError;

    fn try_from(values: Vec<usize>) -> Result<Self, Self::Error> {
        Self::try_from_vec(values)
    }
}

impl TryFrom<&[usize]> for Permutation {
    type Error = PermutationError;

    fn try_from(values: &[usize]) -> Result<Self, Self::Error> {
        Self::try_from_vec(values.to_vec())
    }
}

impl From<Permutation> for Vec<usize> {
    fn from(p: Permutation) -> Self {
        p.values
    }
}
