//! # Permkit
//!
//! Permkit is a Rust library for permutations of the integers `0..n`: generating them,
//! mutating them, ranking and unranking them, and enumerating all of them.
//!
//! It is the core used by permutation distance metrics and fitness-landscape analyses in
//! evolutionary computation, where random permutations, small random mutations and
//! exhaustive walks over every permutation of a short length are the basic moves.
//!
//! - [`permutation::Permutation`] is the permutation type and its operators.
//! - [`permutation::PermutationIterator`] visits all `n!` permutations of a length.
//! - [`random::RandomIndexer`] is the randomness the randomized operators draw from,
//!   available for any `rand` generator.
//! - [`error::PermutationError`] is returned by every fallible operation.

pub mod error;
pub mod permutation;
pub mod random;
