use thiserror::Error;

/// Errors raised when constructing or mutating a [`Permutation`](crate::permutation::Permutation),
/// or when advancing an exhausted [`PermutationIterator`](crate::permutation::PermutationIterator).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermutationError {
    #[error("Duplicate value {value} in permutation")]
    DuplicateValue { value: usize },

    #[error("Value {value} out of range for permutation of length {len}")]
    ValueOutOfRange { value: usize, len: usize },

    #[error("Block of size {size} at {start} cannot be moved to {dest} in permutation of length {len}")]
    InvalidBlock {
        start: usize,
        size: usize,
        dest: usize,
        len: usize,
    },

    #[error("Blocks {first_start}..={first_end} and {second_start}..={second_end} cannot be swapped in permutation of length {len}")]
    InvalidBlocks {
        first_start: usize,
        first_end: usize,
        second_start: usize,
        second_end: usize,
        len: usize,
    },

    #[error("Expected {expected} values, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("Range end {end} precedes start {start}")]
    InvalidRange { start: usize, end: usize },

    #[error("Index {index} out of range for permutation of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("No more permutations")]
    NoSuchElement,
}

impl PermutationError {
    /// True for the malformed-argument kinds: a rejected explicit vector, a block move or
    /// swap that does not fit, or a reversed range.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            PermutationError::DuplicateValue { .. }
                | PermutationError::ValueOutOfRange { .. }
                | PermutationError::InvalidBlock { .. }
                | PermutationError::InvalidBlocks { .. }
                | PermutationError::LengthMismatch { .. }
                | PermutationError::InvalidRange { .. }
        )
    }
}
