//! Errors shared by the bag and the standalone pick helpers.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Selection failures.
///
/// A miss (a draw landing above the total weight) is not an error: it is
/// reported as `Ok(None)` by the bag.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The draw range `[0, ceiling)` is empty.
    #[error("invalid ceiling {0}")]
    InvalidCeiling(u64),
    /// A helper was handed no candidates.
    #[error("no value to select")]
    EmptyInput,
    /// Weight is negative or not finite.
    #[error("invalid weight {weight} at index {index}")]
    InvalidWeight {
        /// The rejected weight.
        weight: f64,
        /// Position of the value carrying it.
        index: usize,
    },
    /// Every candidate has weight zero.
    #[error("total weight is zero")]
    ZeroTotalWeight,
    /// Weights do not sum within the numeric range.
    #[error("total weight overflowed")]
    WeightOverflow,
}
