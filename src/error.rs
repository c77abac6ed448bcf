//! Error type for fallible sorting.
//!
//! Only [`try_quicksort`](crate::algo::try_quicksort) and
//! [`try_partition`](crate::algo::try_partition) can fail, and only when the
//! element type's `partial_cmp` cannot order a pair (e.g. `f64::NAN`).

use thiserror::Error;

/// Error raised while sorting a sequence of partially ordered elements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// Two elements could not be ordered relative to each other.
    ///
    /// Indices refer to positions in the sequence at the moment of the
    /// comparison; the sequence may already be partially reordered.
    #[error("elements at indices {left} and {right} are not comparable")]
    IncomparableElements {
        /// Index of the scanned element.
        left: usize,
        /// Index of the pivot.
        right: usize,
    },
}
