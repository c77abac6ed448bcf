//! # Lomsort
//!
//! `lomsort` is a small in-place quicksort built on the **Lomuto** partition scheme.
//!
//! Each range is partitioned around its last element: a single forward scan moves every
//! element `<=` the pivot to the left, then the pivot is swapped into its final slot. The
//! two sides are then sorted independently.
//!
//! ## Key Features
//!
//! - **In-Place**: Elements are only ever exchanged, never copied into a second buffer.
//! - **Any Container**: The [`Sequence`] trait abstracts indexed reads and a two-position
//!   swap, so `Vec`, slices, `VecDeque` and custom containers sort the same way.
//! - **Bounded Stack**: Pending ranges live on an explicit work-stack and the smaller side
//!   is always sorted first, so already-sorted input cannot overflow the call stack.
//! - **Fallible Variant**: [`try_quicksort`] accepts `PartialOrd` elements such as `f64`
//!   and reports a [`SortError`] instead of producing garbage when it meets `NaN`.
//! - **Parallel Variant**: With the `parallel` feature, [`par_quicksort`] sorts both sides
//!   of large partitions concurrently using rayon.
//!
//! ## Usage
//!
//! ```rust
//! use lomsort::quicksort;
//!
//! let mut data = vec![8, 7, 6, 1, 0, 9, 2];
//! quicksort(&mut data);
//!
//! assert_eq!(data, vec![0, 1, 2, 6, 7, 8, 9]);
//! ```
//!
//! ### Floating Point
//!
//! ```rust
//! use lomsort::{try_quicksort, SortError};
//!
//! let mut data = vec![0.5, -2.0, 1.25];
//! try_quicksort(&mut data)?;
//! assert_eq!(data, vec![-2.0, 0.5, 1.25]);
//! # Ok::<(), SortError>(())
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Average Case**: O(N log N) comparisons.
//! - **Worst Case**: O(N²) on already-sorted, reverse-sorted or all-equal input. The pivot is
//!   always the last element; there is no randomization or median-of-three.
//! - **Memory Overhead**: O(log N) ranges on the work-stack.
//! - **Stability**: Not stable. Equal elements may change their relative order.

pub mod algo;
pub mod core;
pub mod error;
#[cfg(feature = "parallel")]
pub mod parallel;

pub use crate::algo::{is_sorted, partition, quicksort, try_partition, try_quicksort};
pub use crate::core::Sequence;
pub use crate::error::SortError;
#[cfg(feature = "parallel")]
pub use crate::parallel::par_quicksort;

pub mod prelude {
    pub use crate::algo::{is_sorted, quicksort, try_quicksort};
    pub use crate::core::Sequence;
    pub use crate::error::SortError;
    #[cfg(feature = "parallel")]
    pub use crate::parallel::par_quicksort;
}
