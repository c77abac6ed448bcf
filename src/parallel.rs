//! Parallel quicksort using rayon.
//!
//! After a partition the two children cover disjoint index ranges, so they
//! are split with `split_at_mut` and handed to [`rayon::join`]. Small slices,
//! and slices reached after too many unbalanced splits, fall back to the
//! sequential [`quicksort`]. The result is the same as sorting sequentially.

use crate::algo::{partition, quicksort};

/// Slices at or below this length are sorted on the current thread.
pub const SEQUENTIAL_THRESHOLD: usize = 4096;

/// Sorts a slice in place, sorting the two sides of each partition concurrently.
///
/// # Examples
///
/// ```
/// use lomsort::par_quicksort;
///
/// let mut data: Vec<u32> = (0..10_000).rev().collect();
/// par_quicksort(&mut data);
///
/// assert!(lomsort::is_sorted(&data));
/// ```
pub fn par_quicksort<T: Ord + Send>(v: &mut [T]) {
    // Bounds the join depth: already-sorted input splits off one element at a time.
    let budget = 2 * (usize::BITS - v.len().leading_zeros());
    par_recurse(v, budget);
}

fn par_recurse<T: Ord + Send>(v: &mut [T], budget: u32) {
    if v.len() <= SEQUENTIAL_THRESHOLD || budget == 0 {
        quicksort(v);
        return;
    }

    let hi = v.len() - 1;
    let pi = partition(v, 0, hi);
    let (left, right) = v.split_at_mut(pi);

    rayon::join(
        || par_recurse(left, budget - 1),
        || par_recurse(&mut right[1..], budget - 1),
    );
}
