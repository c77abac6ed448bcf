//! Lomuto-partition quicksort.
//!
//! The pivot is always the last element of the range being sorted. Elements
//! equal to the pivot are moved to its left. The sort is in place and not
//! stable.
//!
//! Instead of recursing, ranges waiting to be sorted are kept on an explicit
//! work-stack. The smaller child of every partition is sorted first, which
//! bounds the stack to `O(log n)` ranges even for already-sorted input where
//! every partition is maximally unbalanced. Time on such input is still
//! `O(n²)`.
//!
//! The main entry points are [`quicksort`] and [`try_quicksort`].

use crate::core::{Range, Sequence};
use crate::error::SortError;
use std::cmp::Ordering;
use std::convert::Infallible;

/// Sorts a sequence in place, in ascending order.
///
/// Empty and single-element sequences are left untouched.
///
/// # Examples
///
/// ```
/// use lomsort::quicksort;
///
/// let mut data = vec![8, 7, 6, 1, 0, 9, 2];
/// quicksort(&mut data);
///
/// assert_eq!(data, vec![0, 1, 2, 6, 7, 8, 9]);
/// ```
pub fn quicksort<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    match sort_ranges(seq, &mut total_le::<S>) {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// Sorts a sequence of partially ordered elements in place.
///
/// Fails with [`SortError::IncomparableElements`] on the first pair that
/// `partial_cmp` cannot order. The sequence is then left in whatever order
/// partitioning had reached; sort a copy if that matters.
///
/// # Examples
///
/// ```
/// use lomsort::try_quicksort;
///
/// let mut data = vec![2.5, -1.0, 0.0];
/// try_quicksort(&mut data).unwrap();
/// assert_eq!(data, vec![-1.0, 0.0, 2.5]);
///
/// let mut data = vec![1.0, f64::NAN];
/// assert!(try_quicksort(&mut data).is_err());
/// ```
pub fn try_quicksort<S>(seq: &mut S) -> Result<(), SortError>
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd,
{
    sort_ranges(seq, &mut partial_le::<S>)
}

/// Partitions `seq[lo..=hi]` around the pivot `seq[hi]` and returns the
/// pivot's final index `pi`.
///
/// On return every element in `[lo, pi)` is `<=` the pivot and every element
/// in `(pi, hi]` is `>` it.
///
/// # Panics
///
/// Panics if `lo > hi` or `hi >= seq.len()`.
pub fn partition<S>(seq: &mut S, lo: usize, hi: usize) -> usize
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    check_bounds(seq, lo, hi);
    match lomuto(seq, lo, hi, &mut total_le::<S>) {
        Ok(pi) => pi,
        Err(never) => match never {},
    }
}

/// Fallible [`partition`] for partially ordered elements.
///
/// # Panics
///
/// Panics if `lo > hi` or `hi >= seq.len()`.
pub fn try_partition<S>(seq: &mut S, lo: usize, hi: usize) -> Result<usize, SortError>
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd,
{
    check_bounds(seq, lo, hi);
    lomuto(seq, lo, hi, &mut partial_le::<S>)
}

/// Returns `true` if every adjacent pair of the sequence is in non-decreasing order.
pub fn is_sorted<S>(seq: &S) -> bool
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd,
{
    (1..seq.len()).all(|k| seq.get(k - 1) <= seq.get(k))
}

fn total_le<S>(seq: &S, a: usize, b: usize) -> Result<bool, Infallible>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    Ok(seq.get(a) <= seq.get(b))
}

fn partial_le<S>(seq: &S, a: usize, b: usize) -> Result<bool, SortError>
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd,
{
    match seq.get(a).partial_cmp(seq.get(b)) {
        Some(ordering) => Ok(ordering != Ordering::Greater),
        None => Err(SortError::IncomparableElements { left: a, right: b }),
    }
}

fn check_bounds<S: Sequence + ?Sized>(seq: &S, lo: usize, hi: usize) {
    assert!(
        lo <= hi && hi < seq.len(),
        "partition range [{lo}, {hi}] out of bounds for length {}",
        seq.len()
    );
}

/// Drains the work-stack of pending ranges.
fn sort_ranges<S, E, F>(seq: &mut S, le: &mut F) -> Result<(), E>
where
    S: Sequence + ?Sized,
    F: FnMut(&S, usize, usize) -> Result<bool, E>,
{
    let Some(full) = Range::of(seq.len()) else {
        return Ok(());
    };

    // One slot per halving is enough, see module docs.
    let mut pending = Vec::with_capacity(usize::BITS as usize);
    pending.push(full);

    while let Some(range) = pending.pop() {
        if range.is_trivial() {
            continue;
        }

        let pi = lomuto(seq, range.lo, range.hi, le)?;
        let left = range.left_of(pi);
        let right = range.right_of(pi);

        // Push the larger child first so the smaller one is popped next.
        let left_len = left.map_or(0, |r| r.len());
        let right_len = right.map_or(0, |r| r.len());
        let (larger, smaller) = if left_len >= right_len {
            (left, right)
        } else {
            (right, left)
        };

        pending.extend(larger.filter(|r| !r.is_trivial()));
        pending.extend(smaller.filter(|r| !r.is_trivial()));
    }

    Ok(())
}

/// Lomuto partition step over `[lo, hi]` with pivot `seq[hi]`.
///
/// `store` is the slot the next element `<=` pivot goes to (one past the
/// boundary). The pivot is not moved until the scan is done, so it is read
/// in place instead of being cloned.
#[inline]
fn lomuto<S, E, F>(seq: &mut S, lo: usize, hi: usize, le: &mut F) -> Result<usize, E>
where
    S: Sequence + ?Sized,
    F: FnMut(&S, usize, usize) -> Result<bool, E>,
{
    let mut store = lo;

    for j in lo..hi {
        if le(seq, j, hi)? {
            if store != j {
                seq.swap(store, j);
            }
            store += 1;
        }
    }

    if store != hi {
        seq.swap(store, hi);
    }

    Ok(store)
}
