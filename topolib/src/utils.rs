//! Various utility functions.

use bitvec::slice::BitSlice;
use std::hash::Hash;

#[cfg(not(feature = "hashbrown"))]
use std::collections::HashSet;

#[cfg(feature = "hashbrown")]
use hashbrown::HashSet;

/// Returns the first element that was already seen earlier in the slice.
pub fn first_duplicate<T: Hash + Eq + Copy>(items: &[T]) -> Option<T> {
    let mut seen: HashSet<T> = HashSet::with_capacity(items.len());
    items.iter().copied().find(|&item| !seen.insert(item))
}

/// Keeps the elements whose bit is set in `mask`, preserving their order.
///
/// Panics if `mask` is shorter than `items`.
pub fn select_masked<T: Copy>(items: &[T], mask: &BitSlice) -> Vec<T> {
    assert!(mask.len() >= items.len());
    items
        .iter()
        .zip(mask.iter().by_vals())
        .filter_map(|(&item, keep)| keep.then_some(item))
        .collect()
}
