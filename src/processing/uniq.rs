//! Deduplication.

use std::collections::HashSet;
use std::hash::Hash;

/// Returns the distinct elements of `elems` in first-occurrence order.
pub fn uniq<T>(elems: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(elems.len());
    let mut out = Vec::with_capacity(elems.len());
    for elem in elems {
        if seen.insert(elem) {
            out.push(elem.clone());
        }
    }
    out
}
