//! Key-based grouping.
//!
//! Both functions return a `HashMap`, so key order is unspecified.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

/// Maps each key produced by `key_fn` to the first element that produced it.
///
/// Later elements with an already-seen key are discarded.
pub fn group_by_uniq<T, K, F>(elems: &[T], mut key_fn: F) -> HashMap<K, T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut out = HashMap::new();
    for elem in elems {
        if let Entry::Vacant(slot) = out.entry(key_fn(elem)) {
            slot.insert(elem.clone());
        }
    }
    out
}

/// Maps each key produced by `key_fn` to every element that produced it, in input order.
pub fn group_by<T, K, F>(elems: &[T], mut key_fn: F) -> HashMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut out: HashMap<K, Vec<T>> = HashMap::new();
    for elem in elems {
        out.entry(key_fn(elem)).or_default().push(elem.clone());
    }
    out
}
