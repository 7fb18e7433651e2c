//! Element filtering and side-effect iteration.

/// Returns a new `Vec` containing only elements for which `predicate` returns `true`.
///
/// Relative order is preserved.
pub fn filter<T, F>(elems: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    elems.iter().filter(|elem| predicate(*elem)).cloned().collect()
}

/// Calls `f` once per element, in order.
pub fn foreach<T, F>(elems: &[T], f: F)
where
    F: FnMut(&T),
{
    elems.iter().for_each(f);
}
