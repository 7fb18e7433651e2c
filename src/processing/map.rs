//! Element mapping over slices.
//!
//! Every function here allocates a fresh `Vec` and leaves the input untouched. The fallible
//! variants stop at the first failing element and return its error as-is.

use crate::error::ElementError;

/// Returns a new `Vec` by applying `mapper` to every element, in order.
///
/// The output has the same length as `elems`.
pub fn map<T, V, F>(elems: &[T], mut mapper: F) -> Vec<V>
where
    F: FnMut(&T) -> V,
{
    let mut out = Vec::with_capacity(elems.len());
    for elem in elems {
        out.push(mapper(elem));
    }
    out
}

/// Like [`map()`], but `mapper` also receives the zero-based position of each element.
pub fn map_with_index<T, V, F>(elems: &[T], mut mapper: F) -> Vec<V>
where
    F: FnMut(usize, &T) -> V,
{
    let mut out = Vec::with_capacity(elems.len());
    for (i, elem) in elems.iter().enumerate() {
        out.push(mapper(i, elem));
    }
    out
}

/// Applies `mapper` to every element and concatenates the produced sub-sequences in order.
pub fn flat_map<T, V, I, F>(elems: &[T], mut mapper: F) -> Vec<V>
where
    F: FnMut(&T) -> I,
    I: IntoIterator<Item = V>,
{
    let mut out = Vec::new();
    for elem in elems {
        out.extend(mapper(elem));
    }
    out
}

/// Fallible [`map()`].
///
/// Elements are visited left to right. The first `Err` aborts the whole operation: no further
/// elements are visited, no partial output is returned, and the error is handed back unchanged.
pub fn map_e<T, V, E, F>(elems: &[T], mut mapper: F) -> Result<Vec<V>, E>
where
    F: FnMut(&T) -> Result<V, E>,
{
    let mut out = Vec::with_capacity(elems.len());
    for elem in elems {
        out.push(mapper(elem)?);
    }
    Ok(out)
}

/// Fallible [`map_with_index()`], with the same short-circuit contract as [`map_e()`].
pub fn map_with_index_e<T, V, E, F>(elems: &[T], mut mapper: F) -> Result<Vec<V>, E>
where
    F: FnMut(usize, &T) -> Result<V, E>,
{
    let mut out = Vec::with_capacity(elems.len());
    for (i, elem) in elems.iter().enumerate() {
        out.push(mapper(i, elem)?);
    }
    Ok(out)
}

/// Like [`map_e()`], but the returned error also records where the first failure happened.
///
/// Use [`ElementError::into_inner`] to recover the original error.
pub fn try_map_indexed<T, V, E, F>(elems: &[T], mut mapper: F) -> Result<Vec<V>, ElementError<E>>
where
    F: FnMut(&T) -> Result<V, E>,
{
    map_with_index_e(elems, |index, elem| {
        mapper(elem).map_err(|source| ElementError { index, source })
    })
}
