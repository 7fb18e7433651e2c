use thiserror::Error;

/// Convenience result type for position-reporting fallible transforms.
pub type ElementResult<T, E> = Result<T, ElementError<E>>;

/// A caller-supplied transform failed on one element.
///
/// Returned by [`crate::processing::try_map_indexed`]. The plain fallible transforms
/// ([`crate::processing::map_e`], [`crate::processing::map_with_index_e`]) return the caller's
/// error directly instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transform failed at element {index}: {source}")]
pub struct ElementError<E> {
    /// Zero-based position of the first failing element.
    pub index: usize,
    /// The error produced by the caller's function, unmodified.
    #[source]
    pub source: E,
}

impl<E> ElementError<E> {
    /// Discard the position and return the caller's error.
    pub fn into_inner(self) -> E {
        self.source
    }
}
