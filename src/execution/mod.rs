//! Observed execution of sequence transforms.
//!
//! This module sits "above" [`crate::processing`] and provides:
//!
//! - One method per transform, with identical results to the pure functions
//! - Real-time metrics + observer hooks for monitoring
//! - A serde-loadable [`TransformOptions`] for engine defaults
//!
//! Execution is still sequential and on the caller's thread.

mod observer;

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::ElementError;
use crate::processing;

pub use observer::{
    CompositeObserver, Operation, StdErrTransformObserver, TracingObserver, TransformEvent,
    TransformMetrics, TransformMetricsSnapshot, TransformObserver,
};

/// Configuration for the [`TransformEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformOptions {
    /// Chunk size used by [`TransformEngine::chunk`].
    ///
    /// Non-positive values mean "one chunk holding everything", as for [`processing::chunk`].
    pub chunk_size: isize,
    /// Name attached to every emitted event.
    pub label: Option<String>,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            chunk_size: 100,
            label: None,
        }
    }
}

/// Runs transforms while reporting events and metrics.
pub struct TransformEngine {
    opts: TransformOptions,
    observer: Option<Arc<dyn TransformObserver>>,
    metrics: Arc<TransformMetrics>,
}

impl fmt::Debug for TransformEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformEngine")
            .field("opts", &self.opts)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

impl Default for TransformEngine {
    fn default() -> Self {
        Self::new(TransformOptions::default())
    }
}

impl TransformEngine {
    /// Create a new engine with the given options.
    pub fn new(opts: TransformOptions) -> Self {
        Self {
            opts,
            observer: None,
            metrics: Arc::new(TransformMetrics::new()),
        }
    }

    /// Attach an observer for transform events (metrics/logging).
    pub fn with_observer(mut self, observer: Arc<dyn TransformObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Get a handle to real-time metrics.
    pub fn metrics(&self) -> Arc<TransformMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn options(&self) -> &TransformOptions {
        &self.opts
    }

    /// Observed [`processing::map`].
    pub fn map<T, V, F>(&self, elems: &[T], mapper: F) -> Vec<V>
    where
        F: FnMut(&T) -> V,
    {
        self.run(Operation::Map, elems.len(), || processing::map(elems, mapper), Vec::len)
    }

    /// Observed [`processing::map_with_index`].
    pub fn map_with_index<T, V, F>(&self, elems: &[T], mapper: F) -> Vec<V>
    where
        F: FnMut(usize, &T) -> V,
    {
        self.run(
            Operation::MapWithIndex,
            elems.len(),
            || processing::map_with_index(elems, mapper),
            Vec::len,
        )
    }

    /// Observed [`processing::flat_map`].
    pub fn flat_map<T, V, I, F>(&self, elems: &[T], mapper: F) -> Vec<V>
    where
        F: FnMut(&T) -> I,
        I: IntoIterator<Item = V>,
    {
        self.run(
            Operation::FlatMap,
            elems.len(),
            || processing::flat_map(elems, mapper),
            Vec::len,
        )
    }

    /// Observed [`processing::map_e`].
    ///
    /// On failure a [`TransformEvent::Failed`] is emitted and the caller's error is returned
    /// unchanged.
    pub fn map_e<T, V, E, F>(&self, elems: &[T], mapper: F) -> Result<Vec<V>, E>
    where
        E: fmt::Display,
        F: FnMut(&T) -> Result<V, E>,
    {
        self.run_fallible(Operation::MapE, elems.len(), || {
            processing::try_map_indexed(elems, mapper)
        })
    }

    /// Observed [`processing::map_with_index_e`].
    pub fn map_with_index_e<T, V, E, F>(&self, elems: &[T], mut mapper: F) -> Result<Vec<V>, E>
    where
        E: fmt::Display,
        F: FnMut(usize, &T) -> Result<V, E>,
    {
        self.run_fallible(Operation::MapWithIndexE, elems.len(), || {
            processing::map_with_index_e(elems, |index, elem| {
                mapper(index, elem).map_err(|source| ElementError { index, source })
            })
        })
    }

    /// Observed [`processing::filter`].
    pub fn filter<T, F>(&self, elems: &[T], predicate: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.run(
            Operation::Filter,
            elems.len(),
            || processing::filter(elems, predicate),
            Vec::len,
        )
    }

    /// Observed [`processing::foreach`]. The reported output length is the number of calls.
    pub fn foreach<T, F>(&self, elems: &[T], f: F)
    where
        F: FnMut(&T),
    {
        self.run(
            Operation::Foreach,
            elems.len(),
            || processing::foreach(elems, f),
            |_| elems.len(),
        )
    }

    /// Observed [`processing::uniq`].
    pub fn uniq<T>(&self, elems: &[T]) -> Vec<T>
    where
        T: Eq + Hash + Clone,
    {
        self.run(Operation::Uniq, elems.len(), || processing::uniq(elems), Vec::len)
    }

    /// Observed [`processing::group_by_uniq`]. The reported output length is the key count.
    pub fn group_by_uniq<T, K, F>(&self, elems: &[T], key_fn: F) -> HashMap<K, T>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        self.run(
            Operation::GroupByUniq,
            elems.len(),
            || processing::group_by_uniq(elems, key_fn),
            HashMap::len,
        )
    }

    /// Observed [`processing::group_by`]. The reported output length is the key count.
    pub fn group_by<T, K, F>(&self, elems: &[T], key_fn: F) -> HashMap<K, Vec<T>>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        self.run(
            Operation::GroupBy,
            elems.len(),
            || processing::group_by(elems, key_fn),
            HashMap::len,
        )
    }

    /// Observed [`processing::chunk`] using [`TransformOptions::chunk_size`].
    pub fn chunk<T: Clone>(&self, elems: &[T]) -> Vec<Vec<T>> {
        self.chunk_by(elems, self.opts.chunk_size)
    }

    /// Observed [`processing::chunk`] with an explicit size.
    pub fn chunk_by<T: Clone>(&self, elems: &[T], size: isize) -> Vec<Vec<T>> {
        self.run(
            Operation::Chunk,
            elems.len(),
            || processing::chunk(elems, size),
            Vec::len,
        )
    }

    fn run<R>(
        &self,
        op: Operation,
        input_len: usize,
        body: impl FnOnce() -> R,
        output_len: impl FnOnce(&R) -> usize,
    ) -> R {
        let start = self.begin(op, input_len);
        let out = body();
        self.finish(op, output_len(&out), start);
        out
    }

    fn run_fallible<V, E>(
        &self,
        op: Operation,
        input_len: usize,
        body: impl FnOnce() -> Result<Vec<V>, ElementError<E>>,
    ) -> Result<Vec<V>, E>
    where
        E: fmt::Display,
    {
        let start = self.begin(op, input_len);
        match body() {
            Ok(out) => {
                self.finish(op, out.len(), start);
                Ok(out)
            }
            Err(err) => {
                self.metrics.on_failure(start.elapsed());
                self.emit(TransformEvent::Failed {
                    label: self.opts.label.clone(),
                    op,
                    index: err.index,
                    message: err.source.to_string(),
                });
                Err(err.into_inner())
            }
        }
    }

    fn begin(&self, op: Operation, input_len: usize) -> Instant {
        self.metrics.begin_run(input_len);
        self.emit(TransformEvent::Started {
            label: self.opts.label.clone(),
            op,
            input_len,
        });
        Instant::now()
    }

    fn finish(&self, op: Operation, output_len: usize, start: Instant) {
        let elapsed = start.elapsed();
        self.metrics.end_run(output_len, elapsed);
        self.emit(TransformEvent::Finished {
            label: self.opts.label.clone(),
            op,
            output_len,
            elapsed,
        });
    }

    fn emit(&self, event: TransformEvent) {
        if let Some(obs) = &self.observer {
            obs.on_event(&event);
        }
    }
}
