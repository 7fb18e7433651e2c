//! `seq-transforms` is a small library of eager, functional-style transforms over slices:
//! map, filter, flat-map, grouping, deduplication and chunking.
//!
//! Every transform takes `&[T]`, never mutates it, and returns a freshly allocated container.
//! There is no laziness, no parallelism and no shared state. An absent input is the empty slice,
//! so `None::<&[T]>.unwrap_or_default()` and `&[]` behave identically.
//!
//! ## Modules
//!
//! - [`processing`]: the pure transforms
//! - [`execution`]: an engine that runs the same transforms with observer hooks and metrics
//! - [`error`]: error types for position-reporting fallible transforms
//!
//! ## Quick example
//!
//! ```rust
//! use seq_transforms::processing::{chunk, group_by, map_e, uniq};
//!
//! let words = ["apple", "avocado", "banana", "apple", "cherry"];
//!
//! assert_eq!(uniq(&words), vec!["apple", "avocado", "banana", "cherry"]);
//!
//! let by_initial = group_by(&words, |w| w.chars().next());
//! assert_eq!(by_initial[&Some('a')], vec!["apple", "avocado", "apple"]);
//!
//! assert_eq!(chunk(&words, 2).len(), 3);
//!
//! // The first failing element aborts the whole map; its error is returned untouched.
//! let parsed: Result<Vec<i32>, _> = map_e(&["1", "2", "three", "4"], |s| s.parse::<i32>());
//! assert!(parsed.is_err());
//! ```
//!
//! ## Observed execution
//!
//! ```rust
//! use std::sync::Arc;
//! use seq_transforms::execution::{TracingObserver, TransformEngine, TransformOptions};
//!
//! let engine = TransformEngine::new(TransformOptions {
//!     chunk_size: 3,
//!     label: Some("demo".to_string()),
//! })
//! .with_observer(Arc::new(TracingObserver));
//!
//! let chunks = engine.chunk(&["a", "b", "c", "d", "e", "f", "g"]);
//! assert_eq!(chunks, vec![vec!["a", "b", "c"], vec!["d", "e", "f"], vec!["g"]]);
//! assert_eq!(engine.metrics().snapshot().runs, 1);
//! ```

pub mod error;
pub mod execution;
pub mod processing;

pub use error::{ElementError, ElementResult};
