use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// The transform an engine run is executing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Map,
    MapWithIndex,
    FlatMap,
    MapE,
    MapWithIndexE,
    Filter,
    Foreach,
    Uniq,
    GroupByUniq,
    GroupBy,
    Chunk,
}

impl Operation {
    /// Stable snake_case name, as used in log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Map => "map",
            Operation::MapWithIndex => "map_with_index",
            Operation::FlatMap => "flat_map",
            Operation::MapE => "map_e",
            Operation::MapWithIndexE => "map_with_index_e",
            Operation::Filter => "filter",
            Operation::Foreach => "foreach",
            Operation::Uniq => "uniq",
            Operation::GroupByUniq => "group_by_uniq",
            Operation::GroupBy => "group_by",
            Operation::Chunk => "chunk",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Events emitted by [`super::TransformEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformEvent {
    Started {
        label: Option<String>,
        op: Operation,
        input_len: usize,
    },
    Finished {
        label: Option<String>,
        op: Operation,
        /// Number of elements (or groups/chunks) in the output container.
        output_len: usize,
        elapsed: Duration,
    },
    Failed {
        label: Option<String>,
        op: Operation,
        /// Position of the first failing element.
        index: usize,
        message: String,
    },
}

/// Observer hook for transform events.
pub trait TransformObserver: Send + Sync {
    fn on_event(&self, event: &TransformEvent);
}

/// A simple stderr logger for transform events.
#[derive(Debug, Default)]
pub struct StdErrTransformObserver;

impl TransformObserver for StdErrTransformObserver {
    fn on_event(&self, event: &TransformEvent) {
        match event {
            TransformEvent::Started { label, op, input_len } => {
                eprintln!("[transform][{}] start op={op} input={input_len}", label_or_dash(label));
            }
            TransformEvent::Finished {
                label,
                op,
                output_len,
                elapsed,
            } => {
                eprintln!(
                    "[transform][{}] ok op={op} output={output_len} elapsed={elapsed:?}",
                    label_or_dash(label)
                );
            }
            TransformEvent::Failed {
                label,
                op,
                index,
                message,
            } => {
                eprintln!(
                    "[transform][{}] fail op={op} index={index} err={message}",
                    label_or_dash(label)
                );
            }
        }
    }
}

/// Forwards transform events to `tracing`.
///
/// Start/finish are `debug`, failures are `warn`.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl TransformObserver for TracingObserver {
    fn on_event(&self, event: &TransformEvent) {
        match event {
            TransformEvent::Started { label, op, input_len } => {
                tracing::debug!(label = label_or_dash(label), op = %op, input_len, "transform started");
            }
            TransformEvent::Finished {
                label,
                op,
                output_len,
                elapsed,
            } => {
                tracing::debug!(
                    label = label_or_dash(label),
                    op = %op,
                    output_len,
                    elapsed_us = elapsed.as_micros().min(u64::MAX as u128) as u64,
                    "transform finished"
                );
            }
            TransformEvent::Failed {
                label,
                op,
                index,
                message,
            } => {
                tracing::warn!(label = label_or_dash(label), op = %op, index, error = %message, "transform failed");
            }
        }
    }
}

/// An observer that fans out events to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn TransformObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn TransformObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl TransformObserver for CompositeObserver {
    fn on_event(&self, event: &TransformEvent) {
        for o in &self.observers {
            o.on_event(event);
        }
    }
}

fn label_or_dash(label: &Option<String>) -> &str {
    label.as_deref().unwrap_or("-")
}

/// Counters accumulated across engine runs.
///
/// Callers can snapshot them at any time, including from another thread.
pub struct TransformMetrics {
    runs: AtomicU64,
    failures: AtomicU64,
    elements_in: AtomicU64,
    elements_out: AtomicU64,
    last_elapsed_ns: AtomicU64,
}

impl TransformMetrics {
    pub fn new() -> Self {
        Self {
            runs: AtomicU64::new(0),
            failures: AtomicU64::new(0),
            elements_in: AtomicU64::new(0),
            elements_out: AtomicU64::new(0),
            last_elapsed_ns: AtomicU64::new(0),
        }
    }

    /// Clear all counters.
    pub fn reset(&self) {
        self.runs.store(0, Ordering::SeqCst);
        self.failures.store(0, Ordering::SeqCst);
        self.elements_in.store(0, Ordering::SeqCst);
        self.elements_out.store(0, Ordering::SeqCst);
        self.last_elapsed_ns.store(0, Ordering::SeqCst);
    }

    pub fn begin_run(&self, input_len: usize) {
        let _ = self.runs.fetch_add(1, Ordering::SeqCst);
        let _ = self.elements_in.fetch_add(input_len as u64, Ordering::SeqCst);
    }

    pub fn end_run(&self, output_len: usize, elapsed: Duration) {
        let _ = self.elements_out.fetch_add(output_len as u64, Ordering::SeqCst);
        self.store_elapsed(elapsed);
    }

    pub fn on_failure(&self, elapsed: Duration) {
        let _ = self.failures.fetch_add(1, Ordering::SeqCst);
        self.store_elapsed(elapsed);
    }

    fn store_elapsed(&self, elapsed: Duration) {
        self.last_elapsed_ns
            .store(elapsed.as_nanos().min(u64::MAX as u128) as u64, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> TransformMetricsSnapshot {
        let runs = self.runs.load(Ordering::SeqCst);
        let last_elapsed = if runs > 0 {
            Some(Duration::from_nanos(self.last_elapsed_ns.load(Ordering::SeqCst)))
        } else {
            None
        };

        TransformMetricsSnapshot {
            runs,
            failures: self.failures.load(Ordering::SeqCst),
            elements_in: self.elements_in.load(Ordering::SeqCst),
            elements_out: self.elements_out.load(Ordering::SeqCst),
            last_elapsed,
        }
    }
}

impl Default for TransformMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable snapshot of [`TransformMetrics`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformMetricsSnapshot {
    pub runs: u64,
    pub failures: u64,
    pub elements_in: u64,
    pub elements_out: u64,
    pub last_elapsed: Option<Duration>,
}

impl fmt::Display for TransformMetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "runs={}, failures={}, elements_in={}, elements_out={}, last_elapsed={:?}",
            self.runs, self.failures, self.elements_in, self.elements_out, self.last_elapsed
        )
    }
}
