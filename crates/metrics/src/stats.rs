//! Stats sinks
//!
//! A `StatsSink` hands out counters by name. Stages call `counter` once per
//! metric at construction and keep the returned handle, so lookups never sit
//! on the processing path.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;

use crate::Counter;

#[cfg(test)]
#[path = "stats_test.rs"]
mod tests;

/// Source of named counters
///
/// Implementations must return the same counter for repeated lookups of the
/// same name, so that every holder of a handle feeds one value.
pub trait StatsSink: Send + Sync {
    /// Get (or create) the counter registered under `name`
    fn counter(&self, name: &str) -> Arc<Counter>;
}

impl<S: StatsSink + ?Sized> StatsSink for Arc<S> {
    fn counter(&self, name: &str) -> Arc<Counter> {
        (**self).counter(name)
    }
}

/// In-memory stats sink
///
/// Keeps every counter it hands out so they can be read back or reported.
#[derive(Debug, Default)]
pub struct LocalStats {
    counters: RwLock<HashMap<String, Arc<Counter>>>,
}

impl LocalStats {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a counter, or `None` if it was never requested
    pub fn get(&self, name: &str) -> Option<u64> {
        self.counters.read().get(name).map(|c| c.get())
    }

    /// Number of registered counters
    pub fn len(&self) -> usize {
        self.counters.read().len()
    }

    /// Check if no counter has been requested yet
    pub fn is_empty(&self) -> bool {
        self.counters.read().is_empty()
    }

    /// Take a snapshot of all counters, sorted by name
    pub fn snapshot(&self) -> MetricsSnapshot {
        let counters = self
            .counters
            .read()
            .iter()
            .map(|(name, counter)| (name.clone(), counter.get()))
            .collect();
        MetricsSnapshot { counters }
    }
}

impl StatsSink for LocalStats {
    fn counter(&self, name: &str) -> Arc<Counter> {
        if let Some(counter) = self.counters.read().get(name) {
            return Arc::clone(counter);
        }

        let mut counters = self.counters.write();
        Arc::clone(
            counters
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(Counter::new())),
        )
    }
}

/// Point-in-time copy of counter values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MetricsSnapshot {
    pub counters: BTreeMap<String, u64>,
}

impl MetricsSnapshot {
    /// Value of a counter in this snapshot
    pub fn get(&self, name: &str) -> Option<u64> {
        self.counters.get(name).copied()
    }
}

/// Sink wrapper that prefixes every counter name
///
/// `Namespaced::new(sink, "processor.encode").counter("sent")` resolves
/// `processor.encode.sent` on the inner sink.
#[derive(Debug, Clone)]
pub struct Namespaced<S> {
    inner: S,
    prefix: String,
}

impl<S: StatsSink> Namespaced<S> {
    /// Wrap `inner`, prefixing names with `prefix` and a dot
    pub fn new(inner: S, prefix: impl Into<String>) -> Self {
        Self {
            inner,
            prefix: prefix.into(),
        }
    }

    /// The prefix applied to counter names
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl<S: StatsSink> StatsSink for Namespaced<S> {
    fn counter(&self, name: &str) -> Arc<Counter> {
        if self.prefix.is_empty() {
            return self.inner.counter(name);
        }
        self.inner.counter(&format!("{}.{}", self.prefix, name))
    }
}

/// Sink whose counters are never read
///
/// Every lookup returns a fresh, unshared counter.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStats;

impl StatsSink for NullStats {
    fn counter(&self, _name: &str) -> Arc<Counter> {
        Arc::new(Counter::new())
    }
}
