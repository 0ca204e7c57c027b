//! Sluice - Metrics
//!
//! Named counters that stages receive at construction.
//!
//! # Overview
//!
//! This crate provides:
//! - `Counter`, an atomic counter handle shared between a stage and its reader
//! - `StatsSink`, the trait stages use to look up counters by name
//! - `LocalStats`, an in-memory sink that can be snapshotted for reporting
//! - `Namespaced`, a wrapper giving each stage instance its own name prefix
//!
//! # Design Principles
//!
//! - **Lock-free updates**: counters use relaxed atomics; the only lock guards
//!   the name → counter map and is taken at lookup time, not per increment
//! - **Injected, never global**: a stage resolves its counters once from the
//!   sink it is constructed with and holds the `Arc<Counter>` handles
//!
//! # Example
//!
//! ```
//! use sluice_metrics::{LocalStats, Namespaced, StatsSink};
//! use std::sync::Arc;
//!
//! let stats = Arc::new(LocalStats::new());
//! let scoped = Namespaced::new(stats.clone(), "processor.encode");
//!
//! scoped.counter("count").inc();
//! assert_eq!(stats.get("processor.encode.count"), Some(1));
//! ```

mod stats;

pub use stats::{LocalStats, MetricsSnapshot, Namespaced, NullStats, StatsSink};

use std::sync::atomic::{AtomicU64, Ordering};

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;

/// Atomic counter wrapper for convenient metric operations
#[derive(Debug, Default)]
pub struct Counter(AtomicU64);

impl Counter {
    /// Create a new counter initialized to 0
    #[inline]
    pub const fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    /// Increment the counter by `val` (relaxed ordering for performance)
    #[inline]
    pub fn incr(&self, val: u64) {
        self.0.fetch_add(val, Ordering::Relaxed);
    }

    /// Increment the counter by 1
    #[inline]
    pub fn inc(&self) {
        self.incr(1);
    }

    /// Get the current value (relaxed ordering)
    #[inline]
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    /// Reset the counter to 0 and return the previous value
    #[inline]
    pub fn take(&self) -> u64 {
        self.0.swap(0, Ordering::Relaxed)
    }
}
