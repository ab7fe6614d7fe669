//! Metrics hooks for report aggregation
//!
//! Counters are cumulative over the lifetime of an `Aggregator`.
//!
//! ## Usage
//!
//! ```ignore
//! use sv_02_validation_report::{Aggregator, ReportConfig};
//!
//! let aggregator = Aggregator::new(ReportConfig::default())?;
//! let result = aggregator.aggregate(chain.layers())?;
//! let snapshot = aggregator.metrics().snapshot();
//! println!("{} signatures seen", snapshot.signatures_seen);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics collector for aggregation runs
///
/// Thread-safe counters shared by every run of one aggregator.
#[derive(Debug, Default)]
pub struct AggregationMetrics {
    /// Completed aggregations
    pub aggregations_completed: AtomicU64,
    /// Aggregations aborted by a malformed layer
    pub aggregations_failed: AtomicU64,
    /// Report layers walked
    pub layers_processed: AtomicU64,
    /// Signature entries seen across all layers
    pub signatures_seen: AtomicU64,
    /// Errors collected
    pub errors_collected: AtomicU64,
    /// Warnings collected
    pub warnings_collected: AtomicU64,
    /// Indication records replaced by a later layer
    pub indications_overwritten: AtomicU64,
}

impl AggregationMetrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit the counts of a successful run.
    pub(crate) fn record_completed(&self, run: &RunCounts) {
        self.aggregations_completed.fetch_add(1, Ordering::Relaxed);
        self.layers_processed.fetch_add(run.layers, Ordering::Relaxed);
        self.signatures_seen.fetch_add(run.signatures, Ordering::Relaxed);
        self.errors_collected.fetch_add(run.errors, Ordering::Relaxed);
        self.warnings_collected.fetch_add(run.warnings, Ordering::Relaxed);
        self.indications_overwritten
            .fetch_add(run.overwrites, Ordering::Relaxed);
    }

    pub(crate) fn record_failed(&self) {
        self.aggregations_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Get a point-in-time copy of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            aggregations_completed: self.aggregations_completed.load(Ordering::Relaxed),
            aggregations_failed: self.aggregations_failed.load(Ordering::Relaxed),
            layers_processed: self.layers_processed.load(Ordering::Relaxed),
            signatures_seen: self.signatures_seen.load(Ordering::Relaxed),
            errors_collected: self.errors_collected.load(Ordering::Relaxed),
            warnings_collected: self.warnings_collected.load(Ordering::Relaxed),
            indications_overwritten: self.indications_overwritten.load(Ordering::Relaxed),
        }
    }
}

/// Counts of a single aggregation run.
///
/// Kept local to the run and committed only when it produces a result, so
/// a rejected chain leaves the cumulative counters untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct RunCounts {
    pub layers: u64,
    pub signatures: u64,
    pub errors: u64,
    pub warnings: u64,
    pub overwrites: u64,
}

impl RunCounts {
    pub(crate) fn layer(&mut self, signatures: usize) {
        self.layers += 1;
        self.signatures += signatures as u64;
    }

    pub(crate) fn issues(&mut self, errors: usize, warnings: usize) {
        self.errors += errors as u64;
        self.warnings += warnings as u64;
    }
}

/// Point-in-time copy of `AggregationMetrics`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub aggregations_completed: u64,
    pub aggregations_failed: u64,
    pub layers_processed: u64,
    pub signatures_seen: u64,
    pub errors_collected: u64,
    pub warnings_collected: u64,
    pub indications_overwritten: u64,
}
