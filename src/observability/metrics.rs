//! Compilation counters
//!
//! - Counters only
//! - Monotonic increase
//! - Thread-safe; classes compiled on worker threads update the same registry

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Counters for a compilation run
///
/// All counters use Relaxed ordering; they are read after the batch joins.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Batches compiled
    batches: AtomicU64,
    /// Classes that passed classification and validation
    classes_compiled: AtomicU64,
    /// Classes rejected
    classes_rejected: AtomicU64,
    /// Fields classified successfully
    fields_classified: AtomicU64,
    /// Fields that failed classification
    classification_failures: AtomicU64,
    /// Constraint violations found by the validator
    validation_violations: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_batches(&self) {
        self.batches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_classes_compiled(&self) {
        self.classes_compiled.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_classes_rejected(&self) {
        self.classes_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_fields_classified(&self, count: u64) {
        self.fields_classified.fetch_add(count, Ordering::Relaxed);
    }

    pub fn add_classification_failures(&self, count: u64) {
        self.classification_failures.fetch_add(count, Ordering::Relaxed);
    }

    pub fn add_validation_violations(&self, count: u64) {
        self.validation_violations.fetch_add(count, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            batches: self.batches.load(Ordering::Relaxed),
            classes_compiled: self.classes_compiled.load(Ordering::Relaxed),
            classes_rejected: self.classes_rejected.load(Ordering::Relaxed),
            fields_classified: self.fields_classified.load(Ordering::Relaxed),
            classification_failures: self.classification_failures.load(Ordering::Relaxed),
            validation_violations: self.validation_violations.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub batches: u64,
    pub classes_compiled: u64,
    pub classes_rejected: u64,
    pub fields_classified: u64,
    pub classification_failures: u64,
    pub validation_violations: u64,
}
