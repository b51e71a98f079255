//! Arbitrary-value "info" series.
//!
//! The simplest metric kind: no aggregation, just the shared store mechanism
//! with an opaque JSON payload per label combination. The aggregating kinds
//! layer their math on the same mechanism; this one shows it bare.

use std::sync::Arc;

use serde_json::Value;

use telemap_core::options::{MetricDescriptor, MetricKind, SeriesOptions};
use telemap_core::series::record::ValueRecord;
use telemap_core::Result;

use crate::notify::ChangeNotifier;
use crate::store::SeriesStore;

/// Info metric: one arbitrary value per label combination.
pub struct InfoMetric {
    store: SeriesStore,
    description: Option<String>,
    unit: Option<String>,
}

impl InfoMetric {
    /// Validate options and build the metric.
    pub fn new(opts: SeriesOptions, notifier: Arc<dyn ChangeNotifier>) -> Result<InfoMetric> {
        let store = SeriesStore::new(&opts, notifier)?;
        Ok(InfoMetric {
            store,
            description: opts.description,
            unit: opts.unit,
        })
    }

    pub fn kind(&self) -> MetricKind {
        MetricKind::Info
    }

    pub fn name(&self) -> &str {
        self.store.name()
    }

    /// Serializable metadata for exporters.
    pub fn descriptor(&self) -> MetricDescriptor {
        MetricDescriptor {
            kind: self.kind(),
            name: self.store.name().to_string(),
            description: self.description.clone(),
            unit: self.unit.clone(),
            label_names: self.store.label_names().to_vec(),
        }
    }

    /// See [`SeriesStore::set`].
    pub fn set(
        &self,
        value: Option<Value>,
        labels: &[(&str, &str)],
        timestamp: Option<u64>,
    ) -> ValueRecord {
        self.store.set(value, labels, timestamp)
    }

    /// See [`SeriesStore::reset`].
    pub fn reset(&self, labels: &[(&str, &str)], timestamp: Option<u64>) -> ValueRecord {
        self.store.reset(labels, timestamp)
    }

    /// See [`SeriesStore::reset_all`].
    pub fn reset_all(&self, timestamp: Option<u64>) {
        self.store.reset_all(timestamp)
    }

    /// See [`SeriesStore::snapshot`].
    pub fn snapshot(&self) -> Vec<ValueRecord> {
        self.store.snapshot()
    }

    pub fn is_dirty(&self) -> bool {
        self.store.is_dirty()
    }

    pub fn clear_dirty(&self) {
        self.store.clear_dirty()
    }
}
