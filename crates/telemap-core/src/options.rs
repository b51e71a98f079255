//! Series declaration: metric metadata and the permitted label names.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TelemapError};

/// Metric kind taxonomy. Exporters dispatch on the stable string name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Counter,
    Gauge,
    Histogram,
    Info,
}

impl MetricKind {
    /// Stable string name used in descriptors and exporter output.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Gauge => "gauge",
            MetricKind::Histogram => "histogram",
            MetricKind::Info => "info",
        }
    }
}

/// Declaration for one metric series.
///
/// Strictly parsed: unknown fields are rejected, and `validate` must pass
/// before a store is built. `label_names` order is significant: it drives
/// the canonical key encoding.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeriesOptions {
    /// Metric name, e.g. "process.runtime.info".
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub unit: Option<String>,

    /// Declared label names, in declaration order.
    #[serde(default)]
    pub label_names: Vec<String>,
}

impl SeriesOptions {
    /// Constructor for call sites that do not load declarations from config.
    pub fn new(name: impl Into<String>, label_names: &[&str]) -> SeriesOptions {
        SeriesOptions {
            name: name.into(),
            description: None,
            unit: None,
            label_names: label_names.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(TelemapError::InvalidOptions(
                "name must not be empty".into(),
            ));
        }
        if !valid_metric_name(&self.name) {
            return Err(TelemapError::InvalidOptions(format!(
                "invalid metric name: {}",
                self.name
            )));
        }
        for (i, name) in self.label_names.iter().enumerate() {
            if name.is_empty() {
                return Err(TelemapError::InvalidOptions(
                    "label names must not be empty".into(),
                ));
            }
            if self.label_names[..i].contains(name) {
                return Err(TelemapError::DuplicateLabel(name.clone()));
            }
        }
        Ok(())
    }
}

/// `[a-zA-Z_]` then `[a-zA-Z0-9_.]*`; dotted names are common in metric trees.
fn valid_metric_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

/// Serializable metric metadata handed to exporters alongside snapshots.
#[derive(Debug, Clone, Serialize)]
pub struct MetricDescriptor {
    pub kind: MetricKind,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub label_names: Vec<String>,
}
