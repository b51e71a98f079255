//! Stored observation for one label combination.

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One observation: value, the declared labels seen, and a timestamp.
///
/// `value: None` is the reset/unknown state, serialized as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueRecord {
    /// Opaque payload; semantics depend on the metric kind.
    pub value: Option<Value>,
    /// Declared label names present in the input, with their values.
    /// Never contains undeclared names.
    pub labels: BTreeMap<String, String>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

/// Current wall-clock time in milliseconds since the Unix epoch.
///
/// A clock before the epoch reads as 0; timestamps are bookkeeping here,
/// never control flow.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
