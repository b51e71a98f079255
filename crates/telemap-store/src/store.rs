//! Concurrent label-keyed value store.
//!
//! One store per metric name. The value map only grows: `reset_all` clears
//! values in place, so a label combination observed once stays visible in
//! every later snapshot. Snapshots are detached copies in insertion order.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde_json::Value;

use telemap_core::options::SeriesOptions;
use telemap_core::series::key::SeriesKey;
use telemap_core::series::record::{now_millis, ValueRecord};
use telemap_core::Result;

use crate::notify::ChangeNotifier;

/// Stored record plus its insertion sequence.
///
/// The sequence gives snapshots a stable insertion order even though the
/// underlying map is unordered.
struct StoredRecord {
    created_seq: u64,
    record: ValueRecord,
}

/// Label-keyed value store for one metric name.
///
/// Shared mutable state is the sharded `values` map; `set`/`reset` touch one
/// shard briefly, `reset_all` walks shards one at a time, and `snapshot`
/// clones records out under shard read locks. The dirty flag is an atomic so
/// the exporter polls it without taking any map lock.
pub struct SeriesStore {
    name: String,
    label_names: Vec<String>,
    values: DashMap<SeriesKey, StoredRecord>,
    insert_seq: AtomicU64,
    dirty: AtomicBool,
    notifier: Arc<dyn ChangeNotifier>,
}

impl SeriesStore {
    /// Build a store from options. Fails fast on contract violations
    /// (empty/malformed name, empty or duplicate label names).
    pub fn new(opts: &SeriesOptions, notifier: Arc<dyn ChangeNotifier>) -> Result<SeriesStore> {
        opts.validate()?;
        tracing::debug!(metric = %opts.name, labels = opts.label_names.len(), "series store created");
        Ok(SeriesStore {
            name: opts.name.clone(),
            label_names: opts.label_names.clone(),
            values: DashMap::new(),
            insert_seq: AtomicU64::new(1),
            dirty: AtomicBool::new(false),
            notifier,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared label names, in declaration order.
    pub fn label_names(&self) -> &[String] {
        &self.label_names
    }

    /// Store or update the record for one label combination.
    ///
    /// An existing entry is updated in place (it keeps its identity and
    /// insertion order); a new label combination gets a fresh record holding
    /// only the declared labels present in the input. Returns a detached
    /// copy of the record now stored.
    pub fn set(
        &self,
        value: Option<Value>,
        labels: &[(&str, &str)],
        timestamp: Option<u64>,
    ) -> ValueRecord {
        let key = SeriesKey::resolve(&self.label_names, labels);
        let ts = timestamp.unwrap_or_else(now_millis);

        let stored = match self.values.entry(key.clone()) {
            Entry::Occupied(mut e) => {
                let rec = &mut e.get_mut().record;
                rec.value = value;
                rec.timestamp = ts;
                tracing::trace!(metric = %self.name, key = %key, "series updated");
                rec.clone()
            }
            Entry::Vacant(e) => {
                let rec = ValueRecord {
                    value,
                    labels: self.pick_declared(labels),
                    timestamp: ts,
                };
                let seq = self.insert_seq.fetch_add(1, Ordering::Relaxed);
                e.insert(StoredRecord {
                    created_seq: seq,
                    record: rec.clone(),
                });
                tracing::debug!(metric = %self.name, key = %key, "new series");
                rec
            }
        };

        // Entry guard dropped above; never notify under a shard lock.
        self.mark_dirty();
        self.notifier.series_changed(&self.name, &key);
        stored
    }

    /// Clear the value for one label combination without removing it.
    pub fn reset(&self, labels: &[(&str, &str)], timestamp: Option<u64>) -> ValueRecord {
        self.set(None, labels, timestamp)
    }

    /// Clear every stored record in place.
    ///
    /// Mutates the records themselves, not just the keys: every entry keeps
    /// its identity and insertion order, with `value = None` and the given
    /// (or current) timestamp.
    pub fn reset_all(&self, timestamp: Option<u64>) {
        let ts = timestamp.unwrap_or_else(now_millis);
        for mut entry in self.values.iter_mut() {
            entry.record.value = None;
            entry.record.timestamp = ts;
        }
        tracing::debug!(metric = %self.name, "series store reset");
        self.mark_dirty();
        self.notifier.store_changed(&self.name);
    }

    /// Detached point-in-time copies of every stored record, in insertion
    /// order.
    ///
    /// Each element is a deep copy; later mutations never show through a
    /// snapshot already taken. Consistency is per record, not store-wide.
    pub fn snapshot(&self) -> Vec<ValueRecord> {
        let mut entries: Vec<(u64, ValueRecord)> = self
            .values
            .iter()
            .map(|e| (e.created_seq, e.record.clone()))
            .collect();
        entries.sort_unstable_by_key(|(seq, _)| *seq);
        entries.into_iter().map(|(_, rec)| rec).collect()
    }

    /// Number of label combinations observed so far.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True iff a record was added or mutated since the last `clear_dirty`.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    /// Exporter-side acknowledgment after a scrape/push cycle.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::Release);
    }

    fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    /// Intersect the input with the declared label names.
    ///
    /// Undeclared input pairs are dropped; a repeated declared name keeps
    /// its last occurrence, matching key resolution.
    fn pick_declared(&self, labels: &[(&str, &str)]) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();
        for name in &self.label_names {
            if let Some((_, v)) = labels.iter().rev().find(|(k, _)| *k == name.as_str()) {
                out.insert(name.clone(), (*v).to_string());
            }
        }
        out
    }
}
