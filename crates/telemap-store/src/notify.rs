//! Change-notification seam toward the owning registry.
//!
//! The registry association is deliberately weak: the store holds a trait
//! object, never a concrete registry type, so it stays independently
//! testable. Notifications are synchronous fire-and-forget and run only
//! after the mutation has been applied and its map guard dropped.

use telemap_core::series::key::SeriesKey;

/// Receiver for "this metric has new data" signals.
pub trait ChangeNotifier: Send + Sync {
    /// One label combination changed (`set` / `reset`).
    fn series_changed(&self, metric: &str, key: &SeriesKey);

    /// The whole store changed at once (`reset_all`).
    fn store_changed(&self, metric: &str);
}

/// Notifier for stores without a registry (tests, standalone use).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl ChangeNotifier for NoopNotifier {
    fn series_changed(&self, _metric: &str, _key: &SeriesKey) {}
    fn store_changed(&self, _metric: &str) {}
}
