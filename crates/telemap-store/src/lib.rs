//! Telemap store: the concurrent label-keyed value store and the metric
//! kinds built on it.
//!
//! This crate owns the mutable half of the system: a sharded concurrent map
//! from canonical label-key to value record, dirty tracking for exporters,
//! and the change-notification seam toward the owning registry. Identity and
//! data-model types live in `telemap-core`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod info;
pub mod notify;
pub mod store;

/// Shared result type (re-exported from core).
pub use telemap_core::{Result, TelemapError};
