//! Telemap core: label identity, value records, and series declarations.
//!
//! This crate defines the canonical label-key encoding and the data model
//! shared by every labeled metric kind. It intentionally carries no
//! concurrency or runtime dependencies so the identity layer can be reused
//! and tested in isolation.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! The only fallible paths are construction-time contract checks, surfaced
//! as `TelemapError`/`Result`; no mutation or lookup path can fail.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod options;
pub mod series;

/// Shared result type.
pub use error::{Result, TelemapError};
