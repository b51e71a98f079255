//! Shared error type across Telemap crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, TelemapError>;

/// Unified error type used by core and store.
///
/// Every variant is a construction-time contract violation. Once a store is
/// built, no mutation or snapshot operation fails: invalid label input is
/// filtered, not rejected, and absent values are stored as-is.
#[derive(Debug, Error)]
pub enum TelemapError {
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("duplicate label name: {0}")]
    DuplicateLabel(String),
}
