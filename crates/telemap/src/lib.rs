//! Top-level facade crate for Telemap.
//!
//! Re-exports the core data model and the store so users can depend on a
//! single crate.

pub mod core {
    pub use telemap_core::*;
}

pub mod store {
    pub use telemap_store::*;
}
