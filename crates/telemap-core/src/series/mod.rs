//! Series identity and data model.
//!
//! Two leaf pieces every labeled metric kind builds on:
//! - `key`: the canonical, order-independent label-key encoding.
//! - `record`: one stored observation (value + labels + timestamp).
//!
//! Both are pure data; locking and dirty tracking live in the store crate.

pub mod key;
pub mod record;
