//! school-search-rs: umbrella crate re-exporting [`school_core`].
//!
//! Exists so the demos under `demos/` can `use school_search_rs::prelude::*`
//! or depend on `school_core` directly.

pub use school_core::*;
