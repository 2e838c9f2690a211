// crates/school-core/src/lib.rs

//! # school-core
//!
//! Fetches the school directory from the public schools endpoint, orders it
//! alphabetically or by distance from the user, and filters it by name.
//!
//! ```rust
//! use school_core::prelude::*;
//!
//! let body = br#"{"schools":[
//!     {"id":1,"name":"Beta U","county":"X"},
//!     {"id":2,"name":"alpha U","county":"Y"}
//! ]}"#;
//! let schools = parse_payload(body).unwrap();
//!
//! let mut state = SearchState::new();
//! state.apply(SearchEvent::PermissionResolved(PermissionState::Denied));
//! state.apply(SearchEvent::DirectoryLoaded(Ok(schools)));
//! state.apply(SearchEvent::QueryChanged("alp".into()));
//!
//! let names: Vec<&str> = state.visible().iter().map(|s| s.name()).collect();
//! assert_eq!(names, ["alpha U"]);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod error;
pub mod geo;
pub mod loader;
pub mod location;
pub mod model;
pub mod order;
pub mod prelude;
pub mod search;
pub mod session;
pub mod state;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::error::{DirectoryError, Result};
pub use crate::geo::{distance_km, Coordinates, EARTH_RADIUS_KM};
pub use crate::model::{School, SchoolId};
pub use crate::order::OrderPolicy;
pub use crate::state::{PermissionState, SearchEvent, SearchState, View};
