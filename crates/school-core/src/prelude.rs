//! school-core prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::card::{render_page, SchoolCard};
pub use crate::error::{DirectoryError, Result};
pub use crate::geo::{distance_km, Coordinates};
#[cfg(feature = "http")]
pub use crate::loader::HttpSchoolSource;
pub use crate::loader::{fetch_schools, parse_payload, FetchConfig, SchoolSource, StaticSource};
pub use crate::location::{FixedLocation, LocationProvider, NoLocation, PermissionState};
pub use crate::model::{School, SchoolId};
pub use crate::order::OrderPolicy;
pub use crate::search::filter;
pub use crate::session::{load_session, reload};
pub use crate::state::{SearchEvent, SearchState, View};
pub use crate::traits::NameMatch;
