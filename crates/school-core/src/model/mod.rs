// crates/school-core/src/model/mod.rs

//! # Domain Model
//!
//! `School` is what the rest of the crate works with. The wire shape lives in
//! [`raw`] and is converted once, in [`convert`], right after parsing.

pub mod convert;
pub mod raw;

use crate::geo::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt;

/// School identity as sent by the API: either a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchoolId {
    Num(i64),
    Text(String),
}

impl fmt::Display for SchoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchoolId::Num(n) => write!(f, "{n}"),
            SchoolId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for SchoolId {
    fn from(n: i64) -> Self {
        SchoolId::Num(n)
    }
}

impl From<&str> for SchoolId {
    fn from(s: &str) -> Self {
        SchoolId::Text(s.to_string())
    }
}

/// A single school record. Immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    id: SchoolId,
    name: String,
    county: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    coordinates: Option<Coordinates>,
}

impl School {
    pub fn new(
        id: impl Into<SchoolId>,
        name: impl Into<String>,
        county: impl Into<String>,
        coordinates: Option<Coordinates>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            county: county.into(),
            coordinates,
        }
    }

    pub fn id(&self) -> &SchoolId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Region label shown under the name (the API calls it `county`).
    pub fn county(&self) -> &str {
        &self.county
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    /// Distance from `origin`, or `None` if the school has no coordinates.
    pub fn distance_from(&self, origin: &Coordinates) -> Option<f64> {
        self.coordinates.map(|c| origin.distance_to(&c))
    }
}
