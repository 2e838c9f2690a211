// crates/school-core/src/model/raw.rs
use super::SchoolId;
use serde::Deserialize;

/// Top-level body of `GET /team/schools`.
///
/// ```json
/// { "schools": [ { "id": 1, "name": "...", "county": "...",
///                  "coordinates": { "lat": 37.1, "long": -122.3 } } ] }
/// ```
#[derive(Debug, Deserialize)]
pub struct SchoolsPayload {
    pub schools: Vec<SchoolRaw>,
}

/// Raw school entry as it comes from JSON.
#[derive(Debug, Deserialize)]
pub struct SchoolRaw {
    pub id: SchoolId,
    pub name: String,
    pub county: String,
    #[serde(default)]
    pub coordinates: Option<CoordinatesRaw>,
}

/// Note the `long` key; it becomes `Coordinates::lon`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CoordinatesRaw {
    pub lat: f64,
    pub long: f64,
}
