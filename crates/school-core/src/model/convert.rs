// crates/school-core/src/model/convert.rs
use super::raw::SchoolsPayload;
use super::School;
use crate::geo::Coordinates;

/// **Standard Converter:** Raw -> Domain, keeping the payload's order.
pub fn from_raw(payload: SchoolsPayload) -> Vec<School> {
    payload
        .schools
        .into_iter()
        .map(|raw| {
            let coordinates = raw.coordinates.map(|c| Coordinates::new(c.lat, c.long));
            School::new(raw.id, raw.name, raw.county, coordinates)
        })
        .collect()
}
