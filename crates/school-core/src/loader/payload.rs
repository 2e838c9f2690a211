// crates/school-core/src/loader/payload.rs
use crate::error::Result;
use crate::model::convert::from_raw;
use crate::model::raw::SchoolsPayload;
use crate::model::School;

/// Parses a `{ "schools": [...] }` body into domain records.
///
/// Unknown fields are ignored; a missing `schools` key, a non-list value, or
/// an entry without `id`/`name`/`county` rejects the whole body.
pub fn parse_payload(body: &[u8]) -> Result<Vec<School>> {
    let payload: SchoolsPayload = serde_json::from_slice(body)?;
    Ok(from_raw(payload))
}
