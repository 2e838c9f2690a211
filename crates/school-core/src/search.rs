// crates/school-core/src/search.rs
use crate::model::School;
use crate::text::fold_key;

/// Returns the schools whose name contains `query`, ignoring case.
///
/// The result is a subsequence of `directory` in the same order. The query is
/// not trimmed, and an empty query returns every school.
pub fn filter<'a>(directory: &'a [School], query: &str) -> Vec<&'a School> {
    let q = fold_key(query);
    if q.is_empty() {
        return directory.iter().collect();
    }

    // Fold the query once instead of going through NameMatch per school.
    directory
        .iter()
        .filter(|s| fold_key(s.name()).contains(&q))
        .collect()
}
