// crates/school-core/src/order.rs
use crate::geo::Coordinates;
use crate::location::PermissionState;
use crate::model::School;
use crate::text::fold_key;
use std::cmp::Ordering;
use tracing::debug;

/// How the directory is ordered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrderPolicy {
    /// Ascending by case-folded name.
    Alphabetical,
    /// Ascending by great-circle distance from the given point.
    Proximity(Coordinates),
}

impl From<&PermissionState> for OrderPolicy {
    fn from(p: &PermissionState) -> Self {
        match p.position() {
            Some(origin) => OrderPolicy::Proximity(origin),
            None => OrderPolicy::Alphabetical,
        }
    }
}

impl OrderPolicy {
    /// Returns a freshly ordered copy of `schools`.
    ///
    /// Both orderings are stable: ties keep the input order. Under
    /// `Proximity`, schools without coordinates go last.
    pub fn apply(&self, schools: &[School]) -> Vec<School> {
        let mut out = schools.to_vec();
        match self {
            OrderPolicy::Alphabetical => {
                debug!(count = out.len(), "ordering schools by name");
                out.sort_by_cached_key(|s| fold_key(s.name()));
            }
            OrderPolicy::Proximity(origin) => {
                debug!(
                    count = out.len(),
                    lat = origin.lat,
                    lon = origin.lon,
                    "ordering schools by distance"
                );
                let mut keyed: Vec<(Option<f64>, School)> = out
                    .into_iter()
                    .map(|s| (s.distance_from(origin), s))
                    .collect();
                keyed.sort_by(|(a, _), (b, _)| compare_distance(*a, *b));
                out = keyed.into_iter().map(|(_, s)| s).collect();
            }
        }
        out
    }
}

fn compare_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
