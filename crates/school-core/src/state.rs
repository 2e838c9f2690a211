// crates/school-core/src/state.rs

//! # Search State
//!
//! One container owns the directory, the query and the permission state.
//! Everything changes through [`SearchState::apply`], and every change
//! replaces whole values: the ordered directory is rebuilt, never patched.

use crate::error::{DirectoryError, Result};
use crate::model::School;
use crate::order::OrderPolicy;
use crate::search::filter;
use tracing::debug;

pub use crate::location::PermissionState;

/// The discrete transitions of a search session.
#[derive(Debug)]
pub enum SearchEvent {
    /// A fetch finished. Replaces any previously loaded directory.
    DirectoryLoaded(Result<Vec<School>>),
    /// The location request resolved. Only the first resolution counts.
    PermissionResolved(PermissionState),
    /// The search text changed.
    QueryChanged(String),
}

#[derive(Debug)]
enum DirectoryState {
    Loading,
    Loaded {
        /// As received; the base every re-order starts from.
        fetched: Vec<School>,
        ordered: Vec<School>,
    },
    Failed(DirectoryError),
}

/// What the presentation layer should show right now.
#[derive(Debug)]
pub enum View<'a> {
    Loading,
    Failed(&'a DirectoryError),
    /// The filtered view: a subsequence of the ordered directory.
    Schools(Vec<&'a School>),
}

#[derive(Debug)]
pub struct SearchState {
    directory: DirectoryState,
    query: String,
    permission: PermissionState,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            directory: DirectoryState::Loading,
            query: String::new(),
            permission: PermissionState::Unrequested,
        }
    }

    /// Applies one event. Returns `false` if the event was ignored, which only
    /// happens for a second permission resolution.
    pub fn apply(&mut self, event: SearchEvent) -> bool {
        match event {
            SearchEvent::DirectoryLoaded(Ok(fetched)) => {
                let ordered = self.order_policy().apply(&fetched);
                debug!(count = ordered.len(), "directory loaded");
                self.directory = DirectoryState::Loaded { fetched, ordered };
                true
            }
            SearchEvent::DirectoryLoaded(Err(e)) => {
                debug!(error = %e, "directory failed");
                self.directory = DirectoryState::Failed(e);
                true
            }
            SearchEvent::PermissionResolved(p) => {
                if self.permission.is_resolved() || !p.is_resolved() {
                    debug!(current = ?self.permission, ignored = ?p, "permission already settled");
                    return false;
                }
                self.permission = p;
                // Re-order from the fetched order, so the result matches
                // what a fresh fetch under the new policy would produce.
                let policy = self.order_policy();
                if let DirectoryState::Loaded { fetched, ordered } = &mut self.directory {
                    *ordered = policy.apply(fetched);
                }
                true
            }
            SearchEvent::QueryChanged(q) => {
                self.query = q;
                true
            }
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn permission(&self) -> PermissionState {
        self.permission
    }

    pub fn order_policy(&self) -> OrderPolicy {
        OrderPolicy::from(&self.permission)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.directory, DirectoryState::Loaded { .. })
    }

    pub fn error(&self) -> Option<&DirectoryError> {
        match &self.directory {
            DirectoryState::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// The ordered directory; empty while loading or after a failure.
    pub fn directory(&self) -> &[School] {
        match &self.directory {
            DirectoryState::Loaded { ordered, .. } => ordered,
            _ => &[],
        }
    }

    /// The filtered view for the current query, recomputed on every call.
    pub fn visible(&self) -> Vec<&School> {
        filter(self.directory(), &self.query)
    }

    pub fn view(&self) -> View<'_> {
        match &self.directory {
            DirectoryState::Loading => View::Loading,
            DirectoryState::Failed(e) => View::Failed(e),
            DirectoryState::Loaded { .. } => View::Schools(self.visible()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinates;

    fn names(v: &[&School]) -> Vec<String> {
        v.iter().map(|s| s.name().to_string()).collect()
    }

    fn sample() -> Vec<School> {
        vec![
            School::new(1, "Far College", "X", Some(Coordinates::new(0.045, 0.0))),
            School::new(2, "near university", "Y", Some(Coordinates::new(0.009, 0.0))),
            School::new(3, "Middle School", "Z", Some(Coordinates::new(0.027, 0.0))),
        ]
    }

    #[test]
    fn starts_loading_with_empty_query() {
        let s = SearchState::new();
        assert!(matches!(s.view(), View::Loading));
        assert_eq!(s.query(), "");
        assert_eq!(s.permission(), PermissionState::Unrequested);
        assert!(s.visible().is_empty());
    }

    #[test]
    fn denied_orders_alphabetically() {
        let mut s = SearchState::new();
        s.apply(SearchEvent::PermissionResolved(PermissionState::Denied));
        s.apply(SearchEvent::DirectoryLoaded(Ok(sample())));
        assert_eq!(
            names(&s.visible()),
            ["Far College", "Middle School", "near university"]
        );
    }

    #[test]
    fn late_permission_reorders_loaded_directory() {
        let mut s = SearchState::new();
        s.apply(SearchEvent::DirectoryLoaded(Ok(sample())));
        assert_eq!(
            names(&s.visible()),
            ["Far College", "Middle School", "near university"]
        );

        let origin = Coordinates::new(0.0, 0.0);
        assert!(s.apply(SearchEvent::PermissionResolved(PermissionState::Granted(origin))));
        assert_eq!(
            names(&s.visible()),
            ["near university", "Middle School", "Far College"]
        );
    }

    #[test]
    fn permission_is_one_shot() {
        let mut s = SearchState::new();
        assert!(s.apply(SearchEvent::PermissionResolved(PermissionState::Denied)));
        assert!(!s.apply(SearchEvent::PermissionResolved(PermissionState::Granted(
            Coordinates::new(0.0, 0.0)
        ))));
        assert_eq!(s.permission(), PermissionState::Denied);
        assert!(!s.apply(SearchEvent::PermissionResolved(PermissionState::Unrequested)));
    }

    #[test]
    fn query_filters_the_ordered_directory() {
        let mut s = SearchState::new();
        s.apply(SearchEvent::PermissionResolved(PermissionState::Granted(
            Coordinates::new(0.0, 0.0),
        )));
        s.apply(SearchEvent::DirectoryLoaded(Ok(sample())));
        s.apply(SearchEvent::QueryChanged("OL".into()));
        assert_eq!(names(&s.visible()), ["Middle School", "Far College"]);

        s.apply(SearchEvent::QueryChanged(String::new()));
        assert_eq!(s.visible().len(), 3);
    }

    #[test]
    fn failure_is_a_distinct_view() {
        let mut s = SearchState::new();
        s.apply(SearchEvent::DirectoryLoaded(Err(DirectoryError::Status(503))));
        assert!(matches!(s.view(), View::Failed(DirectoryError::Status(503))));
        assert!(s.directory().is_empty());
        assert!(!s.is_loaded());
    }

    #[test]
    fn new_fetch_replaces_directory_wholesale() {
        let mut s = SearchState::new();
        s.apply(SearchEvent::DirectoryLoaded(Err(DirectoryError::Transport(
            "down".into(),
        ))));
        s.apply(SearchEvent::DirectoryLoaded(Ok(vec![School::new(
            9, "Only", "One", None,
        )])));
        assert!(s.error().is_none());
        assert_eq!(names(&s.visible()), ["Only"]);
    }
}
