// crates/school-core/src/session.rs
use crate::loader::{fetch_schools, SchoolSource};
use crate::location::LocationProvider;
use crate::state::{SearchEvent, SearchState};
use tracing::debug;

/// Starts a session: asks for the location and fetches the directory at the
/// same time, then folds both results into a fresh [`SearchState`].
///
/// Which of the two finishes first does not matter. The permission is applied
/// before the directory here, and a late permission would re-order the loaded
/// directory from its fetched order anyway, so both paths end in the same
/// ordering.
pub async fn load_session<S, L>(source: &S, locator: &L) -> SearchState
where
    S: SchoolSource,
    L: LocationProvider,
{
    let (permission, schools) = futures::join!(locator.locate(), fetch_schools(source));
    debug!(?permission, ok = schools.is_ok(), "session sources resolved");

    let mut state = SearchState::new();
    state.apply(SearchEvent::PermissionResolved(permission));
    state.apply(SearchEvent::DirectoryLoaded(schools));
    state
}

/// Fetches again and replaces the directory, keeping query and permission.
pub async fn reload<S: SchoolSource>(state: &mut SearchState, source: &S) {
    let schools = fetch_schools(source).await;
    state.apply(SearchEvent::DirectoryLoaded(schools));
}
