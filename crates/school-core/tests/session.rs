use school_core::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

const TWO_SCHOOLS: &str = r#"{"schools":[
    {"id":1,"name":"Beta U","county":"X"},
    {"id":2,"name":"alpha U","county":"Y"}
]}"#;

// 0.009 degrees of latitude is about 1 km.
const FIVE_AND_ONE_KM: &str = r#"{"schools":[
    {"id":"five","name":"Five Km College","county":"X","coordinates":{"lat":0.045,"long":0.0}},
    {"id":"one","name":"One Km College","county":"Y","coordinates":{"lat":0.009,"long":0.0}}
]}"#;

fn visible_names(state: &SearchState) -> Vec<String> {
    state
        .visible()
        .iter()
        .map(|s| s.name().to_string())
        .collect()
}

/// Resolves only after the fetch side has had a chance to finish.
struct SlowLocation {
    position: Option<Coordinates>,
    polls: usize,
}

impl LocationProvider for SlowLocation {
    async fn locate(&self) -> PermissionState {
        for _ in 0..self.polls {
            tokio::task::yield_now().await;
        }
        match self.position {
            Some(c) => PermissionState::Granted(c),
            None => PermissionState::Denied,
        }
    }
}

struct CountingSource {
    inner: StaticSource,
    calls: AtomicUsize,
}

impl SchoolSource for CountingSource {
    async fn fetch(&self) -> Result<school_core::loader::RawResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch().await
    }
}

#[tokio::test]
async fn denied_permission_orders_by_folded_name() {
    let state = load_session(&StaticSource::ok(TWO_SCHOOLS), &NoLocation).await;
    assert_eq!(state.permission(), PermissionState::Denied);
    assert_eq!(visible_names(&state), ["alpha U", "Beta U"]);
}

#[tokio::test]
async fn granted_permission_orders_by_distance() {
    let here = FixedLocation(Coordinates::new(0.0, 0.0));
    let state = load_session(&StaticSource::ok(FIVE_AND_ONE_KM), &here).await;
    assert_eq!(visible_names(&state), ["One Km College", "Five Km College"]);
}

#[tokio::test]
async fn late_permission_gives_the_same_order() {
    let slow = SlowLocation {
        position: Some(Coordinates::new(0.0, 0.0)),
        polls: 16,
    };
    let state = load_session(&StaticSource::ok(FIVE_AND_ONE_KM), &slow).await;
    assert_eq!(visible_names(&state), ["One Km College", "Five Km College"]);
}

#[tokio::test]
async fn non_200_becomes_failed_to_load() {
    let state = load_session(&StaticSource::response(500, TWO_SCHOOLS), &NoLocation).await;
    assert!(matches!(state.view(), View::Failed(DirectoryError::Status(500))));

    let page = render_page(&state.view());
    assert_eq!(page.matches("failed to load").count(), 2);
    assert!(!page.contains("Beta U"));
}

#[tokio::test]
async fn transport_and_payload_failures_look_the_same() {
    for source in [
        StaticSource::transport_error("connection refused"),
        StaticSource::ok("<html>oops</html>"),
        StaticSource::ok(r#"{"colleges":[]}"#),
    ] {
        let state = load_session(&source, &NoLocation).await;
        let cards = school_core::card::cards_for(&state.view()).unwrap();
        assert_eq!(cards, vec![SchoolCard::failed()]);
    }
}

#[tokio::test]
async fn typing_a_query_filters_loaded_schools() {
    let body = r#"{"schools":[
        {"id":1,"name":"School A","county":"X"},
        {"id":2,"name":"Other","county":"Y"}
    ]}"#;
    let mut state = load_session(&StaticSource::ok(body), &NoLocation).await;

    for typed in ["s", "sc", "sch"] {
        state.apply(SearchEvent::QueryChanged(typed.to_string()));
    }
    assert_eq!(visible_names(&state), ["School A"]);

    state.apply(SearchEvent::QueryChanged(String::new()));
    assert_eq!(visible_names(&state), ["Other", "School A"]);
}

#[tokio::test]
async fn reload_keeps_query_and_permission() {
    let source = CountingSource {
        inner: StaticSource::ok(FIVE_AND_ONE_KM),
        calls: AtomicUsize::new(0),
    };
    let here = FixedLocation(Coordinates::new(0.0, 0.0));
    let mut state = load_session(&source, &here).await;
    state.apply(SearchEvent::QueryChanged("km".into()));

    reload(&mut state, &source).await;

    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    assert_eq!(state.query(), "km");
    assert_eq!(visible_names(&state), ["One Km College", "Five Km College"]);
}
