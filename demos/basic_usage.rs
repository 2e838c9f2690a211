//! Basic usage example for school-core
//!
//! Runs entirely offline against a canned payload:
//! - Load a session with and without a location
//! - Filter by a query, as a search box would
//! - Render the text page

use school_search_rs::prelude::*;

const PAYLOAD: &str = r#"{"schools":[
    {"id":1,"name":"University of Washington","county":"King","coordinates":{"lat":47.6553,"long":-122.3035}},
    {"id":2,"name":"Stanford University","county":"Santa Clara","coordinates":{"lat":37.4275,"long":-122.1697}},
    {"id":3,"name":"san jose state university","county":"Santa Clara","coordinates":{"lat":37.3352,"long":-121.8811}},
    {"id":4,"name":"Portland State University","county":"Multnomah","coordinates":{"lat":45.5118,"long":-122.6847}}
]}"#;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    println!("=== school-core Basic Usage Example ===\n");

    let source = StaticSource::ok(PAYLOAD);

    println!("--- Example 1: No location, alphabetical ---");
    let state = load_session(&source, &NoLocation).await;
    for school in state.visible() {
        println!("  {}", school.name());
    }
    println!();

    println!("--- Example 2: Located in San Francisco, nearest first ---");
    let sf = Coordinates::new(37.7749, -122.4194);
    let mut state = load_session(&source, &FixedLocation(sf)).await;
    for school in state.visible() {
        let km = school.distance_from(&sf).unwrap_or(f64::NAN);
        println!("  {:<30} {:>8.1} km", school.name(), km);
    }
    println!();

    println!("--- Example 3: Typing \"state\" ---");
    state.apply(SearchEvent::QueryChanged("state".into()));
    print!("{}", render_page(&state.view()));
    println!();

    println!("--- Example 4: A failed load ---");
    let broken = load_session(&StaticSource::response(503, ""), &NoLocation).await;
    print!("{}", render_page(&broken.view()));
}
