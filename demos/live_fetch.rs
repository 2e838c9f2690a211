//! Fetches the live directory and prints the first few schools.
//!
//! Pass a latitude and longitude to order by distance:
//!   cargo run --example live_fetch -- 40.71 -74.00

use school_core::prelude::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let mut coords = std::env::args().skip(1).filter_map(|a| a.parse::<f64>().ok());
    let location = match (coords.next(), coords.next()) {
        (Some(lat), Some(lon)) => Some(FixedLocation(Coordinates::new(lat, lon))),
        _ => None,
    };

    let source = HttpSchoolSource::new(&FetchConfig::default())?;
    println!("Fetching {} ...", source.endpoint());
    let state = load_session(&source, &location).await;

    match state.view() {
        View::Failed(e) => eprintln!("✗ {e}"),
        View::Schools(schools) => {
            println!("✓ {} schools ({:?})", schools.len(), state.order_policy());
            for school in schools.iter().take(10) {
                println!("  {} ({})", school.name(), school.county());
            }
        }
        View::Loading => println!("still loading"),
    }
    Ok(())
}
