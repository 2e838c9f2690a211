use clap::{ArgAction, Parser, Subcommand};
use school_core::loader::{FetchConfig, SCHOOLS_ENDPOINT};
use school_core::location::FixedLocation;
use school_core::Coordinates;
use std::time::Duration;

/// CLI arguments for school-search
#[derive(Debug, Parser)]
#[command(
    name = "school-search",
    version,
    about = "Search the school directory, optionally ordered by distance from you"
)]
pub struct CliArgs {
    /// Schools endpoint to query
    #[arg(
        long = "endpoint",
        global = true,
        env = "SCHOOL_SEARCH_ENDPOINT",
        default_value = SCHOOLS_ENDPOINT
    )]
    pub endpoint: String,

    /// Your latitude in degrees; with --lon, orders schools by distance
    #[arg(long, global = true, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Your longitude in degrees; with --lat, orders schools by distance
    #[arg(long, global = true, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Give up on the request after this many seconds (default: wait forever)
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print JSON instead of cards
    #[arg(long, global = true)]
    pub json: bool,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every school in directory order
    List,

    /// Show schools whose name contains a substring
    Search {
        /// Substring to search (case-insensitive, whitespace kept)
        query: String,
    },

    /// Read queries from stdin, one per line, and re-filter after each
    Interactive,

    /// Great-circle distance in km between two points
    Distance {
        #[arg(allow_negative_numbers = true)]
        lat1: f64,
        #[arg(allow_negative_numbers = true)]
        lon1: f64,
        #[arg(allow_negative_numbers = true)]
        lat2: f64,
        #[arg(allow_negative_numbers = true)]
        lon2: f64,
    },
}

impl CliArgs {
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            endpoint: self.endpoint.clone(),
            timeout: self.timeout.map(Duration::from_secs),
            ..FetchConfig::default()
        }
    }

    /// Location permission is "granted" exactly when both coordinates are given.
    pub fn location(&self) -> Option<FixedLocation> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(FixedLocation(Coordinates::new(lat, lon))),
            _ => None,
        }
    }
}
