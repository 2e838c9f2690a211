//! school-search: command-line front end for school-core
//!
//! Fetches the school directory once per run and prints it as cards, the
//! same initial / name / region blocks the web page shows.
//!
//! Usage examples
//! --------------
//!
//! - List every school, alphabetically
//!   $ school-search list
//!
//! - List every school, nearest first
//!   $ school-search --lat 37.77 --lon -122.42 list
//!
//! - Search by name (case-insensitive substring)
//!   $ school-search search "state"
//!
//! - Type queries one line at a time; `:reload` fetches again, `:q` quits
//!   $ school-search interactive
//!
//! - Distance between two points
//!   $ school-search distance 52.52 13.405 48.1351 11.582
//!
//! A failed fetch is not an error exit: it prints the "failed to load" card,
//! and `-v` shows why on stderr.
mod args;
mod logging;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use school_core::card::{cards_for, render_page};
use school_core::distance_km;
use school_core::loader::HttpSchoolSource;
use school_core::session::{load_session, reload};
use school_core::state::{SearchEvent, SearchState, View};
use serde_json::json;
use std::io::{self, BufRead, Write};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logging::init_logging(args.verbose);

    match &args.command {
        Commands::Distance {
            lat1,
            lon1,
            lat2,
            lon2,
        } => {
            let km = distance_km(*lat1, *lon1, *lat2, *lon2);
            if args.json {
                println!("{}", json!({ "km": km }));
            } else {
                println!("{km:.3} km");
            }
        }

        Commands::List => {
            let (state, _) = open_session(&args).await?;
            print_view(&state, args.json)?;
        }

        Commands::Search { query } => {
            let (mut state, _) = open_session(&args).await?;
            state.apply(SearchEvent::QueryChanged(query.clone()));
            print_view(&state, args.json)?;
            match no_match_hint(&state) {
                Some(hint) if !args.json => println!("{hint}"),
                _ => {}
            }
        }

        Commands::Interactive => {
            let (mut state, source) = open_session(&args).await?;
            print_view(&state, args.json)?;
            for line in io::stdin().lock().lines() {
                let line = line?;
                match line.as_str() {
                    ":q" | ":quit" => break,
                    ":reload" => reload(&mut state, &source).await,
                    _ => {
                        state.apply(SearchEvent::QueryChanged(line));
                    }
                }
                print_view(&state, args.json)?;
            }
        }
    }

    Ok(())
}

/// Builds the HTTP source and runs the startup fetch + location join.
async fn open_session(args: &CliArgs) -> anyhow::Result<(SearchState, HttpSchoolSource)> {
    let source = HttpSchoolSource::new(&args.fetch_config())?;
    let location = args.location();
    info!(
        endpoint = source.endpoint(),
        located = location.is_some(),
        "loading schools"
    );
    let state = load_session(&source, &location).await;
    Ok((state, source))
}

fn print_view(state: &SearchState, as_json: bool) -> anyhow::Result<()> {
    let view = state.view();
    let mut out = io::stdout().lock();

    if !as_json {
        write!(out, "{}", render_page(&view))?;
        return Ok(out.flush()?);
    }

    let value = match &view {
        View::Failed(e) => json!({ "error": e.to_string(), "cards": cards_for(&view) }),
        _ => json!({
            "query": state.query(),
            "permission": state.permission(),
            "schools": state.visible(),
        }),
    };
    writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    Ok(out.flush()?)
}

/// Shown under the (empty) page when a loaded directory has no match.
fn no_match_hint(state: &SearchState) -> Option<String> {
    match state.view() {
        View::Schools(v) if v.is_empty() => {
            Some(format!("No schools found matching: {}", state.query()))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use school_core::error::DirectoryError;
    use school_core::School;

    fn loaded(names: &[&str], query: &str) -> SearchState {
        let schools = names
            .iter()
            .enumerate()
            .map(|(i, n)| School::new(i as i64, *n, "County", None))
            .collect();
        let mut state = SearchState::new();
        state.apply(SearchEvent::DirectoryLoaded(Ok(schools)));
        state.apply(SearchEvent::QueryChanged(query.to_string()));
        state
    }

    #[test]
    fn empty_search_still_renders_the_page() {
        let state = loaded(&["School A", "Other"], "zzz");
        let page = render_page(&state.view());
        assert!(page.starts_with("Pick Your School\n"));
        assert!(!page.contains('['));
        assert_eq!(
            no_match_hint(&state).as_deref(),
            Some("No schools found matching: zzz")
        );
    }

    #[test]
    fn no_hint_when_something_matches_or_load_failed() {
        assert!(no_match_hint(&loaded(&["School A", "Other"], "sch")).is_none());

        let mut failed = SearchState::new();
        failed.apply(SearchEvent::DirectoryLoaded(Err(DirectoryError::Status(500))));
        assert!(no_match_hint(&failed).is_none());
    }
}
