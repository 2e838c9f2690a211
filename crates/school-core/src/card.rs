// crates/school-core/src/card.rs

//! Presentation model shared by the CLI and the wasm bindings.

use crate::model::School;
use crate::state::View;
use serde::Serialize;
use std::fmt::{self, Write};

pub const PAGE_TITLE: &str = "Pick Your School";
pub const FAILED_TO_LOAD: &str = "failed to load";
pub const LOADING: &str = "Loading schools...";

/// One entry of the rendered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchoolCard {
    /// First character of the name, upper-cased. Empty for an empty name.
    pub initial: String,
    pub name: String,
    pub location: String,
}

impl SchoolCard {
    pub fn new(name: &str, location: &str) -> Self {
        Self {
            initial: initial_of(name),
            name: name.to_string(),
            location: location.to_string(),
        }
    }

    /// The card shown in place of the list when loading failed.
    pub fn failed() -> Self {
        Self::new(FAILED_TO_LOAD, FAILED_TO_LOAD)
    }
}

impl From<&School> for SchoolCard {
    fn from(s: &School) -> Self {
        Self::new(s.name(), s.county())
    }
}

impl fmt::Display for SchoolCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}] {}", self.initial, self.name)?;
        write!(f, "    {}", self.location)
    }
}

fn initial_of(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// Cards for the current view. `None` while loading.
pub fn cards_for(view: &View<'_>) -> Option<Vec<SchoolCard>> {
    match view {
        View::Loading => None,
        View::Failed(_) => Some(vec![SchoolCard::failed()]),
        View::Schools(schools) => Some(schools.iter().map(|s| SchoolCard::from(*s)).collect()),
    }
}

/// Renders the whole page as plain text: title, then one block per card.
pub fn render_page(view: &View<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{PAGE_TITLE}");
    let _ = writeln!(out, "{}", "=".repeat(PAGE_TITLE.len()));

    match cards_for(view) {
        None => {
            let _ = writeln!(out, "{LOADING}");
        }
        Some(cards) => {
            for card in cards {
                let _ = writeln!(out, "{card}");
            }
        }
    }
    out
}
