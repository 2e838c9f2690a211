//! school-wasm — WebAssembly bindings for school-core
//!
//! The page keeps doing what browsers are good at (the `fetch` call and the
//! geolocation prompt) and hands the results to a [`SchoolSearch`] instance,
//! which owns ordering, filtering and the card model.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { SchoolSearch, schoolsEndpoint } from 'school-wasm';
//!
//! await init();
//! const search = new SchoolSearch();
//!
//! navigator.geolocation.getCurrentPosition(
//!   (p) => { search.grant_location(p.coords.latitude, p.coords.longitude); render(); },
//!   () => { search.deny_location(); render(); },
//! );
//!
//! fetch(schoolsEndpoint())
//!   .then(async (r) => search.load_response(r.status, await r.text()))
//!   .catch((e) => search.load_failed(String(e)))
//!   .then(render);
//!
//! input.addEventListener('input', (e) => { search.set_query(e.target.value); render(); });
//!
//! function render() {
//!   // [{ initial, name, location }, ...], or null while loading
//!   const cards = search.cards();
//! }
//! ```
//!
//! Notes
//! -----
//! - A failed load renders as a single "failed to load" card.
//! - The location prompt may resolve before or after the fetch; the list
//!   ends up in the same order either way.
use wasm_bindgen::prelude::*;

use school_core::card::{cards_for, SchoolCard};
use school_core::error::DirectoryError;
use school_core::loader::{schools_from_response, RawResponse};
use school_core::{Coordinates, PermissionState, SearchEvent, SearchState, View};
use serde_wasm_bindgen::to_value;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"school-wasm ready".into());
}

/// Endpoint the page is expected to fetch.
#[wasm_bindgen(js_name = schoolsEndpoint)]
pub fn schools_endpoint() -> String {
    school_core::loader::SCHOOLS_ENDPOINT.to_string()
}

/// Haversine distance in km.
#[wasm_bindgen]
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    school_core::distance_km(lat1, lon1, lat2, lon2)
}

/* --------------------------------------------------------------------------
   Search session
-------------------------------------------------------------------------- */

#[wasm_bindgen]
#[derive(Default)]
pub struct SchoolSearch {
    state: SearchState,
}

#[wasm_bindgen]
impl SchoolSearch {
    #[wasm_bindgen(constructor)]
    pub fn new() -> SchoolSearch {
        SchoolSearch {
            state: SearchState::new(),
        }
    }

    /// Feeds the finished `fetch` response. Anything but 200 with a valid
    /// `{ schools: [...] }` body becomes the failure state.
    pub fn load_response(&mut self, status: u16, body: &str) {
        let response = RawResponse {
            status,
            body: body.as_bytes().to_vec(),
        };
        let result = schools_from_response(&response);
        self.state.apply(SearchEvent::DirectoryLoaded(result));
    }

    /// The `fetch` promise rejected (network error, CORS, ...).
    pub fn load_failed(&mut self, message: &str) {
        let err = DirectoryError::Transport(message.to_string());
        self.state.apply(SearchEvent::DirectoryLoaded(Err(err)));
    }

    /// Returns `false` if permission was already settled.
    pub fn grant_location(&mut self, lat: f64, lon: f64) -> bool {
        let here = Coordinates::new(lat, lon);
        self.state
            .apply(SearchEvent::PermissionResolved(PermissionState::Granted(here)))
    }

    pub fn deny_location(&mut self) -> bool {
        self.state
            .apply(SearchEvent::PermissionResolved(PermissionState::Denied))
    }

    pub fn set_query(&mut self, query: &str) {
        self.state.apply(SearchEvent::QueryChanged(query.to_string()));
    }

    pub fn query(&self) -> String {
        self.state.query().to_string()
    }

    /// `"loading"`, `"failed"` or `"loaded"`.
    pub fn status(&self) -> String {
        match self.state.view() {
            View::Loading => "loading",
            View::Failed(_) => "failed",
            View::Schools(_) => "loaded",
        }
        .to_string()
    }

    pub fn visible_count(&self) -> usize {
        self.state.visible().len()
    }

    /// Card names in display order, for quick checks from JS.
    pub fn visible_names(&self) -> Vec<String> {
        self.state
            .visible()
            .iter()
            .map(|s| s.name().to_string())
            .collect()
    }

    /// Array of `{ initial, name, location }`, or `null` while loading.
    pub fn cards(&self) -> JsValue {
        let cards: Option<Vec<SchoolCard>> = cards_for(&self.state.view());
        to_value(&cards).unwrap_or(JsValue::NULL)
    }

    /// Why loading failed, if it did.
    pub fn error(&self) -> Option<String> {
        self.state.error().map(|e| e.to_string())
    }
}

/* --------------------------------------------------------------------------
   Directory order as raw JS values
-------------------------------------------------------------------------- */

/// The full ordered directory as plain objects, for pages that render
/// their own cards.
#[wasm_bindgen]
pub fn ordered_directory(search: &SchoolSearch) -> js_sys::Array {
    let array = js_sys::Array::new();
    for school in search.state.directory() {
        array.push(&to_value(school).unwrap_or(JsValue::NULL));
    }
    array
}
