// crates/school-core/src/loader/mod.rs

//! # Directory Loader
//!
//! Handles the transport layer (one `GET` against the schools endpoint) and
//! delegates body parsing to [`parse_payload`]. Transport is behind the
//! [`SchoolSource`] trait so the rest of the crate, and its tests, never need
//! a network.

use crate::error::{DirectoryError, Result};
use crate::model::School;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

#[cfg(feature = "http")]
mod http;
mod payload;

#[cfg(feature = "http")]
pub use http::HttpSchoolSource;
pub use payload::parse_payload;

pub const SCHOOLS_ENDPOINT: &str = "https://api.sendbeacon.com/team/schools";

/// Connection settings for [`HttpSchoolSource`].
#[derive(Debug, Clone, PartialEq)]
pub struct FetchConfig {
    pub endpoint: String,
    /// `None` waits as long as the server does.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: SCHOOLS_ENDPOINT.to_string(),
            timeout: None,
            user_agent: concat!("school-search/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Status line and body of a finished request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Anything that can perform the one schools request.
///
/// Implementations report only transport failures as errors. Status and body
/// checks happen in [`fetch_schools`].
pub trait SchoolSource: Send + Sync {
    fn fetch(&self) -> impl Future<Output = Result<RawResponse>> + Send;
}

/// Fetches, validates and converts the directory, in fetched order.
pub async fn fetch_schools<S: SchoolSource>(source: &S) -> Result<Vec<School>> {
    let response = source.fetch().await.inspect_err(|e| {
        warn!(error = %e, "school request failed");
    })?;
    schools_from_response(&response)
}

/// Accepts only status 200 with a body holding a `schools` list.
pub fn schools_from_response(response: &RawResponse) -> Result<Vec<School>> {
    if response.status != 200 {
        warn!(status = response.status, "school request returned non-200");
        return Err(DirectoryError::Status(response.status));
    }

    let schools = parse_payload(&response.body).inspect_err(|e| {
        warn!(error = %e, "school payload rejected");
    })?;
    debug!(count = schools.len(), "school directory fetched");
    Ok(schools)
}

/// In-memory source that replays a canned outcome on every fetch.
#[derive(Debug, Clone)]
pub struct StaticSource {
    outcome: StaticOutcome,
}

#[derive(Debug, Clone)]
enum StaticOutcome {
    Response(RawResponse),
    Transport(String),
}

impl StaticSource {
    /// A 200 response with the given body.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::response(200, body)
    }

    pub fn response(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            outcome: StaticOutcome::Response(RawResponse {
                status,
                body: body.into(),
            }),
        }
    }

    pub fn transport_error(message: impl Into<String>) -> Self {
        Self {
            outcome: StaticOutcome::Transport(message.into()),
        }
    }
}

impl SchoolSource for StaticSource {
    async fn fetch(&self) -> Result<RawResponse> {
        match &self.outcome {
            StaticOutcome::Response(r) => Ok(r.clone()),
            StaticOutcome::Transport(msg) => Err(DirectoryError::Transport(msg.clone())),
        }
    }
}
