// crates/school-core/src/loader/http.rs
#![cfg(feature = "http")]

use super::{FetchConfig, RawResponse, SchoolSource};
use crate::error::Result;
use tracing::debug;

/// The real network source, backed by `reqwest`.
///
/// Needs a tokio runtime to be driven. No retries, no authentication.
#[derive(Debug, Clone)]
pub struct HttpSchoolSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSchoolSource {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SchoolSource for HttpSchoolSource {
    async fn fetch(&self) -> Result<RawResponse> {
        debug!(endpoint = %self.endpoint, "GET schools");
        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        debug!(status, bytes = body.len(), "schools response received");
        Ok(RawResponse { status, body })
    }
}
