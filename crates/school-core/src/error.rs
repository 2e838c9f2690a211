// crates/school-core/src/error.rs
use thiserror::Error;

/// Everything that can go wrong while loading the directory.
///
/// All variants end up on screen as the same "failed to load" card; the
/// distinction is kept for logs and for callers that want to tell them apart.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The request never produced a response (DNS, TLS, connection reset...).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with something other than 200.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The body was not JSON, or had no `schools` list.
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DirectoryError>;

#[cfg(feature = "http")]
impl From<reqwest::Error> for DirectoryError {
    fn from(e: reqwest::Error) -> Self {
        DirectoryError::Transport(e.to_string())
    }
}
