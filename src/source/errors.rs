use thiserror::Error;

/// Failure to obtain catalog data.
///
/// Every variant is the same "fetch-or-parse failure" for the views; the
/// variants only exist to make the log line useful.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Entity not found")]
    NotFound,

    #[error("Invalid request url: {0}")]
    InvalidUrl(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

pub type SourceResult<T> = Result<T, SourceError>;

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Decode(err.to_string())
    }
}

#[cfg(feature = "server")]
impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SourceError::Decode(err.to_string())
        } else {
            SourceError::Request(err.to_string())
        }
    }
}

#[cfg(feature = "server")]
impl From<url::ParseError> for SourceError {
    fn from(err: url::ParseError) -> Self {
        SourceError::InvalidUrl(err.to_string())
    }
}
