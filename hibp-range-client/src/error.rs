#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("HTTP request failed for prefix {prefix}: {source}")]
    HttpRequest {
        prefix: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected HTTP status {status} for prefix {prefix}")]
    UnexpectedStatus { prefix: String, status: reqwest::StatusCode },

    #[error("no hashes in response for prefix {prefix}")]
    EmptyResponse { prefix: String },
}

impl Error {
    /// True for connect, DNS, timeout and body-read failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::HttpRequest { .. })
    }
}
