use thiserror::Error;

/// Failure of a single provider call. The fetcher logs these and moves on.
#[derive(Error, Debug)]
pub enum NewsError {
    /// Connection, TLS, timeout or body read failure.
    #[error("HTTP error from {provider}: {source}")]
    Http {
        provider: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} returned status {status}")]
    Status { provider: String, status: u16 },

    #[error("Malformed response from {provider}: {source}")]
    Decode {
        provider: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid endpoint URL for {provider}: {source}")]
    InvalidUrl {
        provider: String,
        #[source]
        source: url::ParseError,
    },
}
