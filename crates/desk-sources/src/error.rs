//! Source fetch error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while fetching one collection.
///
/// None of these abort a reconciliation cycle. The snapshot fetcher logs them
/// and substitutes an empty collection.
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The backend returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Payload was valid JSON but not a collection.
    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A directory source file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source is missing required configuration.
    #[error("source not configured: {0} is empty")]
    NotConfigured(&'static str),
}
