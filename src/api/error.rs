use thiserror::Error;

/// Failure of a users request.
///
/// Callers treat every variant as the same "request failed" outcome; the
/// variants only make the log line useful.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, timeout or body transfer error
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Server answered outside the 2xx range
    #[error("{method} {url} returned HTTP {status}")]
    Status {
        method: String,
        url: String,
        status: u16,
    },

    /// Response body is not the expected JSON
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Page size outside the page-size selector
    #[error("Invalid page size {0}; expected one of {}", crate::config::page_sizes_label())]
    InvalidPageSize(u32),
}
