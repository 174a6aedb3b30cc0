//! Error Types
//!
//! Every loader and the submit handler report failures as `ApiError`.
//! Nothing here is shown to the user; the UI only logs it.

use thiserror::Error;

/// Common result type for API and platform calls
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure or a response body that could not be decoded
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    /// Position denied, timed out or unavailable
    #[error("geolocation failed: {0}")]
    Geolocation(String),

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A multipart part could not be built
    #[error("invalid payload: {0}")]
    Payload(String),

    /// The picked file could not be read into memory
    #[error("could not read file: {0}")]
    File(String),
}
