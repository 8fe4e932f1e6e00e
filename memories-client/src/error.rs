//! API error types.

use thiserror::Error;

/// Errors that can occur talking to the memories API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or completed.
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// The backend is unreachable.
    #[error("API unavailable: {0}")]
    Unavailable(String),

    /// The request timed out.
    #[error("API request timed out")]
    Timeout,

    /// The backend answered with a non-OK status; `body` is its textual
    /// error response, shown in logs so a failed write can be diagnosed.
    #[error("API rejected the request ({status}): {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// The response body was not the JSON we expected.
    #[error("Failed to parse API response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        // is_connect() is not exposed on the wasm32 fetch backend.
        #[cfg(not(target_arch = "wasm32"))]
        if err.is_connect() {
            return ApiError::Unavailable(err.to_string());
        }

        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Parse(err.to_string())
        } else {
            ApiError::RequestFailed(err.to_string())
        }
    }
}
