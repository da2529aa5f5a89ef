//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur when making HTTP requests.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP error response.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// Failed to parse response body.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Request timeout.
    #[error("Request timed out")]
    Timeout,

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(String),
}

impl FetchError {
    /// Message suitable for showing to a shopper.
    ///
    /// For HTTP errors this is the server's own message when it sent one.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::HttpError { status, message } => {
                let message = message.trim();
                if message.is_empty() {
                    format!("HTTP {status}")
                } else {
                    message.to_string()
                }
            }
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::JsonError(e.to_string())
    }
}

impl From<url::ParseError> for FetchError {
    fn from(e: url::ParseError) -> Self {
        FetchError::InvalidUrl(e.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_builder() {
            FetchError::InvalidUrl(e.to_string())
        } else {
            FetchError::RequestError(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = FetchError::HttpError {
            status: 402,
            message: "Card declined".to_string(),
        };
        assert_eq!(err.user_message(), "Card declined");
    }

    #[test]
    fn test_blank_http_message_shows_status_only() {
        let err = FetchError::HttpError {
            status: 500,
            message: "  ".to_string(),
        };
        assert_eq!(err.user_message(), "HTTP 500");
        assert_eq!(FetchError::Timeout.user_message(), "Request timed out");
    }
}
