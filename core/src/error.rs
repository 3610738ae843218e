//! Error types for the heroes API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the hero does not exist" from "the server returned an unexpected
//! status." All other non-2xx responses land in `HttpError` with the raw
//! status code and body for debugging. `HeroService` never hands these to its
//! callers; they only reach the diagnostics channel and the message log.

use thiserror::Error;

/// Errors produced while building, sending or parsing a heroes request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404; the requested hero does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The transport failed before a response was received. The transport's
    /// own error is kept as the source.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors raised while assembling a `HeroServiceConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_log_format() {
        assert_eq!(ApiError::NotFound.to_string(), "resource not found");
        assert_eq!(
            ApiError::HttpError {
                status: 500,
                body: "boom".to_string()
            }
            .to_string(),
            "HTTP 500: boom"
        );
        let refused = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        assert_eq!(
            ApiError::Transport(Box::new(refused)).to_string(),
            "transport error: connection refused"
        );
    }

    #[test]
    fn transport_error_keeps_its_source() {
        use std::error::Error as _;

        let refused = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let error = ApiError::Transport(Box::new(refused));
        let source = error.source().expect("transport errors carry a source");
        let io = source.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io.kind(), std::io::ErrorKind::ConnectionRefused);
    }
}
