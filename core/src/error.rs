//! Error type for the posts API client.
//!
//! # Design
//! Every failure of a remote call is a `TransportError`. `NotFound` gets a
//! dedicated variant because callers frequently distinguish "the post does
//! not exist" from "the server returned an unexpected status." All other
//! non-2xx responses land in `Status` with the raw status code and body.
//! The `Display` output is the human-readable message the store records when
//! a load fails.

use thiserror::Error;

/// Errors returned by the remote client and by store operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Decode(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Encode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_includes_code_and_body() {
        let err = TransportError::Status {
            status: 503,
            body: "unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: unavailable");
    }

    #[test]
    fn network_message_is_prefixed() {
        let err = TransportError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "network error: connection refused");
    }
}
