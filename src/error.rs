//! Crate-level error type.
//!
//! Only transport problems, malformed bodies, and server-reported failures
//! are errors. A lookup that finds no record is `Ok(None)` at the gateway,
//! and a response missing an optional field is defaulted during mapping;
//! neither surfaces here.

use thiserror::Error;

use crate::traits::HttpError;

/// Error type for gateway operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Transport-level failure (connection, timeout, IO).
    #[error("HTTP transport error: {0}")]
    Http(#[from] HttpError),

    /// Response body was not the JSON we expected.
    #[error("failed to decode response: {0}")]
    Json(#[from] serde_json::Error),

    /// Server answered with a non-2xx status.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// HTTP 200, but the GraphQL `errors` array was non-empty.
    #[error("GraphQL error: {}", .messages.join("; "))]
    GraphQl { messages: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status() {
        let err = GatewayError::Server {
            status: 503,
            message: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "server error (503): Service Unavailable");
    }

    #[test]
    fn display_joins_graphql_messages() {
        let err = GatewayError::GraphQl {
            messages: vec!["bad field".to_string(), "bad arg".to_string()],
        };
        assert_eq!(err.to_string(), "GraphQL error: bad field; bad arg");
    }

    #[test]
    fn http_error_converts() {
        let err: GatewayError = HttpError::ConnectionFailed("refused".to_string()).into();
        assert!(matches!(err, GatewayError::Http(_)));
    }
}
