//! Error types for the API client.

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when talking to the WFRMLS RESO API.
///
/// Every non-2xx, non-204 response maps to exactly one of the status-based
/// variants; the mapping lives in [`Error::from_status`] and nowhere else.
/// Resource clients and the facade propagate these unchanged.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP 401 or 403, or a missing bearer token at construction time
    /// (in which case `status` is `None`).
    #[error("authentication failed: {message}")]
    Authentication {
        message: String,
        status: Option<u16>,
        body: Option<Value>,
    },

    /// HTTP 400. The server rejected the request, usually a malformed
    /// `$filter` expression or an unknown field name.
    #[error("invalid request: {message}")]
    Validation {
        message: String,
        status: u16,
        body: Option<Value>,
    },

    /// HTTP 404.
    #[error("resource not found: {message}")]
    NotFound {
        message: String,
        status: u16,
        body: Option<Value>,
    },

    /// HTTP 429.
    #[error("rate limited: {message}")]
    RateLimit {
        message: String,
        status: u16,
        body: Option<Value>,
    },

    /// HTTP 5xx.
    #[error("server error (HTTP {status}): {message}")]
    Server {
        message: String,
        status: u16,
        body: Option<Value>,
    },

    /// Any other non-success status not covered above.
    #[error("unexpected status {status}: {message}")]
    Api {
        message: String,
        status: u16,
        body: Option<Value>,
    },

    /// Transport-level failure (connection refused, timeout, DNS) before any
    /// response was received.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A locally constructed URL was invalid.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A 2xx response body was not valid JSON.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// Maps a non-success HTTP status and its raw body to an error variant.
    ///
    /// The body is parsed as JSON when possible; the message is taken from
    /// the OData error envelope (`error.message`), then a top-level
    /// `message` field, then the raw text, then `HTTP <status>`.
    pub(crate) fn from_status(status: u16, body_text: &str) -> Self {
        let (message, body) = extract_error_message(status, body_text);
        match status {
            400 => Error::Validation {
                message,
                status,
                body,
            },
            401 | 403 => Error::Authentication {
                message,
                status: Some(status),
                body,
            },
            404 => Error::NotFound {
                message,
                status,
                body,
            },
            429 => Error::RateLimit {
                message,
                status,
                body,
            },
            500..=599 => Error::Server {
                message,
                status,
                body,
            },
            _ => Error::Api {
                message,
                status,
                body,
            },
        }
    }

    /// Constructs the error raised when no bearer token can be found.
    pub(crate) fn missing_token() -> Self {
        Error::Authentication {
            message: format!(
                "no bearer token provided and {} is not set",
                crate::transport::TOKEN_ENV_VAR
            ),
            status: None,
            body: None,
        }
    }

    /// The HTTP status code attached to this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Authentication { status, .. } => *status,
            Error::Validation { status, .. }
            | Error::NotFound { status, .. }
            | Error::RateLimit { status, .. }
            | Error::Server { status, .. }
            | Error::Api { status, .. } => Some(*status),
            Error::Network(e) => e.status().map(|s| s.as_u16()),
            Error::Url(_) | Error::Decode(_) => None,
        }
    }

    /// The parsed JSON error payload, when the server sent one.
    pub fn body(&self) -> Option<&Value> {
        match self {
            Error::Authentication { body, .. }
            | Error::Validation { body, .. }
            | Error::NotFound { body, .. }
            | Error::RateLimit { body, .. }
            | Error::Server { body, .. }
            | Error::Api { body, .. } => body.as_ref(),
            _ => None,
        }
    }
}

/// Pulls a human-readable message out of an error response body.
fn extract_error_message(status: u16, body_text: &str) -> (String, Option<Value>) {
    match serde_json::from_str::<Value>(body_text) {
        Ok(parsed) => {
            let message = parsed
                .get("error")
                .and_then(|e| e.get("message"))
                .or_else(|| parsed.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", status));
            (message, Some(parsed))
        }
        Err(_) => {
            let message = if body_text.trim().is_empty() {
                format!("HTTP {}", status)
            } else {
                truncate_body(body_text)
            };
            (message, None)
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Back off to a char boundary so multibyte text never splits mid-char.
    let end = (0..=MAX)
        .rev()
        .find(|&i| body.is_char_boundary(i))
        .unwrap_or(0);
    format!("{}...[truncated]", &body[..end])
}
