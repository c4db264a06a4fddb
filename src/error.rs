//! Error types for document building and API response mapping.

use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

/// Fallback message when an error response carries no usable message.
pub const UNKNOWN_API_ERROR: &str = "Unknown Apple News API error";

/// Errors from the strict (validating) setters.
///
/// The plain setters accept any string; only the `try_*` variants return this.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("unknown {field} \"{value}\": expected {expected}")]
    UnknownValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Errors while reading an API response.
#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("expected a JSON object at the top level, got {actual}")]
    NotAnObject { actual: String },

    #[error("invalid timestamp in {field}: \"{value}\": {source}")]
    InvalidTimestamp {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Details of an error reported by the Apple News API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    /// Human-readable message.
    pub message: String,
    /// HTTP status of the response (0 when unknown).
    pub status: u16,
    /// Apple error code, e.g. `INVALID_DOCUMENT`.
    pub code: Option<String>,
    /// Path to the offending field, e.g. `components.0.role`.
    pub key_path: Option<String>,
}

/// An error returned by the Apple News API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{}", .0.message)]
    Rejected(ApiFailure),

    #[error("authentication failed: {}", .0.message)]
    Authentication(ApiFailure),
}

impl ApiError {
    /// Build an error from a decoded error response body.
    ///
    /// Only the first entry of `errors` is inspected. The message falls back
    /// to a top-level `message`, then to a generic text. Status 401 and 403
    /// produce [`ApiError::Authentication`].
    pub fn from_response(body: &Value, status: u16) -> Self {
        let first = body
            .get("errors")
            .and_then(|e| e.as_array())
            .and_then(|e| e.first());

        let message = first
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
            .or_else(|| body.get("message").and_then(|m| m.as_str()))
            .unwrap_or(UNKNOWN_API_ERROR)
            .to_string();

        let code = first
            .and_then(|e| e.get("code"))
            .and_then(|c| c.as_str())
            .map(String::from);

        let key_path = first.and_then(|e| e.get("keyPath")).and_then(key_path_text);

        let failure = ApiFailure {
            message,
            status,
            code,
            key_path,
        };

        tracing::debug!(
            status,
            code = failure.code.as_deref().unwrap_or("-"),
            "apple news api error"
        );

        match status {
            401 | 403 => ApiError::Authentication(failure),
            _ => ApiError::Rejected(failure),
        }
    }

    fn failure(&self) -> &ApiFailure {
        match self {
            ApiError::Rejected(f) | ApiError::Authentication(f) => f,
        }
    }

    pub fn message(&self) -> &str {
        &self.failure().message
    }

    pub fn status(&self) -> u16 {
        self.failure().status
    }

    pub fn error_code(&self) -> Option<&str> {
        self.failure().code.as_deref()
    }

    pub fn key_path(&self) -> Option<&str> {
        self.failure().key_path.as_deref()
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, ApiError::Authentication(_))
    }
}

/// `keyPath` arrives as a string or as an array of segments.
fn key_path_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(parts) => {
            let segments: Vec<String> = parts
                .iter()
                .filter_map(|p| match p {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect();
            if segments.is_empty() {
                None
            } else {
                Some(segments.join("."))
            }
        }
        _ => None,
    }
}
