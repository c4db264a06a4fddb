//! Loading saved API responses from files and strings.

use std::path::Path;

use serde_json::Value;

use crate::error::ResponseError;
use crate::response::ArticleResponse;

/// Parse JSON text into a value.
///
/// # Errors
///
/// Returns `ResponseError::InvalidJson` if the text isn't valid JSON.
pub fn load_json_str(content: &str) -> Result<Value, ResponseError> {
    serde_json::from_str(content).map_err(|source| ResponseError::InvalidJson { source })
}

/// Load an article response from a file path.
///
/// # Errors
///
/// Returns `ResponseError::FileNotFound` if the file doesn't exist,
/// `ResponseError::ReadError` if it can't be read, or any error from
/// [`load_response_str`].
pub fn load_response(path: &Path) -> Result<ArticleResponse, ResponseError> {
    if !path.exists() {
        return Err(ResponseError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| ResponseError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "loaded response file");
    load_response_str(&content)
}

/// Load an article response from JSON text.
///
/// # Errors
///
/// Returns `ResponseError::InvalidJson` if the text isn't valid JSON, or
/// any error from [`ArticleResponse::from_api_response`].
pub fn load_response_str(content: &str) -> Result<ArticleResponse, ResponseError> {
    let value = load_json_str(content)?;
    ArticleResponse::from_api_response(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_response_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"data": {{"id": "a1", "title": "Hello"}}}}"#).unwrap();

        let article = load_response(file.path()).unwrap();
        assert_eq!(article.id, "a1");
        assert_eq!(article.title, "Hello");
    }

    #[test]
    fn load_response_file_not_found() {
        let result = load_response(Path::new("/nonexistent/response.json"));
        assert!(matches!(result, Err(ResponseError::FileNotFound { .. })));
    }

    #[test]
    fn load_response_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid json").unwrap();

        let result = load_response(file.path());
        assert!(matches!(result, Err(ResponseError::InvalidJson { .. })));
    }

    #[test]
    fn load_response_str_valid() {
        let article = load_response_str(r#"{"id": "a2", "state": "LIVE"}"#).unwrap();
        assert_eq!(article.id, "a2");
        assert!(article.state.is_some_and(|s| s.is_live()));
    }

    #[test]
    fn load_response_str_not_object() {
        let result = load_response_str("42");
        assert!(matches!(result, Err(ResponseError::NotAnObject { .. })));
    }

    #[test]
    fn load_json_str_invalid() {
        let result = load_json_str("{");
        assert!(matches!(result, Err(ResponseError::InvalidJson { .. })));
    }
}
