use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Top-level error type for the entire application
#[derive(Debug)]
pub enum AppError {
    SourceFetch { url: String, cause: String },

    MalformedSource {
        source: &'static str,
        expected_key: &'static str,
    },

    LocalFallback(String),

    Config(String),

    Internal(String),

    BadRequest(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::SourceFetch { url, cause } => {
                write!(f, "Failed to fetch {url}: {cause}")
            }
            AppError::MalformedSource {
                source,
                expected_key,
            } => write!(
                f,
                "{source} did not return expected JSON (array or object with \"{expected_key}\" key)"
            ),
            AppError::LocalFallback(msg) => write!(f, "Failed to load JSON files: {msg}"),
            AppError::Config(msg) => write!(f, "Configuration error: {msg}"),
            AppError::Internal(msg) => write!(f, "Internal error: {msg}"),
            AppError::BadRequest(msg) => write!(f, "Bad request: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

/// API error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self {
            AppError::SourceFetch { .. } => (StatusCode::BAD_REQUEST, "SOURCE_FETCH_FAILED"),
            AppError::MalformedSource { .. } => (StatusCode::BAD_REQUEST, "MALFORMED_SOURCE"),
            AppError::LocalFallback(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "LOCAL_FALLBACK_FAILED")
            }
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            AppError::Config(_) | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
            error_code: error_code.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal(format!("Error converting: {:?}", error))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        let url = error
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "<unknown url>".to_string());
        AppError::SourceFetch {
            url,
            cause: error.to_string(),
        }
    }
}

/// Result type alias for the application
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_source_message() {
        let err = AppError::MalformedSource {
            source: "users_url",
            expected_key: "users",
        };
        assert_eq!(
            err.to_string(),
            "users_url did not return expected JSON (array or object with \"users\" key)"
        );
    }

    #[test]
    fn test_local_fallback_message() {
        let err = AppError::LocalFallback("missing file".to_string());
        assert_eq!(err.to_string(), "Failed to load JSON files: missing file");
    }
}
