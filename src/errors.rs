use actix_web::{error::ResponseError, HttpResponse};
use derive_more::Display;
use serde_json::json;
use thiserror::Error;

/// Failures of a gallery rendering pass and of page setup.
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("malformed token record at index {index}: {reason}")]
    Malformed { index: usize, reason: String },

    #[error("gallery container '#{0}' not found in page")]
    MissingContainer(String),

    #[error("page template error: {0}")]
    Template(String),
}

impl From<reqwest::Error> for GalleryError {
    fn from(error: reqwest::Error) -> Self {
        GalleryError::Network(error.to_string())
    }
}

#[derive(Debug, Display)]
pub enum ApiError {
    #[display(fmt = "Not found: {}", _0)]
    NotFound(String),

    #[display(fmt = "Gallery unavailable: {}", _0)]
    Unavailable(String),
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::NotFound(ref message) => HttpResponse::NotFound().json(json!({
                "error": message
            })),
            ApiError::Unavailable(ref message) => {
                HttpResponse::ServiceUnavailable().json(json!({
                    "error": format!("Gallery unavailable: {}", message)
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_unavailable_status() {
        let err = ApiError::Unavailable("network error: connection refused".to_string());
        assert_eq!(
            err.error_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_not_found_status() {
        let err = ApiError::NotFound("nope".to_string());
        assert_eq!(err.error_response().status(), StatusCode::NOT_FOUND);
    }
}
