use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use capturas_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("file too large, maximum is 16MB")]
    PayloadTooLarge,

    #[error("route not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    InternalServerError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(message) => ApiError::BadRequest(message),
            e @ CoreError::DeletionFailed { .. } => ApiError::BadRequest(e.to_string()),
            // Provider messages are passed through as-is.
            CoreError::Provider(message) => ApiError::InternalServerError(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_status_codes() {
        let cases = [
            (
                CoreError::Validation("file type not allowed".to_string()),
                StatusCode::BAD_REQUEST,
                "file type not allowed",
            ),
            (
                CoreError::DeletionFailed {
                    public_id: "capturas/xyz123".to_string(),
                    result: "not found".to_string(),
                },
                StatusCode::BAD_REQUEST,
                "could not delete image",
            ),
            (
                CoreError::Provider("Resource not found".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "Resource not found",
            ),
        ];

        for (core, status, message) in cases {
            let api = ApiError::from(core);
            assert_eq!(api.status(), status);
            assert_eq!(api.to_string(), message);
        }
    }

    #[test]
    fn into_response_keeps_status() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::PayloadTooLarge.into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
