use std::any::Any;

use axum::{
    http::Uri,
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use super::api_entities::api_error::ApiError;

pub async fn route_not_found(uri: Uri) -> ApiError {
    debug!(uri = %uri, "Route not found");
    ApiError::NotFound
}

pub async fn method_not_allowed(uri: Uri) -> ApiError {
    debug!(uri = %uri, "Method not allowed");
    ApiError::MethodNotAllowed
}

/// Turns a handler panic into the uniform JSON error body.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!(panic = %detail, "Handler panicked");

    ApiError::InternalServerError("internal server error".to_string()).into_response()
}
