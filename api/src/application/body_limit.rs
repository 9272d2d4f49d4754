use axum::{
    extract::Request,
    http::header::CONTENT_LENGTH,
    middleware::Next,
    response::Response,
};
use capturas_core::domain::media::value_objects::MAX_UPLOAD_BYTES;
use tracing::warn;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Rejects requests whose declared `Content-Length` exceeds the upload limit
/// before any handler logic runs. Streamed bodies without a length are capped
/// by `DefaultBodyLimit` instead.
pub async fn reject_oversized_body(req: Request, next: Next) -> Result<Response, ApiError> {
    let declared = req
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<usize>().ok());

    if let Some(length) = declared
        && length > MAX_UPLOAD_BYTES
    {
        warn!(
            content_length = length,
            uri = %req.uri(),
            "Request body exceeds upload limit"
        );
        return Err(ApiError::PayloadTooLarge);
    }

    Ok(next.run(req).await)
}
