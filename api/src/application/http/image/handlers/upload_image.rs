use axum::{
    extract::{
        Multipart, State,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
};
use capturas_core::domain::media::{
    entities::UploadResult, services::MediaService, value_objects::ImageUpload,
};
use tracing::{error, warn};

use crate::application::http::{
    image::validators::UploadImageForm,
    server::{
        api_entities::{
            api_error::{ApiError, ErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

fn multipart_error(e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        warn!("Multipart body exceeds upload limit");
        return ApiError::PayloadTooLarge;
    }

    error!("Failed to read multipart body: {}", e);
    ApiError::BadRequest(format!("failed to read multipart body: {}", e.body_text()))
}

#[utoipa::path(
    post,
    path = "/upload",
    tag = "image",
    summary = "Upload an image",
    description = "Uploads the `file` field to the media provider under the `capturas` folder, with automatic quality and format.",
    request_body(content = UploadImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image uploaded", body = UploadResult),
        (status = 400, description = "Missing file, empty filename or file type not allowed", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Provider error", body = ErrorResponse)
    ),
)]
pub async fn upload_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response<UploadResult>, ApiError> {
    let mut multipart = multipart.map_err(|e| {
        warn!("Upload request is not a multipart form: {}", e);
        ApiError::BadRequest("no file found in request".to_string())
    })?;

    let mut upload: Option<ImageUpload> = None;

    // The whole body is read before validating so an oversized request is
    // reported as such whatever its filename.
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some("file") || upload.is_some() {
            continue;
        }

        // A `file` field without a filename is a plain text field.
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map_err(multipart_error)?;

        upload = Some(ImageUpload {
            filename,
            content_type,
            data,
        });
    }

    let upload = upload.ok_or_else(|| {
        warn!("Upload request without a file field");
        ApiError::BadRequest("no file found in request".to_string())
    })?;

    let result = state.service.upload_image(upload).await?;

    Ok(Response::OK(result))
}
