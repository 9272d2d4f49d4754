use axum::extract::{Path, State};
use capturas_core::domain::media::{entities::DeleteResult, services::MediaService};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/delete/{public_id}",
    tag = "image",
    summary = "Delete an image",
    description = "Destroys an image on the provider. The public id may contain `/`.",
    params(
        ("public_id" = String, Path, description = "Provider public id, e.g. capturas/xyz123"),
    ),
    responses(
        (status = 200, description = "Image deleted", body = DeleteResult),
        (status = 400, description = "Provider did not confirm the deletion", body = ErrorResponse),
        (status = 500, description = "Provider error", body = ErrorResponse)
    )
)]
pub async fn delete_image(
    Path(public_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<DeleteResult>, ApiError> {
    let result = state.service.delete_image(public_id).await?;

    Ok(Response::OK(result))
}
