use axum::extract::State;
use capturas_core::domain::media::{entities::ImageList, services::MediaService};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/list",
    tag = "image",
    summary = "List uploaded images",
    description = "Lists up to 100 images stored under the `capturas` folder.",
    responses(
        (status = 200, description = "Images listed", body = ImageList),
        (status = 500, description = "Provider error", body = ErrorResponse)
    )
)]
pub async fn list_images(State(state): State<AppState>) -> Result<Response<ImageList>, ApiError> {
    let images = state.service.list_images().await?;

    Ok(Response::OK(images))
}
