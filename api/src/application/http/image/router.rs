use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, post},
};
use capturas_core::domain::media::value_objects::MAX_UPLOAD_BYTES;
use utoipa::OpenApi;

use crate::application::{body_limit::reject_oversized_body, http::server::app_state::AppState};

use super::handlers::{
    delete_image::{__path_delete_image, delete_image},
    list_images::{__path_list_images, list_images},
    upload_image::{__path_upload_image, upload_image},
};

#[derive(OpenApi)]
#[openapi(paths(upload_image, list_images, delete_image))]
pub struct ImageApiDoc;

pub fn image_routes() -> Router<AppState> {
    Router::new()
        .route("/upload", post(upload_image))
        .route("/list", get(list_images))
        // Public ids carry their folder, so the identifier spans segments.
        .route("/delete/{*public_id}", delete(delete_image))
        .layer(middleware::from_fn(reject_oversized_body))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}
