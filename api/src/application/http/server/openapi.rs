use utoipa::OpenApi;

use crate::application::http::{
    health::HealthApiDoc, image::router::ImageApiDoc,
    server::api_entities::api_error::ErrorResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Capturas API",
        description = "Uploads, lists and deletes screenshots stored on Cloudinary."
    ),
    components(schemas(ErrorResponse))
)]
pub struct ApiDoc;

pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(ImageApiDoc::openapi());
    openapi.merge(HealthApiDoc::openapi());
    openapi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let openapi = api_doc();
        for path in ["/upload", "/list", "/delete/{public_id}", "/health"] {
            assert!(openapi.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
