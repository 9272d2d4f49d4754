use utoipa::ToSchema;

/// Multipart form accepted by the upload endpoint.
#[derive(Debug, ToSchema)]
pub struct UploadImageForm {
    /// Image file with a png, jpg, jpeg, gif or webp extension, at most 16MB
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
