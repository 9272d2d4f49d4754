use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Provider answer to an upload call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadedResource {
    pub public_id: String,
    pub secure_url: String,
    pub created_at: String,
}

/// One resource as returned by the provider listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoredResource {
    pub public_id: String,
    pub secure_url: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub format: String,
}

/// Provider answer to a destroy call, `result` is `"ok"` on success.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DestroyOutcome {
    pub result: String,
}

impl DestroyOutcome {
    pub fn is_ok(&self) -> bool {
        self.result == "ok"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UploadResult {
    pub success: bool,
    pub url: String,
    pub public_id: String,
    pub created_at: String,
}

impl From<UploadedResource> for UploadResult {
    fn from(resource: UploadedResource) -> Self {
        Self {
            success: true,
            url: resource.secure_url,
            public_id: resource.public_id,
            created_at: resource.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImageSummary {
    pub url: String,
    pub public_id: String,
    pub created_at: String,
    pub format: String,
}

impl From<StoredResource> for ImageSummary {
    fn from(resource: StoredResource) -> Self {
        Self {
            url: resource.secure_url,
            public_id: resource.public_id,
            created_at: resource.created_at,
            format: resource.format,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImageList {
    pub success: bool,
    pub images: Vec<ImageSummary>,
    pub total: usize,
}

impl ImageList {
    pub fn new(images: Vec<ImageSummary>) -> Self {
        Self {
            success: true,
            total: images.len(),
            images,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeleteResult {
    pub success: bool,
    pub message: String,
}
