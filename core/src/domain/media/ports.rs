use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

use super::entities::{DestroyOutcome, StoredResource, UploadedResource};
use super::value_objects::{ImageUpload, ListOptions, UploadOptions};

/// Port to the external media provider (Cloudinary).
#[cfg_attr(test, mockall::automock)]
pub trait MediaProviderPort: Send + Sync {
    /// Upload a file with the given folder, resource type and transformations
    fn upload(
        &self,
        upload: ImageUpload,
        options: UploadOptions,
    ) -> impl Future<Output = Result<UploadedResource, CoreError>> + Send;

    /// List stored resources matching the options
    fn list(
        &self,
        options: ListOptions,
    ) -> impl Future<Output = Result<Vec<StoredResource>, CoreError>> + Send;

    /// Destroy a resource by its public id
    fn destroy(
        &self,
        public_id: String,
    ) -> impl Future<Output = Result<DestroyOutcome, CoreError>> + Send;
}
