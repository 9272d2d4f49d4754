use std::future::Future;

use tracing::instrument;

use crate::domain::common::{entities::app_errors::CoreError, services::Service};

use super::{
    entities::{DeleteResult, ImageList, ImageSummary, UploadResult},
    policies::ensure_uploadable,
    ports::MediaProviderPort,
    value_objects::{ImageUpload, ListOptions, UploadOptions},
};

/// Service trait for image operations
#[cfg_attr(test, mockall::automock)]
pub trait MediaService: Send + Sync {
    /// Validate a file and upload it to the provider
    fn upload_image(
        &self,
        upload: ImageUpload,
    ) -> impl Future<Output = Result<UploadResult, CoreError>> + Send;

    /// List the images stored under the capture folder
    fn list_images(&self) -> impl Future<Output = Result<ImageList, CoreError>> + Send;

    /// Delete an image by public id
    fn delete_image(
        &self,
        public_id: String,
    ) -> impl Future<Output = Result<DeleteResult, CoreError>> + Send;
}

impl<MP> MediaService for Service<MP>
where
    MP: MediaProviderPort,
{
    #[instrument(skip(self, upload), fields(filename = %upload.filename, size = upload.data.len()))]
    async fn upload_image(&self, upload: ImageUpload) -> Result<UploadResult, CoreError> {
        if let Err(e) = ensure_uploadable(&upload.filename) {
            tracing::warn!(error = %e, "Upload rejected");
            return Err(e);
        }

        let filename = upload.filename.clone();
        let resource = self
            .media_provider
            .upload(upload, UploadOptions::default())
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    operation = "upload",
                    filename = %filename,
                    "Failed to upload image"
                );
                e
            })?;

        tracing::info!(public_id = %resource.public_id, "Image uploaded successfully");

        Ok(UploadResult::from(resource))
    }

    #[instrument(skip(self))]
    async fn list_images(&self) -> Result<ImageList, CoreError> {
        let resources = self
            .media_provider
            .list(ListOptions::default())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, operation = "list", "Failed to list images");
                e
            })?;

        let images = resources
            .into_iter()
            .map(ImageSummary::from)
            .collect::<Vec<_>>();

        tracing::debug!(total = images.len(), "Images listed");

        Ok(ImageList::new(images))
    }

    #[instrument(skip(self))]
    async fn delete_image(&self, public_id: String) -> Result<DeleteResult, CoreError> {
        let outcome = self
            .media_provider
            .destroy(public_id.clone())
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    operation = "delete",
                    public_id = %public_id,
                    "Failed to delete image"
                );
                e
            })?;

        if !outcome.is_ok() {
            tracing::warn!(
                public_id = %public_id,
                result = %outcome.result,
                "Provider did not confirm deletion"
            );
            return Err(CoreError::DeletionFailed {
                public_id,
                result: outcome.result,
            });
        }

        tracing::info!(public_id = %public_id, "Image deleted");

        Ok(DeleteResult {
            success: true,
            message: "image deleted".to_string(),
        })
    }
}
