use std::collections::BTreeMap;

use reqwest::{Client, multipart};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::instrument;

use crate::domain::{
    common::{ProviderConfig, entities::app_errors::CoreError, generate_unix_timestamp},
    media::{
        entities::{DestroyOutcome, StoredResource, UploadedResource},
        ports::MediaProviderPort,
        value_objects::{
            ImageUpload, ListOptions, ResourceType, Transformation, UploadOptions,
        },
    },
};

use super::signature::sign_params;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ResourceListing {
    #[serde(default)]
    resources: Vec<StoredResource>,
}

struct Credentials<'a> {
    cloud_name: &'a str,
    api_key: &'a str,
    api_secret: &'a str,
}

/// Media provider backed by the Cloudinary REST API.
#[derive(Debug, Clone)]
pub struct CloudinaryMediaProvider {
    client: Client,
    config: ProviderConfig,
}

impl CloudinaryMediaProvider {
    pub fn new(config: ProviderConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .user_agent(concat!("capturas/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CoreError::Provider(format!("Failed to build HTTP client: {e}")))?;

        tracing::info!(
            api_url = %config.api_url,
            cloud_name = %config.cloud_name,
            "Initializing Cloudinary client"
        );

        Ok(Self { client, config })
    }

    /// Credentials are only checked here, so the process can start without them.
    fn credentials(&self) -> Result<Credentials<'_>, CoreError> {
        if self.config.cloud_name.is_empty() {
            return Err(CoreError::Provider("Must supply cloud_name".to_string()));
        }
        if self.config.api_key.is_empty() {
            return Err(CoreError::Provider("Must supply api_key".to_string()));
        }
        if self.config.api_secret.is_empty() {
            return Err(CoreError::Provider("Must supply api_secret".to_string()));
        }

        Ok(Credentials {
            cloud_name: &self.config.cloud_name,
            api_key: &self.config.api_key,
            api_secret: &self.config.api_secret,
        })
    }

    fn endpoint(&self, cloud_name: &str, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.api_url.trim_end_matches('/'),
            cloud_name,
            path
        )
    }

    fn upload_path(options: &UploadOptions) -> String {
        format!("{}/upload", options.resource_type.as_str())
    }

    /// Listing and destroy act on the provider's default `image` resources.
    fn list_path(options: &ListOptions) -> String {
        format!(
            "resources/{}/{}",
            ResourceType::Image.as_str(),
            options.delivery_type
        )
    }

    fn destroy_path() -> String {
        format!("{}/destroy", ResourceType::Image.as_str())
    }

    async fn read_response<T: DeserializeOwned>(
        response: reqwest::Response,
        operation: &str,
    ) -> Result<T, CoreError> {
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!(error = %e, operation, "Failed to read provider response");
            CoreError::Provider(format!("Failed to read provider response: {e}"))
        })?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ErrorBody>(&body) {
                Ok(error_body) => error_body.error.message,
                Err(_) => format!("Provider returned {status}: {body}"),
            };
            tracing::error!(status = %status, operation, message = %message, "Provider error");
            return Err(CoreError::Provider(message));
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!(error = %e, operation, "Failed to parse provider response");
            CoreError::Provider(format!("Failed to parse provider response: {e}"))
        })
    }
}

impl MediaProviderPort for CloudinaryMediaProvider {
    #[instrument(skip(self, upload), fields(filename = %upload.filename, size = upload.data.len()))]
    async fn upload(
        &self,
        upload: ImageUpload,
        options: UploadOptions,
    ) -> Result<UploadedResource, CoreError> {
        let credentials = self.credentials()?;

        let mut params: BTreeMap<&str, String> = BTreeMap::new();
        params.insert("folder", options.folder.clone());
        params.insert("timestamp", generate_unix_timestamp().to_string());
        params.insert(
            "transformation",
            Transformation::chain(&options.transformations),
        );
        let signature = sign_params(&params, credentials.api_secret);

        let mut file_part = multipart::Part::stream(upload.data).file_name(upload.filename);
        if let Some(content_type) = upload.content_type.as_deref() {
            file_part = file_part.mime_str(content_type).map_err(|e| {
                CoreError::Provider(format!("Invalid content type {content_type}: {e}"))
            })?;
        }

        let mut form = multipart::Form::new()
            .part("file", file_part)
            .text("api_key", credentials.api_key.to_string())
            .text("signature", signature);
        for (key, value) in params {
            if !value.is_empty() {
                form = form.text(key, value);
            }
        }

        let url = self.endpoint(credentials.cloud_name, &Self::upload_path(&options));

        tracing::debug!(url = %url, folder = %options.folder, "Uploading file to provider");

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, url = %url, "Upload request failed");
                CoreError::Provider(format!("Upload request failed: {e}"))
            })?;

        Self::read_response(response, "upload").await
    }

    #[instrument(skip(self))]
    async fn list(&self, options: ListOptions) -> Result<Vec<StoredResource>, CoreError> {
        let credentials = self.credentials()?;

        let url = self.endpoint(credentials.cloud_name, &Self::list_path(&options));

        let response = self
            .client
            .get(&url)
            .basic_auth(credentials.api_key, Some(credentials.api_secret))
            .query(&[
                ("prefix", options.prefix.clone()),
                ("max_results", options.max_results.to_string()),
                ("context", options.context.to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, url = %url, "List request failed");
                CoreError::Provider(format!("List request failed: {e}"))
            })?;

        let listing: ResourceListing = Self::read_response(response, "list").await?;

        Ok(listing.resources)
    }

    #[instrument(skip(self))]
    async fn destroy(&self, public_id: String) -> Result<DestroyOutcome, CoreError> {
        let credentials = self.credentials()?;

        let mut params: BTreeMap<&str, String> = BTreeMap::new();
        params.insert("public_id", public_id);
        params.insert("timestamp", generate_unix_timestamp().to_string());
        let signature = sign_params(&params, credentials.api_secret);
        params.insert("api_key", credentials.api_key.to_string());
        params.insert("signature", signature);

        let url = self.endpoint(credentials.cloud_name, &Self::destroy_path());

        let response = self
            .client
            .post(&url)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, url = %url, "Destroy request failed");
                CoreError::Provider(format!("Destroy request failed: {e}"))
            })?;

        Self::read_response(response, "destroy").await
    }
}
