use bytes::Bytes;

/// Folder every capture is stored under on the provider side.
pub const UPLOAD_FOLDER: &str = "capturas";

pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

pub const LIST_MAX_RESULTS: u32 = 100;

/// A file received from a client, not yet validated.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    Auto,
    Image,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Auto => "auto",
            ResourceType::Image => "image",
        }
    }
}

/// One step of an incoming transformation chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transformation {
    Quality(String),
    FetchFormat(String),
}

impl Transformation {
    /// Provider URL-component form, e.g. `q_auto:good`.
    pub fn component(&self) -> String {
        match self {
            Transformation::Quality(value) => format!("q_{value}"),
            Transformation::FetchFormat(value) => format!("f_{value}"),
        }
    }

    /// Chained steps are separated by `/`.
    pub fn chain(transformations: &[Transformation]) -> String {
        transformations
            .iter()
            .map(Transformation::component)
            .collect::<Vec<_>>()
            .join("/")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOptions {
    pub folder: String,
    pub resource_type: ResourceType,
    pub transformations: Vec<Transformation>,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            folder: UPLOAD_FOLDER.to_string(),
            resource_type: ResourceType::Auto,
            transformations: vec![
                Transformation::Quality("auto:good".to_string()),
                Transformation::FetchFormat("auto".to_string()),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    pub delivery_type: String,
    pub prefix: String,
    pub max_results: u32,
    pub context: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            delivery_type: "upload".to_string(),
            prefix: UPLOAD_FOLDER.to_string(),
            max_results: LIST_MAX_RESULTS,
            context: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_upload_chain_requests_auto_quality_then_auto_format() {
        let options = UploadOptions::default();
        assert_eq!(options.folder, "capturas");
        assert_eq!(options.resource_type.as_str(), "auto");
        assert_eq!(
            Transformation::chain(&options.transformations),
            "q_auto:good/f_auto"
        );
    }

    #[test]
    fn default_listing_is_scoped_to_upload_folder() {
        let options = ListOptions::default();
        assert_eq!(options.delivery_type, "upload");
        assert_eq!(options.prefix, "capturas");
        assert_eq!(options.max_results, 100);
        assert!(options.context);
    }
}
