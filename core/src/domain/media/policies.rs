use crate::domain::common::entities::app_errors::CoreError;

pub const ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// Lowercased text after the last `.`, if there is one.
pub fn file_extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, extension)| extension.to_lowercase())
}

pub fn is_allowed_image(filename: &str) -> bool {
    file_extension(filename)
        .is_some_and(|extension| ALLOWED_EXTENSIONS.contains(&extension.as_str()))
}

pub fn ensure_uploadable(filename: &str) -> Result<(), CoreError> {
    if filename.is_empty() {
        return Err(CoreError::Validation("empty filename".to_string()));
    }

    if !is_allowed_image(filename) {
        return Err(CoreError::Validation("file type not allowed".to_string()));
    }

    Ok(())
}
