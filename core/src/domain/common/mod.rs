use chrono::Utc;

pub mod entities;
pub mod services;

pub const DEFAULT_PROVIDER_API_URL: &str = "https://api.cloudinary.com/v1_1";

#[derive(Clone, Debug)]
pub struct CapturasConfig {
    pub provider: ProviderConfig,
}

/// Credentials for the media provider. Values may be empty: they are only
/// checked when a provider call is made.
#[derive(Clone, Debug)]
pub struct ProviderConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub api_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            cloud_name: String::new(),
            api_key: String::new(),
            api_secret: String::new(),
            api_url: DEFAULT_PROVIDER_API_URL.to_string(),
        }
    }
}

pub fn generate_unix_timestamp() -> i64 {
    Utc::now().timestamp()
}
