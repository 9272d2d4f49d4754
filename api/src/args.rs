use capturas_core::domain::common::{CapturasConfig, DEFAULT_PROVIDER_API_URL, ProviderConfig};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "capturas-api", version, about = "Image upload gateway backed by Cloudinary")]
pub struct Args {
    #[command(flatten)]
    pub provider: ProviderArgs,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ProviderArgs {
    #[arg(long = "cloud-name", env = "CLOUD_NAME", default_value = "")]
    pub cloud_name: String,

    #[arg(long = "api-key", env = "API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    #[arg(
        long = "api-secret",
        env = "API_SECRET",
        default_value = "",
        hide_env_values = true
    )]
    pub api_secret: String,

    #[arg(long = "provider-api-url", env = "PROVIDER_API_URL", default_value = DEFAULT_PROVIDER_API_URL)]
    pub api_url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Comma separated list of origins, `*` allows any
    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<&Args> for CapturasConfig {
    fn from(args: &Args) -> Self {
        CapturasConfig {
            provider: ProviderConfig {
                cloud_name: args.provider.cloud_name.clone(),
                api_key: args.provider.api_key.clone(),
                api_secret: args.provider.api_secret.clone(),
                api_url: args.provider.api_url.clone(),
            },
        }
    }
}
