//! Configuration management
//!
//! Read-only snapshot of deployment limits and policy consulted by instance
//! conversion, plus logging settings. Loads configuration from:
//! 1. Default values
//! 2. Configuration file (config/default.toml, config/local.toml)
//! 3. Environment variables (override)

use std::path::Path;

use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub instance: InstanceConfig,
    pub accounts: AccountsConfig,
    pub statuses: StatusesConfig,
    pub media: MediaConfig,
    pub logging: LoggingConfig,
}

/// Server identity
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Public host (e.g., "social.example.com")
    pub domain: String,
    /// Domain used in account handles; falls back to `domain` when empty
    #[serde(default)]
    pub account_domain: String,
    /// Protocol ("http" or "https")
    pub protocol: String,
}

impl ServerConfig {
    /// Get the base URL for the instance
    ///
    /// # Returns
    /// Full URL like "https://social.example.com"
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.protocol, self.domain)
    }

    /// Domain shown in account handles
    pub fn account_domain(&self) -> &str {
        if self.account_domain.is_empty() {
            &self.domain
        } else {
            &self.account_domain
        }
    }
}

/// Software metadata
#[derive(Debug, Clone, Deserialize)]
pub struct InstanceConfig {
    /// Version string reported in instance views
    pub software_version: String,
}

/// Account policy
#[derive(Debug, Clone, Deserialize)]
pub struct AccountsConfig {
    pub registration_open: bool,
    pub approval_required: bool,
    pub allow_custom_css: bool,
}

/// Status limits
#[derive(Debug, Clone, Deserialize)]
pub struct StatusesConfig {
    pub max_chars: u32,
    pub max_media_files: u32,
    pub poll_max_options: u32,
    pub poll_option_max_chars: u32,
}

/// Media limits (bytes)
#[derive(Debug, Clone, Deserialize)]
pub struct MediaConfig {
    pub image_max_size: u64,
    pub video_max_size: u64,
    pub emoji_local_max_size: u64,
    pub supported_mime_types: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// Log format: "pretty" or "json"
    pub format: String,
}

/// Configuration failure
#[derive(Debug, thiserror::Error)]
#[error("Configuration error: {0}")]
pub struct ConfigError(pub String);

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError(err.to_string())
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// # Loading Order
    /// 1. Default values
    /// 2. config/default.toml (if exists)
    /// 3. config/local.toml (if exists)
    /// 4. Environment variables (MASTOVIEW__*)
    ///
    /// # Errors
    /// Returns error if configuration is invalid
    pub fn load() -> Result<Self, ConfigError> {
        use config::{Environment, File};

        let config = Self::builder_with_defaults()?
            // Load from config/default.toml if it exists
            .add_source(File::with_name("config/default").required(false))
            // Load from config/local.toml if it exists (overrides default)
            .add_source(File::with_name("config/local").required(false))
            // Load from environment variables (MASTOVIEW__*)
            .add_source(
                Environment::with_prefix("MASTOVIEW")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("media.supported_mime_types")
                    .try_parsing(true),
            )
            .build()?;

        Self::finish(config)
    }

    /// Load configuration from an explicit file on top of the defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        use config::File;

        let config = Self::builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .build()?;

        Self::finish(config)
    }

    fn builder_with_defaults()
    -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let builder = config::Config::builder()
            .set_default("server.protocol", "https")?
            .set_default("server.account_domain", "")?
            .set_default("instance.software_version", env!("CARGO_PKG_VERSION"))?
            .set_default("accounts.registration_open", false)?
            .set_default("accounts.approval_required", true)?
            .set_default("accounts.allow_custom_css", false)?
            .set_default("statuses.max_chars", 5000)?
            .set_default("statuses.max_media_files", 6)?
            .set_default("statuses.poll_max_options", 6)?
            .set_default("statuses.poll_option_max_chars", 50)?
            .set_default("media.image_max_size", 10_485_760)?
            .set_default("media.video_max_size", 41_943_040)?
            .set_default("media.emoji_local_max_size", 51_200)?
            .set_default(
                "media.supported_mime_types",
                vec![
                    "image/jpeg",
                    "image/gif",
                    "image/png",
                    "image/webp",
                    "video/mp4",
                ],
            )?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?;
        Ok(builder)
    }

    fn finish(config: config::Config) -> Result<Self, ConfigError> {
        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !matches!(self.server.protocol.as_str(), "http" | "https") {
            return Err(ConfigError(format!(
                "server.protocol must be http or https, got {:?}",
                self.server.protocol
            )));
        }

        let host = normalized_server_host(&self.server.domain);
        if host.is_empty() {
            return Err(ConfigError("server.domain must not be empty".to_string()));
        }
        if host != self.server.domain {
            tracing::warn!(
                configured = %self.server.domain,
                normalized = %host,
                "server.domain is not a bare host name"
            );
        }

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError(format!(
                "logging.format must be pretty or json, got {:?}",
                self.logging.format
            )));
        }

        Ok(())
    }
}

fn normalized_server_host(domain: &str) -> String {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let parsed_host = url::Url::parse(&format!("http://{trimmed}"))
        .ok()
        .and_then(|url| url.host_str().map(|host| host.to_string()));
    let host = parsed_host.unwrap_or_else(|| trimmed.to_string());
    host.trim_end_matches('.').to_ascii_lowercase()
}
