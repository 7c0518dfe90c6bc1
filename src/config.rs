use crate::models::Credentials;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::fmt;
use validator::Validate;

/// Google Places nearby search JSON endpoint
pub const DEFAULT_PLACES_ENDPOINT: &str =
    "https://maps.googleapis.com/maps/api/place/nearbysearch/json";

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub places: PlacesSettings,
    pub credentials: CredentialSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct PlacesSettings {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for PlacesSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String { DEFAULT_PLACES_ENDPOINT.to_string() }
fn default_timeout_secs() -> u64 { 30 }
fn default_connect_timeout_secs() -> u64 { 5 }

/// Places API keys, one per client platform
#[derive(Clone, Deserialize, Validate)]
pub struct CredentialSettings {
    #[validate(length(min = 1, message = "ios API key must not be empty"))]
    pub ios: String,
    #[validate(length(min = 1, message = "android API key must not be empty"))]
    pub android: String,
    #[validate(length(min = 1, message = "web API key must not be empty"))]
    pub web: String,
}

impl CredentialSettings {
    pub fn to_credentials(&self) -> Credentials {
        Credentials::new(&self.ios, &self.android, &self.web)
    }
}

impl fmt::Debug for CredentialSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_credentials(), f)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with NEARBY__)
    /// 5. PLACES_API_KEY_* and PLACES_ENDPOINT
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., NEARBY__CREDENTIALS__WEB -> credentials.web
            .add_source(env_source())
            .build()?;

        let settings = substitute_env_vars(settings, |name| std::env::var(name).ok())?;

        Self::finish(settings)
    }

    fn finish(settings: Config) -> Result<Self, ConfigError> {
        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings the relay cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.credentials
            .validate()
            .map_err(|e| ConfigError::Message(format!("invalid credentials: {}", e)))?;

        if self.places.endpoint.trim().is_empty() {
            return Err(ConfigError::Message("places.endpoint must not be empty".to_string()));
        }

        Ok(())
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("NEARBY")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Apply the unprefixed convenience variables on top of `settings`
fn substitute_env_vars<F>(settings: Config, lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let overrides = [
        ("PLACES_API_KEY_IOS", "credentials.ios"),
        ("PLACES_API_KEY_ANDROID", "credentials.android"),
        ("PLACES_API_KEY_WEB", "credentials.web"),
        ("PLACES_ENDPOINT", "places.endpoint"),
    ];

    let mut builder = Config::builder().add_source(settings);

    for (var, key) in overrides {
        if let Some(value) = lookup(var) {
            builder = builder.set_override(key, value)?;
        }
    }

    builder.build()
}
