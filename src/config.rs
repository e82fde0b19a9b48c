use std::time::Duration;

use mongodb::options::ClientOptions;
use secrecy::{ExposeSecret, Secret};
use serde_aux::prelude::deserialize_number_from_string;

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other,
            )),
        }
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct DatabaseSettings {
    pub uri: Secret<String>,
    pub database_name: String,
    pub collection_name: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl DatabaseSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }

    /// Driver options for the configured connection string.
    ///
    /// Connect and server selection share one timeout so that a store which
    /// is down fails a request quickly instead of holding it for the
    /// driver's 30 second default.
    pub async fn client_options(&self) -> Result<ClientOptions, mongodb::error::Error> {
        let mut options = ClientOptions::parse(self.uri.expose_secret()).await?;
        options.connect_timeout = Some(self.timeout());
        options.server_selection_timeout = Some(self.timeout());
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        Ok(options)
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub service_name: String,
    pub deployed_at: Option<String>,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Configuration {
    pub database: DatabaseSettings,
    pub application: AppConfig,
}

pub fn get_configuration() -> Result<Configuration, config::ConfigError> {
    get_configuration_with(|key| std::env::var(key).ok())
}

/// Same as [`get_configuration`], with the unprefixed variables
/// (`APP_ENVIRONMENT`, `MONGODB_URI`, `TIMESTAMP`) read through `lookup`.
pub fn get_configuration_with(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Configuration, config::ConfigError> {
    let mut settings = config::Config::default();

    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine the current directory: {}", e))
    })?;
    let configuration_directory = base_path.join("configuration");

    // Read in default configuration
    settings.merge(config::File::from(configuration_directory.join("base")).required(true))?;

    let environment: Environment = lookup("APP_ENVIRONMENT")
        .unwrap_or_else(|| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    // Read in layer environment specific file.
    settings.merge(
        config::File::from(configuration_directory.join(environment.as_str())).required(true),
    )?;

    // e.g. `APP_APPLICATION__PORT=8000` sets `application.port`.
    settings.merge(config::Environment::with_prefix("app").separator("__"))?;

    // The conventional deployment variables always win.
    if let Some(uri) = lookup("MONGODB_URI") {
        settings.set("database.uri", uri)?;
    }
    if let Some(timestamp) = lookup("TIMESTAMP") {
        settings.set("application.deployed_at", timestamp)?;
    }

    settings.try_into()
}
