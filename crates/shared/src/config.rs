//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Object storage configuration.
    #[serde(default)]
    pub storage: StorageSettings,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Object storage settings.
///
/// A flat section so every field can be supplied as an environment
/// variable (`DOCDROP__STORAGE__BUCKET`, ...). Which fields are read
/// depends on `provider`; the server binary maps this section onto the
/// core storage provider at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Provider kind: `local`, `s3`, or `azure_blob`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// S3 endpoint URL.
    #[serde(default)]
    pub endpoint: String,
    /// S3 bucket name.
    #[serde(default)]
    pub bucket: String,
    /// S3 access key ID.
    #[serde(default)]
    pub access_key_id: String,
    /// S3 secret access key.
    #[serde(default)]
    pub secret_access_key: String,
    /// S3 region.
    #[serde(default = "default_region")]
    pub region: String,
    /// Azure storage account name.
    #[serde(default)]
    pub account: String,
    /// Azure storage access key.
    #[serde(default)]
    pub access_key: String,
    /// Azure container name.
    #[serde(default)]
    pub container: String,
    /// Root directory for local filesystem storage.
    #[serde(default = "default_root")]
    pub root: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            endpoint: String::new(),
            bucket: String::new(),
            access_key_id: String::new(),
            secret_access_key: String::new(),
            region: default_region(),
            account: String::new(),
            access_key: String::new(),
            container: String::new(),
            root: default_root(),
        }
    }
}

fn default_provider() -> String {
    "local".to_string()
}

fn default_region() -> String {
    "auto".to_string()
}

fn default_root() -> String {
    "./uploads".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("DOCDROP").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_defaults() {
        let server = ServerConfig::default();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
    }

    #[test]
    fn test_storage_settings_defaults() {
        let storage = StorageSettings::default();
        assert_eq!(storage.provider, "local");
        assert_eq!(storage.region, "auto");
        assert_eq!(storage.root, "./uploads");
        assert!(storage.bucket.is_empty());
    }

    #[test]
    fn test_load_with_defaults() {
        // temp_env serializes the env-touching tests.
        temp_env::with_vars(
            [
                ("DOCDROP__SERVER__PORT", None::<&str>),
                ("DOCDROP__STORAGE__PROVIDER", None),
                ("DOCDROP__STORAGE__BUCKET", None),
            ],
            || {
                let config = AppConfig::load().expect("config should load without any sources");
                assert_eq!(config.server.port, 8080);
                assert_eq!(config.storage.provider, "local");
            },
        );
    }

    #[test]
    fn test_load_from_environment() {
        temp_env::with_vars(
            [
                ("DOCDROP__SERVER__PORT", Some("9090")),
                ("DOCDROP__STORAGE__PROVIDER", Some("s3")),
                ("DOCDROP__STORAGE__BUCKET", Some("docdrop-test")),
            ],
            || {
                let config = AppConfig::load().expect("config should load from env");
                assert_eq!(config.server.port, 9090);
                assert_eq!(config.storage.provider, "s3");
                assert_eq!(config.storage.bucket, "docdrop-test");
            },
        );
    }
}
