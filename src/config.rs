use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::{env, time::Duration};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub rakuten: RakutenConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RakutenConfig {
    #[serde(default = "default_application_id")]
    pub application_id: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_category_id")]
    pub category_id: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RakutenConfig {
    fn default() -> Self {
        Self {
            application_id: default_application_id(),
            endpoint: default_endpoint(),
            category_id: default_category_id(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl RakutenConfig {
    pub fn search_config(&self) -> weekmenu_search::SearchConfig {
        weekmenu_search::SearchConfig {
            endpoint: self.endpoint.to_owned(),
            application_id: self.application_id.to_owned(),
            category_id: self.category_id.to_owned(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

fn default_application_id() -> String {
    "YOUR_API_KEY".to_string()
}

fn default_endpoint() -> String {
    weekmenu_search::DEFAULT_ENDPOINT.to_string()
}

fn default_category_id() -> String {
    "10".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

fn default_ttl_secs() -> u64 {
    86_400
}

fn default_sweep_interval_secs() -> u64 {
    600
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy variables (DATABASE_URL, RAKUTEN_API_KEY)
    /// 2. Environment variables (WEEKMENU__DATABASE__URL, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("database.url", "sqlite:weekmenu.db")?
            .set_default("database.max_connections", 5)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Missing file is not an error
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("WEEKMENU")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }
        if let Ok(api_key) = env::var("RAKUTEN_API_KEY") {
            builder = builder.set_override("rakuten.application_id", api_key)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.rakuten.endpoint.trim().is_empty() {
            return Err("Rakuten endpoint must not be empty".to_string());
        }
        if self.rakuten.timeout_secs == 0 {
            return Err("Rakuten timeout_secs must be greater than 0".to_string());
        }
        if self.session.ttl_secs == 0 {
            return Err("Session ttl_secs must be greater than 0".to_string());
        }
        if self.session.sweep_interval_secs == 0 {
            return Err("Session sweep_interval_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}
