//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
///
/// Every field has a default so the binaries run without any config file;
/// `config/*.toml` and `DIVVY__`-prefixed environment variables override.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Ledger store configuration.
    #[serde(default)]
    pub store: StoreConfig,
    /// Group-level defaults.
    #[serde(default)]
    pub group: GroupConfig,
}

/// Ledger store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Path of the JSON document holding all group ledgers.
    #[serde(default = "default_store_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> String {
    "divvy-ledgers.json".to_string()
}

/// Defaults applied to expense entries that omit a field.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupConfig {
    /// Currency tag recorded when input does not name one.
    #[serde(default = "default_currency")]
    pub default_currency: String,
    /// Category recorded when input does not name one.
    #[serde(default = "default_category")]
    pub default_category: String,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            default_currency: default_currency(),
            default_category: default_category(),
        }
    }
}

fn default_currency() -> String {
    "EUR".to_string()
}

fn default_category() -> String {
    "general".to_string()
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
            .add_source(config::Environment::with_prefix("DIVVY").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
