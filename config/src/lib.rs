//! # Configuration Management for bindquery
//!
//! This crate provides the configuration structures for the parameter
//! resolver.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::ResolverConfig;
//!
//! let resolver_config = ResolverConfig::new(16, "uuid".to_string());
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [resolver]
//! max_nesting_depth = 32
//! id_field = "id"
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from bindquery.toml
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./bindquery.toml";
const CONFIG_PATH_VAR: &str = "BINDQUERY_CONFIG";

/// Default maximum filter group nesting depth
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 32;

/// Default primary key field used for lookups by id
pub const DEFAULT_ID_FIELD: &str = "id";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub resolver: ResolverConfig,
}

/// Parameter resolver configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Deepest allowed filter group nesting; the top level is depth 0
    pub max_nesting_depth: usize,
    /// Field compared against when looking records up by id
    pub id_field: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            id_field: DEFAULT_ID_FIELD.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the TOML file named in the environment (or
    /// `.env`), falling back to `./bindquery.toml`
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                return Err(err.into());
            }
        }

        // Path from BINDQUERY_CONFIG
        if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            Self::from_file(&config_path)
        }
        // Try to load config from DEFAULT_CONFIG_PATH
        else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)
        }
        // Return error if neither is available
        else {
            Err(ConfigError::Invalid(format!(
                "Config path must be specified as {} in the environment or .env file, or in {} file",
                CONFIG_PATH_VAR, DEFAULT_CONFIG_PATH
            )))
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        self.resolver.validate()
    }
}

impl ResolverConfig {
    /// Create a new resolver configuration
    pub fn new(max_nesting_depth: usize, id_field: String) -> Self {
        Self {
            max_nesting_depth,
            id_field,
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_nesting_depth == 0 {
            return Err(ConfigError::Invalid(
                "Resolver max_nesting_depth must be greater than 0".to_string(),
            ));
        }
        if self.id_field.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "Resolver id_field cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
