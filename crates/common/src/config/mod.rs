//! Configuration management for Graphcite
//!
//! Supports loading configuration from:
//! - A `.env` file (via dotenvy)
//! - Configuration files (config/default, config/{GRAPHCITE_ENV}, config/local)
//! - Environment variables (prefixed with GRAPHCITE__)
//! - Default values

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GraphciteConfig {
    /// Analytics engine configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// What to do when two works in one corpus share an identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateIdPolicy {
    /// The last record with a given identifier wins the lookup
    #[default]
    KeepLast,
    /// Construction fails on the first repeated identifier
    Reject,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Duplicate identifier handling
    #[serde(default)]
    pub duplicate_ids: DuplicateIdPolicy,

    /// Number of entries returned by the top-centrality ranking
    #[serde(default = "default_centrality_top_n")]
    pub centrality_top_n: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub json_logging: bool,

    /// Service name attached to log output
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

// Default value functions
fn default_centrality_top_n() -> usize { 5 }
fn default_log_level() -> String { "info".to_string() }
fn default_service_name() -> String { "graphcite".to_string() }

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            duplicate_ids: DuplicateIdPolicy::default(),
            centrality_top_n: default_centrality_top_n(),
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logging: false,
            service_name: default_service_name(),
        }
    }
}

impl GraphciteConfig {
    /// Load configuration from environment and files
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("GRAPHCITE_ENV").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g. GRAPHCITE__ANALYSIS__CENTRALITY_TOP_N=10
            .add_source(
                Environment::with_prefix("GRAPHCITE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load from a specific file (format picked from the extension)
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name(path))
            .add_source(
                Environment::with_prefix("GRAPHCITE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
