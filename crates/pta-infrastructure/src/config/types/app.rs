//! Main application configuration

use serde::{Deserialize, Serialize};

use pta_domain::value_objects::PipelineOptions;

pub use super::embedding::EmbeddingSettings;
pub use super::logging::LoggingConfig;

/// Application configuration
///
/// Merged by the loader from defaults, an optional TOML file, and
/// `PTA_`-prefixed environment variables.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Embedding provider configuration
    #[serde(default)]
    pub embedding: EmbeddingSettings,
    /// Pipeline run options
    #[serde(default)]
    pub pipeline: PipelineOptions,
}
