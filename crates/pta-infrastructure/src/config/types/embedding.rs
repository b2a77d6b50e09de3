//! Embedding provider configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use pta_application::ports::registry::EmbeddingProviderConfig;

/// Embedding provider settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmbeddingSettings {
    /// Provider name resolved against the registry (e.g. "fastembed", "null")
    pub provider: String,
    /// Model name, provider-specific
    pub model: Option<String>,
    /// Directory for downloaded model weights
    pub cache_dir: Option<PathBuf>,
}

impl Default for EmbeddingSettings {
    fn default() -> Self {
        Self {
            provider: "fastembed".to_string(),
            model: None,
            cache_dir: None,
        }
    }
}

impl EmbeddingSettings {
    /// Translate the settings into the registry's provider config
    pub fn to_provider_config(&self) -> EmbeddingProviderConfig {
        let mut config = EmbeddingProviderConfig::new(&self.provider);
        if let Some(model) = &self.model {
            config = config.with_model(model);
        }
        if let Some(cache_dir) = &self.cache_dir {
            config = config.with_cache_dir(cache_dir.clone());
        }
        config
    }
}
