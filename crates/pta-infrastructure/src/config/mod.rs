//! Configuration management
//!
//! TOML + environment configuration merged over defaults with Figment.

/// Configuration loader
pub mod loader;
/// Configuration types
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, EmbeddingSettings, LoggingConfig};
