//! # Paper Topic Atlas - Infrastructure Layer
//!
//! Wires the outer world to the pipeline: configuration loading (defaults
//! -> TOML -> environment), structured logging bootstrap, error-context
//! helpers, and the process-wide cached embedding provider.

/// Configuration management
pub mod config;
/// Infrastructure constants
pub mod constants;
/// Error context extensions
pub mod error_ext;
/// Logging bootstrap
pub mod logging;
/// Provider wiring
pub mod providers;

pub use config::{AppConfig, ConfigLoader, EmbeddingSettings, LoggingConfig};
pub use providers::{build_embedding_provider, shared_embedding_provider};
