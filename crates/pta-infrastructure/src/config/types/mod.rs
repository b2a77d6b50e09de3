//! Configuration types

/// Application configuration
pub mod app;
/// Embedding provider settings
pub mod embedding;
/// Logging configuration
pub mod logging;

pub use app::AppConfig;
pub use embedding::EmbeddingSettings;
pub use logging::LoggingConfig;
