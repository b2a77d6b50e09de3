//! External Provider Ports
//!
//! Ports for external services the domain depends on. The only external
//! capability this system needs is embedding generation.

/// Embedding provider port
pub mod embedding;

pub use embedding::EmbeddingProvider;
