//! Provider Registries
//!
//! linkme-based auto-registration for provider implementations. The
//! provider crates submit entries at compile time; infrastructure resolves
//! them by configured name.

/// Embedding provider registry
pub mod embedding;

pub use embedding::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
    list_embedding_providers, resolve_embedding_provider,
};
