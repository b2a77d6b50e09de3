//! # Paper Topic Atlas - Providers Layer
//!
//! Embedding provider implementations. Each provider implements the
//! `EmbeddingProvider` port from `pta-domain` and registers itself into
//! the `pta-application` registry via a linkme distributed slice, so
//! linking this crate is enough to make its providers resolvable by name.

/// Provider constants
pub mod constants;
/// Embedding providers
pub mod embedding;

#[cfg(feature = "embedding-fastembed")]
pub use embedding::FastEmbedProvider;
pub use embedding::NullEmbeddingProvider;
