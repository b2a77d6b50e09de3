//! Embedding provider port

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::Embedding;

/// Text Embedding Interface
///
/// Business contract for providers that transform composite record texts
/// into semantic embeddings. The pipeline treats the provider as an opaque
/// `encode(texts) -> N x D` capability; which model backs it (local ONNX
/// inference, a remote API) is a provider concern.
///
/// # Default Implementations
///
/// `embed()` delegates to `embed_batch()` with a single item. Providers
/// only implement `embed_batch()` unless single-item calls need their own
/// path.
///
/// # Failure Semantics
///
/// A provider that cannot load its model fails construction or the first
/// batch call with [`crate::error::Error::Embedding`]; there is no degraded
/// embedding mode.
#[async_trait]
pub trait EmbeddingProvider: std::fmt::Debug + Send + Sync {
    /// Get embedding for a single text (default implementation provided)
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| crate::error::Error::embedding("No embedding returned"))
    }

    /// Get embeddings for multiple texts, one per input in input order
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Get the dimensionality of embeddings produced by this provider
    fn dimensions(&self) -> usize;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;

    /// Health check for the provider (default implementation provided)
    async fn health_check(&self) -> Result<()> {
        self.embed("health check").await?;
        Ok(())
    }
}
