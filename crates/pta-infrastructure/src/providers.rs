//! Embedding provider wiring
//!
//! Resolves the configured provider from the application registry and
//! caches it for the process lifetime. The model behind the provider is
//! expensive to initialize (weights may be downloaded on first use), so it
//! is constructed exactly once and reused across pipeline runs; there is
//! no teardown. Providers are `Send + Sync`, and pipeline runs allocate
//! their own intermediate buffers, so the shared instance is safe under
//! concurrent use.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::debug;

use pta_application::ports::registry::resolve_embedding_provider;
use pta_domain::error::{Error, Result};
use pta_domain::ports::EmbeddingProvider;

use crate::config::EmbeddingSettings;

static SHARED_PROVIDER: OnceCell<Arc<dyn EmbeddingProvider>> = OnceCell::new();

/// Construct a fresh provider instance from settings.
///
/// Resolution failures (unknown name, model load failure) are fatal
/// configuration errors; there is no degraded embedding mode.
pub fn build_embedding_provider(settings: &EmbeddingSettings) -> Result<Arc<dyn EmbeddingProvider>> {
    resolve_embedding_provider(&settings.to_provider_config()).map_err(Error::configuration)
}

/// The process-wide embedding provider, constructed on first use.
///
/// First construction wins: later calls return the cached instance and
/// ignore their settings argument. Call sites that need an independent
/// instance (tests, mostly) use [`build_embedding_provider`].
pub fn shared_embedding_provider(
    settings: &EmbeddingSettings,
) -> Result<Arc<dyn EmbeddingProvider>> {
    let provider = SHARED_PROVIDER.get_or_try_init(|| {
        debug!(provider = %settings.provider, "initializing shared embedding provider");
        build_embedding_provider(settings)
    })?;
    Ok(Arc::clone(provider))
}
