//! FastEmbed Local Embedding Provider
//!
//! Implements the EmbeddingProvider port using the fastembed library for
//! local embedding generation. Uses ONNX models for inference without
//! external API calls.
//!
//! The underlying model is expensive to initialize (weights may be
//! downloaded on first use) and is not `Sync`, so one actor task owns it
//! for the provider's lifetime and batches are funneled through a channel.
//! Model load failure is fatal: the provider cannot be constructed and the
//! pipeline aborts, as there is no degraded embedding mode.

use async_trait::async_trait;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use pta_domain::error::{Error, Result};
use pta_domain::ports::EmbeddingProvider;
use pta_domain::value_objects::Embedding;

use crate::constants::EMBEDDING_DIMENSION_FASTEMBED_DEFAULT;

/// Requests handled by the model-owning actor
enum FastEmbedRequest {
    EmbedBatch {
        texts: Vec<String>,
        reply: oneshot::Sender<Result<Vec<Embedding>>>,
    },
}

/// FastEmbed local embedding provider
///
/// Thread-safe handle to the actor task owning the ONNX model. Cloning the
/// handle shares the single loaded model; the model itself is initialized
/// exactly once, when the provider is constructed.
#[derive(Debug)]
pub struct FastEmbedProvider {
    sender: mpsc::Sender<FastEmbedRequest>,
    model_name: String,
}

impl FastEmbedProvider {
    /// Create a provider with the default model (AllMiniLML6V2)
    pub fn new() -> Result<Self> {
        Self::with_options(InitOptions::new(EmbeddingModel::AllMiniLML6V2))
    }

    /// Create a provider with a specific model
    pub fn with_model(model: EmbeddingModel) -> Result<Self> {
        Self::with_options(InitOptions::new(model))
    }

    /// Create a provider from fully custom initialization options
    pub fn with_options(init_options: InitOptions) -> Result<Self> {
        let model_name = format!("{:?}", init_options.model_name);
        info!(model = %model_name, "loading embedding model");

        let model = TextEmbedding::try_new(init_options).map_err(|e| {
            Error::embedding(format!("Failed to initialize embedding model: {e}"))
        })?;
        debug!(model = %model_name, "embedding model ready");

        let (sender, receiver) = mpsc::channel(16);
        let actor = FastEmbedActor {
            receiver,
            model,
            model_name: model_name.clone(),
        };
        tokio::spawn(actor.run());

        Ok(Self { sender, model_name })
    }

    /// Name of the loaded model
    pub fn model(&self) -> &str {
        &self.model_name
    }
}

#[async_trait]
impl EmbeddingProvider for FastEmbedProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        let (reply, response) = oneshot::channel();
        self.sender
            .send(FastEmbedRequest::EmbedBatch {
                texts: texts.to_vec(),
                reply,
            })
            .await
            .map_err(|_| Error::embedding("Embedding model task is gone"))?;

        response
            .await
            .unwrap_or_else(|_| Err(Error::embedding("Embedding model task dropped the request")))
    }

    fn dimensions(&self) -> usize {
        EMBEDDING_DIMENSION_FASTEMBED_DEFAULT
    }

    fn provider_name(&self) -> &str {
        "fastembed"
    }
}

impl Clone for FastEmbedProvider {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            model_name: self.model_name.clone(),
        }
    }
}

/// Actor task owning the non-Sync model
struct FastEmbedActor {
    receiver: mpsc::Receiver<FastEmbedRequest>,
    model: TextEmbedding,
    model_name: String,
}

impl FastEmbedActor {
    async fn run(mut self) {
        while let Some(request) = self.receiver.recv().await {
            match request {
                FastEmbedRequest::EmbedBatch { texts, reply } => {
                    let _ = reply.send(self.embed(texts));
                }
            }
        }
    }

    fn embed(&mut self, texts: Vec<String>) -> Result<Vec<Embedding>> {
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let vectors = self
            .model
            .embed(refs, None)
            .map_err(|e| Error::embedding(format!("Embedding batch failed: {e}")))?;

        Ok(vectors
            .into_iter()
            .map(|vector| {
                let dimensions = vector.len();
                Embedding {
                    vector,
                    model: self.model_name.clone(),
                    dimensions,
                }
            })
            .collect())
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use pta_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use pta_domain::ports::EmbeddingProvider as EmbeddingProviderPort;

/// Parse a configured model name to the fastembed model enum
pub(crate) fn parse_embedding_model(model_name: &str) -> EmbeddingModel {
    match model_name.to_lowercase().as_str() {
        "bgesmallenq" | "bge-small-en-q" => EmbeddingModel::BGESmallENV15Q,
        "bgesmallen" | "bge-small-en" => EmbeddingModel::BGESmallENV15,
        "bgebaseenq" | "bge-base-en-q" => EmbeddingModel::BGEBaseENV15Q,
        "bgebaseen" | "bge-base-en" => EmbeddingModel::BGEBaseENV15,
        "multilingual-e5-small" => EmbeddingModel::MultilingualE5Small,
        "multilingual-e5-large" => EmbeddingModel::MultilingualE5Large,
        _ => EmbeddingModel::AllMiniLML6V2, // default
    }
}

/// Factory function for creating FastEmbed provider instances.
fn fastembed_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProviderPort>, String> {
    let model_name = config
        .model
        .clone()
        .unwrap_or_else(|| "AllMiniLML6V2".to_string());
    let model = parse_embedding_model(&model_name);

    let mut init_options = InitOptions::new(model);
    if let Some(cache_dir) = &config.cache_dir {
        init_options = init_options.with_cache_dir(cache_dir.clone());
    }

    let provider = FastEmbedProvider::with_options(init_options)
        .map_err(|e| format!("Failed to create FastEmbed provider: {e}"))?;

    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static FASTEMBED_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "fastembed",
    description: "FastEmbed local provider (AllMiniLML6V2, BGESmallEN, etc.)",
    factory: fastembed_factory,
};
