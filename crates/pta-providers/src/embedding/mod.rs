//! Embedding Provider Implementations
//!
//! Converts composite record texts into dense vector embeddings.
//!
//! ## Available Providers
//!
//! | Provider | Type | Status |
//! |----------|------|--------|
//! | NullEmbeddingProvider | Testing | Complete |
//! | FastEmbedProvider | Local ML | Complete (optional) |
//!
//! ## Provider Selection Guide
//!
//! - **Unit tests / development**: `NullEmbeddingProvider` is deterministic,
//!   offline, no model weights.
//! - **Real runs**: `FastEmbedProvider` runs pure local ONNX inference
//!   (requires the `embedding-fastembed` feature, on by default).

#[cfg(feature = "embedding-fastembed")]
pub mod fastembed;
pub mod null;

// Re-export for convenience
#[cfg(feature = "embedding-fastembed")]
pub use fastembed::FastEmbedProvider;
pub use null::NullEmbeddingProvider;
