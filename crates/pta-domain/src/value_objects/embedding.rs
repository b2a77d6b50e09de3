//! Semantic Embedding Value Objects
//!
//! Value objects representing semantic embeddings produced from composite
//! record texts.

use serde::{Deserialize, Serialize};

/// Value Object: Semantic Text Embedding
///
/// A fixed-length vector embedding of one composite record text. The
/// dimensionality is fixed by the model that produced the vector; all
/// embeddings of one batch share it.
///
/// ## Business Rules
///
/// - Vector length equals `dimensions`
/// - Model name identifies the embedding generation method
///
/// ## Example
///
/// ```rust
/// use pta_domain::value_objects::Embedding;
///
/// let embedding = Embedding {
///     vector: vec![0.1, 0.2, 0.3, 0.4, 0.5],
///     model: "AllMiniLML6V2".to_string(),
///     dimensions: 5,
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}
