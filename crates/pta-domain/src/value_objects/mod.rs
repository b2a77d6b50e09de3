//! Domain Value Objects
//!
//! Immutable values derived from records: composite texts, embeddings,
//! pipeline options, and the assembled cluster map.

/// Cluster map output types
pub mod cluster_map;
/// Composite text policy
pub mod composite;
/// Embedding value object
pub mod embedding;
/// Pipeline options
pub mod pipeline;

pub use cluster_map::{ClusterMap, ScatterPoint, TopicGroup, authors_preview};
pub use composite::FieldSelection;
pub use embedding::Embedding;
pub use pipeline::PipelineOptions;
