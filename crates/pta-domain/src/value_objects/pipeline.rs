//! Pipeline option value objects

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_FALLBACK_CLUSTERS, DEFAULT_MIN_CLUSTER_SIZE, DEFAULT_PERPLEXITY,
    DEFAULT_PROJECTION_SEED,
};
use crate::value_objects::FieldSelection;

/// Value Object: tunable knobs of one pipeline run.
///
/// Defaults reproduce the canonical run: title+abstract+journal composites,
/// standardized embeddings, density clusters of at least 3 records with a
/// 5-group hierarchical fallback, perplexity-30 projection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipelineOptions {
    /// Which record fields feed the composite text
    #[serde(default)]
    pub fields: FieldSelection,
    /// Standardize each embedding dimension to zero mean / unit variance
    /// across the batch before clustering (skipped for batches of one)
    #[serde(default = "default_standardize")]
    pub standardize: bool,
    /// Minimum records per density cluster
    #[serde(default = "default_min_cluster_size")]
    pub min_cluster_size: usize,
    /// Group count for the hierarchical fallback, clamped to the batch size
    #[serde(default = "default_fallback_clusters")]
    pub fallback_clusters: usize,
    /// t-SNE perplexity, clamped to `batch size - 1`
    #[serde(default = "default_perplexity")]
    pub perplexity: f64,
    /// Seed for the projection layout initialization
    #[serde(default = "default_projection_seed")]
    pub projection_seed: u64,
}

fn default_standardize() -> bool {
    true
}

fn default_min_cluster_size() -> usize {
    DEFAULT_MIN_CLUSTER_SIZE
}

fn default_fallback_clusters() -> usize {
    DEFAULT_FALLBACK_CLUSTERS
}

fn default_perplexity() -> f64 {
    DEFAULT_PERPLEXITY
}

fn default_projection_seed() -> u64 {
    DEFAULT_PROJECTION_SEED
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            fields: FieldSelection::default(),
            standardize: default_standardize(),
            min_cluster_size: default_min_cluster_size(),
            fallback_clusters: default_fallback_clusters(),
            perplexity: default_perplexity(),
            projection_seed: default_projection_seed(),
        }
    }
}
