//! Clustering Pipeline Use Case
//!
//! Orchestrates the full run: compose composite texts, embed them,
//! standardize the matrix, select cluster labels, project to 2-D, and
//! assemble the result. Holds the injected embedding provider and the
//! per-run options; carries no state between runs.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use pta_domain::entities::Paper;
use pta_domain::error::Result;
use pta_domain::ports::EmbeddingProvider;
use pta_domain::value_objects::{ClusterMap, PipelineOptions};

use crate::domain_services::{
    assemble, embeddings_to_matrix, project_2d, select_clusters, standardize_columns,
};
use crate::ports::services::ClusterPipelineInterface;

/// Clustering pipeline implementation
pub struct ClusterPipeline {
    provider: Arc<dyn EmbeddingProvider>,
    options: PipelineOptions,
}

impl ClusterPipeline {
    /// Create a new pipeline with an injected provider and run options
    pub fn new(provider: Arc<dyn EmbeddingProvider>, options: PipelineOptions) -> Self {
        Self { provider, options }
    }

    /// The options this pipeline runs with
    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }
}

#[async_trait]
impl ClusterPipelineInterface for ClusterPipeline {
    async fn cluster(&self, papers: &[Paper]) -> Result<ClusterMap> {
        if papers.is_empty() {
            return Ok(ClusterMap {
                points: Vec::new(),
                groups: Vec::new(),
                generated_at: Utc::now(),
            });
        }

        let texts = self.options.fields.compose_batch(papers);
        debug!(
            records = papers.len(),
            fields = %self.options.fields,
            provider = self.provider.provider_name(),
            "composed batch texts"
        );

        let embeddings = self.provider.embed_batch(&texts).await?;
        let mut matrix = embeddings_to_matrix(&embeddings)?;
        if self.options.standardize {
            standardize_columns(&mut matrix);
        }
        debug!(
            rows = matrix.nrows(),
            dims = matrix.ncols(),
            standardized = self.options.standardize,
            "embedded batch"
        );

        let labels = select_clusters(
            &matrix,
            self.options.min_cluster_size,
            self.options.fallback_clusters,
        )?;
        let coords = project_2d(
            &matrix,
            self.options.perplexity,
            self.options.projection_seed,
        )?;

        let map = assemble(papers, &labels, &coords)?;
        debug!(
            groups = map.groups.len(),
            noise = map.noise_count(),
            "assembled cluster map"
        );
        Ok(map)
    }
}
