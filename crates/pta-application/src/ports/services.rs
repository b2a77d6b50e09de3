//! Application Service Interfaces
//!
//! Contracts implemented by the use-case layer and consumed by the
//! presentation layer (the CLI facade, or any future server surface).

use async_trait::async_trait;

use pta_domain::entities::Paper;
use pta_domain::error::Result;
use pta_domain::value_objects::ClusterMap;

/// Clustering pipeline contract
///
/// One call runs the whole pipeline from raw records to the assembled
/// cluster map: compose -> embed -> standardize -> select clusters /
/// project -> assemble. The pipeline is stateless across calls; every
/// invocation starts from scratch.
#[async_trait]
pub trait ClusterPipelineInterface: Send + Sync {
    /// Cluster a batch of records and lay them out in two dimensions.
    ///
    /// Output length and order match the input batch exactly. An empty
    /// batch yields an empty map without touching the embedding provider.
    async fn cluster(&self, papers: &[Paper]) -> Result<ClusterMap>;
}
