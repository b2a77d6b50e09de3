//! Adaptive cluster selection
//!
//! Sweeps a fixed ascending sequence of density radii through DBSCAN and
//! keeps the assignment with the most clusters; when even the best sweep
//! result is degenerate (fewer than two clusters), falls back to
//! deterministic hierarchical clustering into a fixed group count.

use linfa::DatasetBase;
use linfa::traits::Transformer;
use linfa_clustering::Dbscan;
use ndarray::Array2;
use tracing::debug;

use pta_domain::constants::{DBSCAN_EPS_SWEEP, MIN_USEFUL_CLUSTERS, NOISE_LABEL};
use pta_domain::error::{Error, Result};

use super::hierarchy::ward_cluster;

/// Assign a cluster label to every row of the embedding matrix.
///
/// The sweep iterates [`DBSCAN_EPS_SWEEP`] in ascending order and updates
/// the best candidate only on a strictly greater non-noise cluster count,
/// so the first radius achieving a given maximum wins. A best candidate
/// with fewer than [`MIN_USEFUL_CLUSTERS`] clusters is discarded in favor
/// of Ward fallback into `min(fallback_clusters, N)` groups.
///
/// Returns one label per row; `-1` marks noise (density path only; the
/// fallback labels every record). Deterministic for identical input.
pub fn select_clusters(
    matrix: &Array2<f64>,
    min_cluster_size: usize,
    fallback_clusters: usize,
) -> Result<Vec<i32>> {
    let n = matrix.nrows();
    if n == 0 {
        return Ok(Vec::new());
    }
    if min_cluster_size < 2 {
        return Err(Error::invalid_argument(format!(
            "min_cluster_size must be at least 2, got {min_cluster_size}"
        )));
    }
    if fallback_clusters == 0 {
        return Err(Error::invalid_argument(
            "fallback_clusters must be at least 1",
        ));
    }

    let mut best_n_clusters = 0usize;
    let mut best_labels: Option<Vec<i32>> = None;

    for &eps in DBSCAN_EPS_SWEEP {
        let labels = dbscan_labels(matrix, min_cluster_size, eps)?;
        let n_clusters = count_clusters(&labels);
        debug!(eps, n_clusters, "density sweep step");

        if n_clusters > best_n_clusters {
            best_n_clusters = n_clusters;
            best_labels = Some(labels);
        }
    }

    match best_labels {
        Some(labels) if best_n_clusters >= MIN_USEFUL_CLUSTERS => {
            debug!(best_n_clusters, "density sweep selected");
            Ok(labels)
        }
        _ => {
            let k = fallback_clusters.min(n);
            debug!(
                best_n_clusters,
                k, "density sweep degenerate, using hierarchical fallback"
            );
            Ok(ward_cluster(matrix, k))
        }
    }
}

/// Run one DBSCAN pass and map its `Option<usize>` targets onto the
/// label convention (`None` -> [`NOISE_LABEL`]).
fn dbscan_labels(matrix: &Array2<f64>, min_points: usize, eps: f64) -> Result<Vec<i32>> {
    let dataset = DatasetBase::from(matrix.clone());

    let assigned = Dbscan::params(min_points)
        .tolerance(eps)
        .transform(dataset)
        .map_err(|e| Error::clustering(format!("DBSCAN failed at eps {eps}: {e:?}")))?;

    Ok(assigned
        .targets()
        .iter()
        .map(|label| label.map_or(NOISE_LABEL, |c| c as i32))
        .collect())
}

/// Count distinct non-noise labels.
fn count_clusters(labels: &[i32]) -> usize {
    let mut distinct: Vec<i32> = labels
        .iter()
        .copied()
        .filter(|&l| l != NOISE_LABEL)
        .collect();
    distinct.sort_unstable();
    distinct.dedup();
    distinct.len()
}
