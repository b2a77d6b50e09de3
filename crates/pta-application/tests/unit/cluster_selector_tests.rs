//! Unit tests for adaptive cluster selection

use ndarray::{Array2, array};
use pta_application::domain_services::select_clusters;
use pta_domain::constants::NOISE_LABEL;

/// Two dense groups of four points each, separated well beyond the sweep.
fn separated_blobs() -> Array2<f64> {
    array![
        [0.00, 0.00],
        [0.05, 0.00],
        [0.00, 0.05],
        [0.05, 0.05],
        [10.00, 10.00],
        [10.05, 10.00],
        [10.00, 10.05],
        [10.05, 10.05],
    ]
}

fn distinct_labels(labels: &[i32]) -> Vec<i32> {
    let mut distinct: Vec<i32> = labels.iter().copied().filter(|&l| l != NOISE_LABEL).collect();
    distinct.sort_unstable();
    distinct.dedup();
    distinct
}

#[test]
fn test_density_sweep_finds_two_blobs() {
    let labels = select_clusters(&separated_blobs(), 3, 5).unwrap();
    assert_eq!(labels.len(), 8);
    assert!(labels.iter().all(|&l| l != NOISE_LABEL));
    assert_eq!(distinct_labels(&labels).len(), 2);

    // All members of a blob share one label, and the blobs differ.
    assert!(labels[..4].iter().all(|&l| l == labels[0]));
    assert!(labels[4..].iter().all(|&l| l == labels[4]));
    assert_ne!(labels[0], labels[4]);
}

#[test]
fn test_selection_is_deterministic() {
    let matrix = separated_blobs();
    let first = select_clusters(&matrix, 3, 5).unwrap();
    let second = select_clusters(&matrix, 3, 5).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_strict_improvement_keeps_the_finer_assignment() {
    // Blobs 0.6 apart: small radii separate them, large radii merge them
    // into a single cluster. The merged (1-cluster) result never replaces
    // the earlier 2-cluster one because updates require strict improvement.
    let matrix = array![
        [0.00, 0.00],
        [0.05, 0.00],
        [0.00, 0.05],
        [0.05, 0.05],
        [0.60, 0.00],
        [0.65, 0.00],
        [0.60, 0.05],
        [0.65, 0.05],
    ];
    let labels = select_clusters(&matrix, 3, 5).unwrap();
    assert_eq!(distinct_labels(&labels).len(), 2);
}

#[test]
fn test_single_blob_falls_back_to_hierarchy() {
    // One dense group: every radius yields a single cluster, which is
    // degenerate, so Ward fallback with min(5, N) groups kicks in.
    let matrix = array![
        [0.00, 0.00],
        [0.05, 0.00],
        [0.00, 0.05],
        [0.05, 0.05],
    ];
    let labels = select_clusters(&matrix, 3, 5).unwrap();
    assert_eq!(labels.len(), 4);
    assert!(labels.iter().all(|&l| l != NOISE_LABEL));
    // min(5, 4) = 4 groups.
    assert_eq!(distinct_labels(&labels).len(), 4);
}

#[test]
fn test_all_sparse_falls_back_to_hierarchy() {
    // No point has enough neighbors at any swept radius: zero clusters
    // everywhere forces the fallback.
    let matrix = array![[0.0, 0.0], [5.0, 0.0], [0.0, 5.0]];
    let labels = select_clusters(&matrix, 3, 5).unwrap();
    assert_eq!(labels, vec![0, 1, 2]);
}

#[test]
fn test_fallback_count_is_clamped_to_batch_size() {
    let matrix = array![[0.0, 0.0], [0.1, 0.1]];
    let labels = select_clusters(&matrix, 3, 5).unwrap();
    // min(5, 2) = 2 groups, no noise.
    assert_eq!(distinct_labels(&labels).len(), 2);
    assert!(labels.iter().all(|&l| l != NOISE_LABEL));
}

#[test]
fn test_empty_matrix_yields_no_labels() {
    let matrix = Array2::<f64>::zeros((0, 4));
    assert!(select_clusters(&matrix, 3, 5).unwrap().is_empty());
}

#[test]
fn test_min_cluster_size_below_two_is_rejected() {
    let matrix = array![[0.0, 0.0], [1.0, 1.0]];
    let err = select_clusters(&matrix, 1, 5).unwrap_err();
    assert!(err.to_string().contains("min_cluster_size"));
}

#[test]
fn test_zero_fallback_clusters_is_rejected() {
    let matrix = array![[0.0, 0.0], [1.0, 1.0]];
    let err = select_clusters(&matrix, 3, 0).unwrap_err();
    assert!(err.to_string().contains("fallback_clusters"));
}
