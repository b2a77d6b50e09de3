//! Domain layer constants
//!
//! Contains constants that are part of the pipeline semantics and are used
//! by the application layer. Infrastructure-specific constants remain in
//! `pta-infrastructure`.

// ============================================================================
// CLUSTER SELECTION CONSTANTS
// ============================================================================

/// Reserved cluster label meaning "noise / unclustered"
///
/// Never offered as a browsable group.
pub const NOISE_LABEL: i32 = -1;

/// Default minimum number of records required to form a density cluster
pub const DEFAULT_MIN_CLUSTER_SIZE: usize = 3;

/// Ascending density-radius candidates swept during cluster selection
pub const DBSCAN_EPS_SWEEP: &[f64] = &[0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9];

/// Number of groups the hierarchical fallback produces
///
/// Clamped to the batch size at the call site.
pub const DEFAULT_FALLBACK_CLUSTERS: usize = 5;

/// A density sweep whose best candidate has fewer clusters than this is
/// considered degenerate and triggers the hierarchical fallback
pub const MIN_USEFUL_CLUSTERS: usize = 2;

// ============================================================================
// PROJECTION CONSTANTS
// ============================================================================

/// Default t-SNE perplexity, clamped to `batch size - 1` for small batches
pub const DEFAULT_PERPLEXITY: f64 = 30.0;

/// Default seed for the projection layout initialization
pub const DEFAULT_PROJECTION_SEED: u64 = 42;

// ============================================================================
// DISPLAY CONSTANTS
// ============================================================================

/// Maximum number of authors included in a display preview
pub const AUTHORS_PREVIEW_MAX_AUTHORS: usize = 3;

/// Maximum character length of the joined author preview
pub const AUTHORS_PREVIEW_MAX_CHARS: usize = 100;
