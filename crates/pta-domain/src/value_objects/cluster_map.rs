//! Cluster map output value objects
//!
//! The assembled result of one pipeline run: one scatter-plot row per
//! record plus a grouping view for browsing records by topic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{AUTHORS_PREVIEW_MAX_AUTHORS, AUTHORS_PREVIEW_MAX_CHARS, NOISE_LABEL};

/// One joined row per record: 2-D coordinates, cluster label, and a
/// display-safe subset of the record metadata.
///
/// Coordinates carry no semantic meaning beyond relative grouping; callers
/// must not rely on absolute values across runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScatterPoint {
    /// Projected x coordinate
    pub x: f64,
    /// Projected y coordinate
    pub y: f64,
    /// Assigned cluster label; `-1` means noise
    pub cluster: i32,
    /// Record title ("" when absent)
    pub title: String,
    /// Publication year ("" when absent)
    pub year: String,
    /// Journal name ("" when absent)
    pub journal: String,
    /// Bounded author preview (first few authors, length-capped)
    pub authors: String,
}

/// All records sharing one cluster label.
///
/// `members` holds record positions in input order, so the group can be
/// joined back against the point list (and the original batch) without
/// duplicating metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopicGroup {
    /// Cluster label shared by the members
    pub label: i32,
    /// Number of member records
    pub size: usize,
    /// Record positions, ascending
    pub members: Vec<usize>,
}

/// The assembled output of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterMap {
    /// One row per input record, in input order
    pub points: Vec<ScatterPoint>,
    /// Non-noise groups, sorted by label ascending
    pub groups: Vec<TopicGroup>,
    /// When this map was produced
    pub generated_at: DateTime<Utc>,
}

impl ClusterMap {
    /// Number of records carried by this map.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Count of records labeled as noise.
    pub fn noise_count(&self) -> usize {
        self.points
            .iter()
            .filter(|p| p.cluster == NOISE_LABEL)
            .count()
    }
}

/// Build the bounded author preview used on scatter rows.
///
/// Takes the first [`AUTHORS_PREVIEW_MAX_AUTHORS`] authors, joins them with
/// `", "`, and truncates the result to [`AUTHORS_PREVIEW_MAX_CHARS`]
/// characters on a char boundary.
pub fn authors_preview(authors: &[String]) -> String {
    let joined = authors
        .iter()
        .take(AUTHORS_PREVIEW_MAX_AUTHORS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    match joined
        .char_indices()
        .nth(AUTHORS_PREVIEW_MAX_CHARS)
        .map(|(idx, _)| idx)
    {
        Some(cut) => joined[..cut].to_string(),
        None => joined,
    }
}
