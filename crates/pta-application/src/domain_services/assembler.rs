//! Result assembly
//!
//! Joins the parallel outputs of the pipeline stages (records, labels,
//! coordinates) into the single per-record row list and the grouping view
//! consumed by presentation layers.

use std::collections::BTreeMap;

use chrono::Utc;

use pta_domain::constants::NOISE_LABEL;
use pta_domain::entities::Paper;
use pta_domain::error::{Error, Result};
use pta_domain::value_objects::{ClusterMap, ScatterPoint, TopicGroup, authors_preview};

/// Join labels, coordinates, and record metadata into a [`ClusterMap`].
///
/// Inputs must be positionally aligned with the record batch; a length
/// mismatch means an upstream stage broke the pipeline invariant and is
/// reported as an internal error. Groups are keyed by label ascending and
/// never include the noise label.
pub fn assemble(papers: &[Paper], labels: &[i32], coords: &[(f64, f64)]) -> Result<ClusterMap> {
    if papers.len() != labels.len() || papers.len() != coords.len() {
        return Err(Error::internal(format!(
            "Misaligned pipeline outputs: {} records, {} labels, {} coordinates",
            papers.len(),
            labels.len(),
            coords.len()
        )));
    }

    let points = papers
        .iter()
        .zip(labels.iter())
        .zip(coords.iter())
        .map(|((paper, &cluster), &(x, y))| ScatterPoint {
            x,
            y,
            cluster,
            title: paper.title_or_empty().to_string(),
            year: paper.year.clone().unwrap_or_default(),
            journal: paper.journal_or_empty().to_string(),
            authors: authors_preview(paper.authors_or_empty()),
        })
        .collect();

    let mut by_label: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
    for (index, &label) in labels.iter().enumerate() {
        if label != NOISE_LABEL {
            by_label.entry(label).or_default().push(index);
        }
    }

    let groups = by_label
        .into_iter()
        .map(|(label, members)| TopicGroup {
            label,
            size: members.len(),
            members,
        })
        .collect();

    Ok(ClusterMap {
        points,
        groups,
        generated_at: Utc::now(),
    })
}
