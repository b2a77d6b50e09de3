//! End-to-end pipeline tests against the deterministic null provider

use std::sync::Arc;

use pta_application::use_cases::ClusterPipeline;
use pta_application::ports::ClusterPipelineInterface;
use pta_domain::constants::NOISE_LABEL;
use pta_domain::entities::Paper;
use pta_domain::value_objects::{FieldSelection, PipelineOptions};
use pta_providers::NullEmbeddingProvider;

fn paper(title: &str, abstract_text: &str) -> Paper {
    Paper {
        title: Some(title.to_string()),
        abstract_text: Some(abstract_text.to_string()),
        journal: Some("Test Journal".to_string()),
        year: Some("2023".to_string()),
        authors: Some(vec!["X. Author".to_string()]),
    }
}

fn pipeline() -> ClusterPipeline {
    ClusterPipeline::new(
        Arc::new(NullEmbeddingProvider::new()),
        PipelineOptions::default(),
    )
}

#[tokio::test]
async fn test_one_point_per_record_in_input_order() {
    let papers: Vec<Paper> = (0..6)
        .map(|i| paper(&format!("Title {i}"), &format!("Abstract {i}")))
        .collect();

    let map = pipeline().cluster(&papers).await.unwrap();

    assert_eq!(map.points.len(), papers.len());
    for (i, point) in map.points.iter().enumerate() {
        assert_eq!(point.title, format!("Title {i}"));
        assert!(point.x.is_finite() && point.y.is_finite());
    }
}

#[tokio::test]
async fn test_grouping_invariants_hold() {
    let papers: Vec<Paper> = (0..8)
        .map(|i| paper(&format!("Paper {i}"), "shared topic text"))
        .collect();

    let map = pipeline().cluster(&papers).await.unwrap();

    // Noise never appears as a group; sizes account for every non-noise record.
    assert!(map.groups.iter().all(|g| g.label != NOISE_LABEL));
    let grouped: usize = map.groups.iter().map(|g| g.size).sum();
    assert_eq!(grouped, map.len() - map.noise_count());

    // Labels ascend and every member index is valid.
    let labels: Vec<i32> = map.groups.iter().map(|g| g.label).collect();
    let mut sorted = labels.clone();
    sorted.sort_unstable();
    assert_eq!(labels, sorted);
    assert!(
        map.groups
            .iter()
            .flat_map(|g| g.members.iter())
            .all(|&m| m < map.len())
    );
}

#[tokio::test]
async fn test_empty_batch_short_circuits() {
    let map = pipeline().cluster(&[]).await.unwrap();
    assert!(map.is_empty());
    assert!(map.groups.is_empty());
}

#[tokio::test]
async fn test_single_record_batch() {
    let map = pipeline().cluster(&[paper("Solo", "only one")]).await.unwrap();
    assert_eq!(map.points.len(), 1);
    assert_eq!(map.points[0].cluster, 0);
    assert_eq!(map.points[0].x, 0.0);
    assert_eq!(map.points[0].y, 0.0);
    assert_eq!(map.groups.len(), 1);
}

#[tokio::test]
async fn test_two_record_batch_succeeds_via_perplexity_clamp() {
    let papers = vec![paper("One", "alpha"), paper("Two", "beta")];
    let map = pipeline().cluster(&papers).await.unwrap();
    assert_eq!(map.points.len(), 2);
    assert!(map.points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
}

#[tokio::test]
async fn test_field_selection_reaches_the_provider() {
    // With TitleOnly, records differing only in abstract embed identically,
    // so their labels must coincide.
    let options = PipelineOptions {
        fields: FieldSelection::TitleOnly,
        ..PipelineOptions::default()
    };
    let mut papers = vec![
        paper("Same title", "first abstract"),
        paper("Same title", "second abstract"),
    ];
    papers.extend((0..5).map(|i| paper(&format!("Distinct {i}"), "filler")));
    let pipeline = ClusterPipeline::new(Arc::new(NullEmbeddingProvider::new()), options);
    let map = pipeline.cluster(&papers).await.unwrap();
    assert_eq!(map.points[0].cluster, map.points[1].cluster);
}

#[tokio::test]
async fn test_cluster_labels_are_deterministic() {
    let papers: Vec<Paper> = (0..5)
        .map(|i| paper(&format!("T{i}"), &format!("A{i}")))
        .collect();

    let first = pipeline().cluster(&papers).await.unwrap();
    let second = pipeline().cluster(&papers).await.unwrap();

    let first_labels: Vec<i32> = first.points.iter().map(|p| p.cluster).collect();
    let second_labels: Vec<i32> = second.points.iter().map(|p| p.cluster).collect();
    assert_eq!(first_labels, second_labels);

    // Seeded projection makes the layout reproducible too.
    for (a, b) in first.points.iter().zip(second.points.iter()) {
        assert_eq!(a.x, b.x);
        assert_eq!(a.y, b.y);
    }
}
