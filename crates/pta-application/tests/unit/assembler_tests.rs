//! Unit tests for result assembly

use pta_application::domain_services::assemble;
use pta_domain::constants::NOISE_LABEL;
use pta_domain::entities::Paper;

fn paper(title: &str) -> Paper {
    Paper {
        title: Some(title.to_string()),
        abstract_text: None,
        journal: Some("Journal of Tests".to_string()),
        year: Some("2024".to_string()),
        authors: Some(vec![
            "A. One".to_string(),
            "B. Two".to_string(),
            "C. Three".to_string(),
            "D. Four".to_string(),
        ]),
    }
}

fn coords(n: usize) -> Vec<(f64, f64)> {
    (0..n).map(|i| (i as f64, -(i as f64))).collect()
}

#[test]
fn test_rows_carry_aligned_metadata() {
    let papers = vec![paper("First"), paper("Second")];
    let labels = vec![0, 1];
    let map = assemble(&papers, &labels, &coords(2)).unwrap();

    assert_eq!(map.points.len(), 2);
    assert_eq!(map.points[0].title, "First");
    assert_eq!(map.points[0].cluster, 0);
    assert_eq!(map.points[0].x, 0.0);
    assert_eq!(map.points[1].title, "Second");
    assert_eq!(map.points[1].cluster, 1);
    assert_eq!(map.points[1].y, -1.0);
    assert_eq!(map.points[0].year, "2024");
    assert_eq!(map.points[0].journal, "Journal of Tests");
    // Preview caps the author count at three.
    assert_eq!(map.points[0].authors, "A. One, B. Two, C. Three");
}

#[test]
fn test_missing_metadata_renders_empty() {
    let papers = vec![Paper::default()];
    let map = assemble(&papers, &[0], &coords(1)).unwrap();
    assert_eq!(map.points[0].title, "");
    assert_eq!(map.points[0].year, "");
    assert_eq!(map.points[0].journal, "");
    assert_eq!(map.points[0].authors, "");
}

#[test]
fn test_noise_is_excluded_from_groups() {
    let papers: Vec<Paper> = (0..5).map(|i| paper(&format!("p{i}"))).collect();
    let labels = vec![0, NOISE_LABEL, 1, 0, NOISE_LABEL];
    let map = assemble(&papers, &labels, &coords(5)).unwrap();

    assert!(map.groups.iter().all(|g| g.label != NOISE_LABEL));
    assert_eq!(map.groups.len(), 2);
    assert_eq!(map.noise_count(), 2);
}

#[test]
fn test_groups_sorted_ascending_with_members_in_input_order() {
    let papers: Vec<Paper> = (0..6).map(|i| paper(&format!("p{i}"))).collect();
    let labels = vec![2, 0, 2, 1, 0, 2];
    let map = assemble(&papers, &labels, &coords(6)).unwrap();

    let group_labels: Vec<i32> = map.groups.iter().map(|g| g.label).collect();
    assert_eq!(group_labels, vec![0, 1, 2]);

    assert_eq!(map.groups[0].members, vec![1, 4]);
    assert_eq!(map.groups[1].members, vec![3]);
    assert_eq!(map.groups[2].members, vec![0, 2, 5]);
}

#[test]
fn test_group_sizes_sum_to_non_noise_count() {
    let papers: Vec<Paper> = (0..7).map(|i| paper(&format!("p{i}"))).collect();
    let labels = vec![0, 0, NOISE_LABEL, 1, 1, 1, NOISE_LABEL];
    let map = assemble(&papers, &labels, &coords(7)).unwrap();

    let grouped: usize = map.groups.iter().map(|g| g.size).sum();
    assert_eq!(grouped, papers.len() - map.noise_count());
}

#[test]
fn test_misaligned_inputs_are_an_internal_error() {
    let papers = vec![paper("only one")];
    let err = assemble(&papers, &[0, 1], &coords(1)).unwrap_err();
    assert!(err.to_string().contains("Misaligned"));
}

#[test]
fn test_empty_inputs() {
    let map = assemble(&[], &[], &[]).unwrap();
    assert!(map.is_empty());
    assert!(map.groups.is_empty());
}
