//! Unit tests for the Paper entity

use pta_domain::entities::Paper;

#[test]
fn test_abstract_field_uses_wire_name() {
    let json = r#"{"title": "T", "abstract": "A", "journal": "J"}"#;
    let paper: Paper = serde_json::from_str(json).unwrap();
    assert_eq!(paper.title.as_deref(), Some("T"));
    assert_eq!(paper.abstract_text.as_deref(), Some("A"));
    assert_eq!(paper.journal.as_deref(), Some("J"));
}

#[test]
fn test_every_field_is_optional() {
    let paper: Paper = serde_json::from_str("{}").unwrap();
    assert_eq!(paper, Paper::default());
}

#[test]
fn test_null_fields_deserialize_as_none() {
    let json = r#"{"title": null, "abstract": null, "authors": null}"#;
    let paper: Paper = serde_json::from_str(json).unwrap();
    assert!(paper.title.is_none());
    assert!(paper.abstract_text.is_none());
    assert!(paper.authors.is_none());
}

#[test]
fn test_or_empty_accessors() {
    let paper = Paper::default();
    assert_eq!(paper.title_or_empty(), "");
    assert_eq!(paper.abstract_or_empty(), "");
    assert_eq!(paper.journal_or_empty(), "");
    assert!(paper.authors_or_empty().is_empty());
}

#[test]
fn test_authors_roundtrip() {
    let paper = Paper {
        authors: Some(vec!["A. One".to_string(), "B. Two".to_string()]),
        ..Paper::default()
    };
    let json = serde_json::to_string(&paper).unwrap();
    let back: Paper = serde_json::from_str(&json).unwrap();
    assert_eq!(back.authors_or_empty().len(), 2);
}
