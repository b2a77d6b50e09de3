//! Unit tests for record batch input

use std::io::Write;

use pta::input::{parse_records, read_records};

#[test]
fn test_wrapped_snapshot_shape() {
    let json = r#"{"papers": [{"title": "A"}, {"title": "B", "abstract": "b"}]}"#;
    let papers = parse_records(json).unwrap();
    assert_eq!(papers.len(), 2);
    assert_eq!(papers[0].title.as_deref(), Some("A"));
    assert_eq!(papers[1].abstract_text.as_deref(), Some("b"));
}

#[test]
fn test_bare_array_shape() {
    let json = r#"[{"title": "A"}, {}]"#;
    let papers = parse_records(json).unwrap();
    assert_eq!(papers.len(), 2);
    assert!(papers[1].title.is_none());
}

#[test]
fn test_empty_batch() {
    assert!(parse_records("[]").unwrap().is_empty());
    assert!(parse_records(r#"{"papers": []}"#).unwrap().is_empty());
}

#[test]
fn test_invalid_json_is_rejected() {
    let err = parse_records("not json at all").unwrap_err();
    assert!(err.to_string().contains("Invalid records JSON"));
}

#[test]
fn test_records_preserve_input_order() {
    let json = r#"[{"title": "first"}, {"title": "second"}, {"title": "third"}]"#;
    let papers = parse_records(json).unwrap();
    let titles: Vec<&str> = papers.iter().filter_map(|p| p.title.as_deref()).collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
}

#[test]
fn test_read_records_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"papers": [{"title": "from disk"}]}"#)
        .unwrap();
    file.flush().unwrap();

    let papers = read_records(Some(file.path())).unwrap();
    assert_eq!(papers.len(), 1);
    assert_eq!(papers[0].title.as_deref(), Some("from disk"));
}

#[test]
fn test_read_records_missing_file() {
    let err = read_records(Some(std::path::Path::new("/nonexistent/records.json"))).unwrap_err();
    assert!(err.to_string().contains("Failed to read records"));
}
