//! Tests for the JSON data set format.

use std::io::Cursor;

use crate::format::{Dataset, DatasetIssue, FormatError};
use crate::model::{Annotation, ImageInfo};

const HARBOUR_JSON: &str = r#"{
  "image": {
    "url": "img/harbour.jpg",
    "name": "Harbour",
    "mime": "image/jpeg",
    "width": 1920,
    "height": 1080,
    "created_at": "2024-05-01T09:30:00Z"
  },
  "annotations": [
    { "id": "a1", "title": "Lighthouse", "description": "Built 1887", "x": 0.8, "y": 0.2 },
    { "id": "a2", "title": "Pier", "link": "https://example.org/pier", "x": 0.3, "y": 0.9 },
    { "id": 3, "title": "Crane", "x": 0.0, "y": 1.0 }
  ]
}"#;

#[test]
fn test_parse_full_dataset() {
    let dataset = Dataset::from_json(HARBOUR_JSON).unwrap();

    assert_eq!(dataset.image.display_name(), "Harbour");
    assert_eq!(dataset.image.mime, "image/jpeg");
    assert_eq!(dataset.image.dimension_label(), "1920 × 1080");
    assert_eq!(dataset.len(), 3);

    let lighthouse = dataset.get("a1").unwrap();
    assert_eq!(lighthouse.description_text(), Some("Built 1887"));
    assert_eq!(lighthouse.link_url(), None);

    let pier = dataset.get("a2").unwrap();
    assert_eq!(pier.link_url(), Some("https://example.org/pier"));

    assert!(dataset.get("3").is_some());
    assert!(dataset.get("missing").is_none());
}

#[test]
fn test_from_reader_matches_from_json() {
    let from_reader = Dataset::from_reader(Cursor::new(HARBOUR_JSON)).unwrap();
    let from_json = Dataset::from_json(HARBOUR_JSON).unwrap();
    assert_eq!(from_reader, from_json);
}

#[test]
fn test_missing_annotations_means_empty() {
    let dataset = Dataset::from_json(r#"{ "image": { "url": "a.png", "width": 10, "height": 10 } }"#)
        .unwrap();
    assert!(dataset.is_empty());
    assert_eq!(dataset.image.display_name(), "(untitled)");
}

#[test]
fn test_duplicate_ids_load_with_warning() {
    let json = r#"{
      "image": { "url": "a.png", "width": 10, "height": 10 },
      "annotations": [
        { "id": "x", "title": "One", "x": 0.1, "y": 0.1 },
        { "id": "x", "title": "Two", "x": 0.2, "y": 0.2 }
      ]
    }"#;
    let dataset = Dataset::from_json(json).unwrap();

    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.annotations[1].title, "Two");
    assert_eq!(
        dataset.issues(),
        vec![DatasetIssue::DuplicateId { id: "x".to_string() }]
    );
}

#[test]
fn test_off_image_coordinates_load_with_warning() {
    let json = r#"{
      "image": { "url": "a.png", "width": 10, "height": 10 },
      "annotations": [ { "id": "a", "title": "Off image", "x": 1.2, "y": 0.5 } ]
    }"#;
    let dataset = Dataset::from_json(json).unwrap();

    assert_eq!(dataset.get("a").unwrap().x, 1.2);
    assert!(matches!(
        dataset.issues().as_slice(),
        [DatasetIssue::OffImage { id, .. }] if id == "a"
    ));
}

#[test]
fn test_empty_id_loads_with_warning() {
    let dataset = Dataset::new(ImageInfo::new("a.png", 10, 10))
        .with_annotation(Annotation::new("", "Nameless", 0.5, 0.5));
    assert!(dataset.validate().is_ok());
    assert_eq!(dataset.issues(), vec![DatasetIssue::EmptyId { index: 0 }]);
}

#[test]
fn test_empty_url_rejected() {
    let dataset = Dataset::new(ImageInfo::new("  ", 10, 10));
    assert!(matches!(
        dataset.validate(),
        Err(FormatError::MissingField { .. })
    ));
}

#[test]
fn test_zero_dimensions_accepted() {
    let dataset = Dataset::new(ImageInfo::new("a.png", 0, 0))
        .with_annotation(Annotation::new("a", "Centre", 0.5, 0.5));
    assert!(dataset.validate().is_ok());
    assert_eq!(
        dataset.issues(),
        vec![DatasetIssue::DegenerateImage { width: 0, height: 0 }]
    );
}

#[test]
fn test_clean_dataset_has_no_issues() {
    assert!(Dataset::from_json(HARBOUR_JSON).unwrap().issues().is_empty());
}

#[test]
fn test_malformed_json_is_json_error() {
    assert!(matches!(
        Dataset::from_json("{ not json"),
        Err(FormatError::Json(_))
    ));
}

#[test]
fn test_json_round_trip_preserves_content() {
    let original = Dataset::from_json(HARBOUR_JSON).unwrap();
    let json = original.to_json().unwrap();
    assert_eq!(Dataset::from_json(&json).unwrap(), original);
}
