use engraver_core::{Document, DocumentError, Material, ShapeSpec};
use std::fs;
use tempfile::tempdir;

fn sample_document() -> Document {
    let material = Material::new(300.0, 200.0, 12.0).unwrap();
    Document::with_shapes(
        material,
        vec![
            ShapeSpec::rect(10.0, 20.0, 30.0, 40.0),
            ShapeSpec::circle(100.0, 100.0, 25.5),
            ShapeSpec::rect(10.0, 20.0, 30.0, 40.0),
        ],
    )
}

#[test]
fn test_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("design.json");

    let doc = sample_document();
    doc.save(&path).expect("save failed");
    let loaded = Document::load(&path).expect("load failed");

    assert_eq!(loaded, doc);
    assert_eq!(loaded.shapes().len(), 3);
    assert_eq!(loaded.material().thickness(), 12.0);
}

#[test]
fn test_save_is_idempotent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("design.json");

    let doc = sample_document();
    doc.save(&path).unwrap();
    let first = fs::read(&path).unwrap();
    doc.save(&path).unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_serialize_is_stable() {
    let doc = sample_document();
    assert_eq!(doc.serialize().unwrap(), doc.serialize().unwrap());
}

#[test]
fn test_load_reads_hand_written_file() {
    let text = r#"{
  "material": { "width": 100, "height": 80, "thickness": 3 },
  "shapes": [
    { "type": "rect",   "x": 0, "y": 0, "w": 10, "h": 5 },
    { "type": "circle", "cx": 50, "cy": 40, "r": 12.5 }
  ]
}"#;
    let doc = Document::deserialize(text).unwrap();
    assert_eq!(
        doc.shapes(),
        &[
            ShapeSpec::rect(0.0, 0.0, 10.0, 5.0),
            ShapeSpec::circle(50.0, 40.0, 12.5),
        ]
    );
}

#[test]
fn test_unknown_shape_fails_whole_load() {
    let text = r#"{
  "material": { "width": 100, "height": 80, "thickness": 3 },
  "shapes": [
    { "type": "rect", "x": 0, "y": 0, "w": 10, "h": 5 },
    { "type": "triangle", "x1": 0, "y1": 0, "x2": 5, "y2": 0, "x3": 0, "y3": 5 }
  ]
}"#;
    match Document::deserialize(text) {
        Err(DocumentError::UnknownVariant { tag, index }) => {
            assert_eq!(tag, "triangle");
            assert_eq!(index, 1);
        }
        other => panic!("expected UnknownVariant, got {other:?}"),
    }
}

#[test]
fn test_malformed_text_is_format_error() {
    let result = Document::deserialize(r#"{"material": {"width": 10,"#);
    assert!(matches!(result, Err(DocumentError::Format(_))));

    let result = Document::deserialize("not json at all");
    assert!(matches!(result, Err(DocumentError::Format(_))));
}

#[test]
fn test_missing_or_mistyped_fields_are_schema_errors() {
    let missing_material = r#"{"shapes": []}"#;
    assert!(matches!(
        Document::deserialize(missing_material),
        Err(DocumentError::Schema(_))
    ));

    let mistyped_width = r#"{"material": {"width": "wide", "height": 10, "thickness": 1}}"#;
    assert!(matches!(
        Document::deserialize(mistyped_width),
        Err(DocumentError::Schema(_))
    ));

    let missing_radius = r#"{"material": {"width": 10, "height": 10, "thickness": 1},
                             "shapes": [{"type": "circle", "cx": 1, "cy": 1}]}"#;
    assert!(matches!(
        Document::deserialize(missing_radius),
        Err(DocumentError::Schema(_))
    ));

    let not_an_object = "[1, 2, 3]";
    assert!(matches!(
        Document::deserialize(not_an_object),
        Err(DocumentError::Schema(_))
    ));

    let nested_array = "[[10, 10, 1]]";
    assert!(matches!(
        Document::deserialize(nested_array),
        Err(DocumentError::Schema(_))
    ));

    let material_as_array = r#"{"material": [10, 10, 1], "shapes": []}"#;
    assert!(matches!(
        Document::deserialize(material_as_array),
        Err(DocumentError::Schema(_))
    ));

    let shapes_not_a_list = r#"{"material": {"width": 10, "height": 10, "thickness": 1},
                                "shapes": {"type": "rect"}}"#;
    assert!(matches!(
        Document::deserialize(shapes_not_a_list),
        Err(DocumentError::Schema(_))
    ));
}

#[test]
fn test_degenerate_persisted_material_is_validation_error() {
    let text = r#"{"material": {"width": 0, "height": 10, "thickness": 1}, "shapes": []}"#;
    assert!(matches!(
        Document::deserialize(text),
        Err(DocumentError::Validation { field: "width", .. })
    ));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("does-not-exist.json");
    match Document::load(&path) {
        Err(DocumentError::Io { path: Some(p), .. }) => assert_eq!(p, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_save_into_missing_directory_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("design.json");
    let result = sample_document().save(&path);
    assert!(matches!(result, Err(DocumentError::Io { .. })));
}

#[test]
fn test_replaced_material_survives_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("design.json");

    let mut doc = sample_document();
    let resized = Material::new(600.0, 400.0, 18.0).unwrap();
    doc.set_material(resized);
    doc.save(&path).unwrap();

    let loaded = Document::load(&path).unwrap();
    assert_eq!(loaded.material(), &resized);
    assert_eq!(loaded.shapes(), doc.shapes());
}

#[test]
fn test_read_from_and_write_to() {
    let doc = sample_document();
    let mut buf = Vec::new();
    doc.write_to(&mut buf).unwrap();
    let loaded = Document::read_from(buf.as_slice()).unwrap();
    assert_eq!(loaded, doc);
}
