use engraver_core::{Document, Material, ShapeSpec};
use engraver_designer::ProgramEmitter;
use engraver_settings::CutSettings;

const PREAMBLE: [&str; 3] = [
    "G90 ; absolute positioning",
    "G21 ; units in mm",
    "G0 Z5.000 ; safe height",
];

const POSTAMBLE: [&str; 3] = ["G0 Z5.000", "M5 ; spindle stop", "M2 ; program end"];

fn document(shapes: Vec<ShapeSpec>) -> Document {
    Document::with_shapes(Material::new(100.0, 100.0, 5.0).unwrap(), shapes)
}

fn parse_xy(line: &str) -> (f64, f64) {
    let mut x = None;
    let mut y = None;
    for word in line.split_whitespace() {
        if let Some(v) = word.strip_prefix('X') {
            x = v.parse().ok();
        } else if let Some(v) = word.strip_prefix('Y') {
            y = v.parse().ok();
        }
    }
    (x.expect("missing X word"), y.expect("missing Y word"))
}

#[test]
fn test_empty_document() {
    let program = ProgramEmitter::default().emit(&document(Vec::new()));
    let expected: Vec<&str> = PREAMBLE.iter().chain(POSTAMBLE.iter()).copied().collect();
    assert_eq!(program, format!("{}\n", expected.join("\n")));
}

#[test]
fn test_single_rectangle() {
    let doc = document(vec![ShapeSpec::rect(0.0, 0.0, 10.0, 5.0)]);
    let lines = ProgramEmitter::default().lines(&doc);

    assert_eq!(&lines[..3], &PREAMBLE);
    assert_eq!(
        &lines[3..10],
        &[
            "G0 X0.000 Y0.000",
            "G1 Z0.000 F300.000",
            "G1 X10.000 Y0.000 F600.000",
            "G1 X10.000 Y5.000 F600.000",
            "G1 X0.000 Y5.000 F600.000",
            "G1 X0.000 Y0.000 F600.000",
            "G0 Z5.000",
        ]
    );
    assert_eq!(&lines[10..], &POSTAMBLE);
}

#[test]
fn test_circle_closure() {
    let doc = document(vec![ShapeSpec::circle(0.0, 0.0, 10.0)]);
    let lines = ProgramEmitter::default().lines(&doc);
    let body = &lines[3..lines.len() - 3];

    // rapid + plunge + 36 cuts + retract
    assert_eq!(body.len(), 39);
    assert!(body[0].starts_with("G0 X"));
    assert_eq!(body[1], "G1 Z0.000 F300.000");
    assert_eq!(body[38], "G0 Z5.000");

    let mut points = vec![parse_xy(&body[0])];
    points.extend(body[2..38].iter().map(|line| parse_xy(line)));
    assert_eq!(points.len(), 37);

    let (first, last) = (points[0], points[36]);
    assert!((first.0 - last.0).abs() < 1e-6);
    assert!((first.1 - last.1).abs() < 1e-6);
    assert_eq!(body[0], "G0 X10.000 Y0.000");
    assert_eq!(body[37], "G1 X10.000 Y0.000 F600.000");

    for line in &body[2..38] {
        assert!(line.ends_with(" F600.000"), "feed missing on {line}");
        assert!(!line.contains("-0.000"), "negative zero in {line}");
    }
}

#[test]
fn test_shapes_emitted_in_document_order() {
    let doc = document(vec![
        ShapeSpec::circle(50.0, 50.0, 5.0),
        ShapeSpec::rect(1.0, 2.0, 3.0, 4.0),
        ShapeSpec::circle(50.0, 50.0, 5.0),
    ]);
    let lines = ProgramEmitter::default().lines(&doc);
    let rapids: Vec<&String> = lines.iter().filter(|l| l.starts_with("G0 X")).collect();

    assert_eq!(
        rapids,
        vec!["G0 X55.000 Y50.000", "G0 X1.000 Y2.000", "G0 X55.000 Y50.000"]
    );
    assert_eq!(lines.len(), 3 + 39 + 7 + 39 + 3);
}

#[test]
fn test_degenerate_shapes_are_emitted() {
    let doc = document(vec![ShapeSpec::circle(2.0, 3.0, 0.0)]);
    let lines = ProgramEmitter::default().lines(&doc);
    assert_eq!(lines.len(), 3 + 39 + 3);
    assert!(lines[5..41]
        .iter()
        .all(|line| line == "G1 X2.000 Y3.000 F600.000"));
}

#[test]
fn test_custom_cut_settings() {
    let emitter = ProgramEmitter::new(CutSettings {
        cut_depth: -0.5,
        safe_height: 12.0,
        plunge_feed: 120.0,
        cut_feed: 1500.0,
    });
    let lines = emitter.lines(&document(vec![ShapeSpec::rect(0.0, 0.0, 1.0, 1.0)]));

    assert_eq!(lines[2], "G0 Z12.000 ; safe height");
    assert_eq!(lines[4], "G1 Z-0.500 F120.000");
    assert_eq!(lines[5], "G1 X1.000 Y0.000 F1500.000");
    assert_eq!(lines[9], "G0 Z12.000");
    assert_eq!(lines[10], "G0 Z12.000");
}

#[test]
fn test_emit_is_deterministic() {
    let doc = document(vec![
        ShapeSpec::rect(-5.0, -5.0, 10.0, 10.0),
        ShapeSpec::circle(0.0, 0.0, 3.3),
    ]);
    let emitter = ProgramEmitter::default();
    assert_eq!(emitter.emit(&doc), emitter.emit(&doc));
}
