use radar_rs::render::NullRenderer;
use radar_rs::{RadarChart, RadarDocument, RadarError};

const SAMPLE_DOCUMENT: &str = r#"{
    "width": 300,
    "height": 300,
    "margin": 30,
    "id": "skills",
    "title": "Skill coverage",
    "description": "Team skill coverage by area",
    "drawAxes": true,
    "drawLabels": true,
    "selectable": true,
    "data": [5, 10, 7],
    "databounds": [10, 10, 10],
    "labels": ["backend", "frontend", "ops"]
}"#;

#[test]
fn sample_document_parses() {
    let document = RadarDocument::from_json_str(SAMPLE_DOCUMENT).expect("parse");

    assert_eq!(document.width, 300);
    assert_eq!(document.margin, 30.0);
    assert!(document.draw_axes);
    assert!(document.selectable);
    assert_eq!(document.labels, vec!["backend", "frontend", "ops"]);
}

#[test]
fn flags_default_when_absent() {
    let document = RadarDocument::from_json_str(
        r#"{
            "width": 200, "height": 200, "margin": 10,
            "id": "d", "title": "t", "description": "",
            "data": [1], "databounds": [2], "labels": ["x"]
        }"#,
    )
    .expect("parse");

    assert!(document.draw_axes);
    assert!(document.draw_labels);
    assert!(!document.selectable);
}

#[test]
fn lowering_derives_center_radius_and_label_offset() {
    let document = RadarDocument::from_json_str(SAMPLE_DOCUMENT).expect("parse");
    let (config, data) = document.into_parts().expect("lower");

    assert_eq!(config.center, (150.0, 150.0));
    assert_eq!(config.radius, 120.0);
    assert_eq!(config.label_offset, 15.0);
    assert!(config.selectable);
    assert!(config.draw_points);
    assert_eq!(config.id.as_deref(), Some("skills"));

    assert_eq!(data.len(), 3);
    assert_eq!(data[1].value, 10.0);
    assert_eq!(data[1].range, (0.0, 10.0));
    assert_eq!(data[2].label, "ops");
}

#[test]
fn lowered_document_drives_a_chart() {
    let document = RadarDocument::from_json_str(SAMPLE_DOCUMENT).expect("parse");
    let (config, data) = document.into_parts().expect("lower");

    let mut chart = RadarChart::new(NullRenderer::default(), config).expect("chart init");
    chart.set_data(data).expect("set data");
    chart.render().expect("render");

    assert_eq!(chart.renderer().last_line_count, 3);
    assert_eq!(chart.renderer().last_circle_count, 3);
}

#[test]
fn mismatched_lengths_fail_fast() {
    let result = RadarDocument::from_json_str(
        r#"{
            "width": 300, "height": 300, "margin": 30,
            "id": "bad", "title": "", "description": "",
            "data": [1, 2, 3],
            "databounds": [10, 10],
            "labels": ["a", "b", "c"]
        }"#,
    );

    assert!(matches!(
        result,
        Err(RadarError::LengthMismatch {
            data: 3,
            databounds: 2,
            labels: 3
        })
    ));
}

#[test]
fn zero_databound_fails_at_lowering() {
    // A zero upper bound makes the implicit [0, bound] range zero-width.
    let document = RadarDocument::from_json_str(
        r#"{
            "width": 300, "height": 300, "margin": 30,
            "id": "bad", "title": "", "description": "",
            "data": [1], "databounds": [0], "labels": ["a"]
        }"#,
    )
    .expect("parse");

    assert!(matches!(
        document.into_parts(),
        Err(RadarError::DegenerateRange { .. })
    ));
}

#[test]
fn margin_consuming_the_radius_is_rejected() {
    let result = RadarDocument::from_json_str(
        r#"{
            "width": 100, "height": 100, "margin": 50,
            "id": "bad", "title": "", "description": "",
            "data": [1], "databounds": [2], "labels": ["a"]
        }"#,
    );

    assert!(result.is_err());
}

#[test]
fn missing_fields_are_invalid_data() {
    let result = RadarDocument::from_json_str(r#"{"width": 300}"#);
    assert!(matches!(result, Err(RadarError::InvalidData(_))));
}

#[test]
fn document_round_trips_through_json() {
    let document = RadarDocument::from_json_str(SAMPLE_DOCUMENT).expect("parse");
    let json = document.to_json_pretty().expect("serialize");

    // Wire names stay camelCase.
    assert!(json.contains("\"drawAxes\""));
    assert!(json.contains("\"databounds\""));

    let reparsed = RadarDocument::from_json_str(&json).expect("reparse");
    assert_eq!(reparsed, document);
}
