use radar_rs::core::AxisDatum;
use radar_rs::render::SvgRenderer;
use radar_rs::{RadarChart, RadarChartConfig, RadarDocument};

fn rendered_svg(config: RadarChartConfig, data: Vec<AxisDatum>) -> String {
    let mut chart = RadarChart::new(SvgRenderer::new(), config).expect("chart init");
    chart.set_data(data).expect("set data");
    chart.render().expect("render");
    chart.into_renderer().into_document()
}

fn sample_data() -> Vec<AxisDatum> {
    vec![
        AxisDatum::new(5.0, (0.0, 10.0), "A"),
        AxisDatum::new(10.0, (0.0, 10.0), "B"),
    ]
}

#[test]
fn svg_root_carries_dimensions_and_id() {
    let config = RadarChartConfig::new(300, 300)
        .with_radius(120.0)
        .with_id("stats");
    let svg = rendered_svg(config, sample_data());

    assert!(svg.starts_with("<svg "));
    assert!(svg.contains(r#"width="300""#));
    assert!(svg.contains(r#"height="300""#));
    assert!(svg.contains(r#"id="stats""#));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn title_and_description_become_svg_metadata() {
    let config = RadarChartConfig::new(300, 300)
        .with_title("Player stats")
        .with_description("Season averages");
    let svg = rendered_svg(config, sample_data());

    assert!(svg.contains("<title>Player stats</title>"));
    assert!(svg.contains("<desc>Season averages</desc>"));
}

#[test]
fn primitives_carry_their_stylesheet_classes() {
    let config = RadarChartConfig::new(300, 300)
        .with_radius(120.0)
        .with_draw_quadrants(true);
    let svg = rendered_svg(config, sample_data());

    assert_eq!(svg.matches(r#"class="axis""#).count(), 2);
    assert_eq!(svg.matches(r#"class="label""#).count(), 2);
    assert_eq!(svg.matches(r#"class="graph""#).count(), 1);
    assert_eq!(svg.matches(r#"class="quadrant""#).count(), 4);
    assert_eq!(svg.matches(r#"class="datapoint""#).count(), 2);
}

#[test]
fn graph_path_is_closed() {
    let svg = rendered_svg(RadarChartConfig::new(300, 300).with_radius(120.0), sample_data());

    let path_start = svg.find(r#"class="graph""#).expect("graph path present");
    let line = svg[..path_start]
        .rfind("<path")
        .map(|start| &svg[start..])
        .expect("path element");
    let d_start = line.find("d=\"").expect("d attribute") + 3;
    let d_end = line[d_start..].find('"').expect("d attribute end") + d_start;
    let d = &line[d_start..d_end];

    assert!(d.starts_with('M'));
    assert!(d.ends_with('Z'));
}

#[test]
fn selected_marker_class_appears_after_click() {
    let config = RadarChartConfig::new(300, 300)
        .with_radius(120.0)
        .with_selectable(true);
    let mut chart = RadarChart::new(SvgRenderer::new(), config).expect("chart init");
    chart.set_data(sample_data()).expect("set data");

    // Axis B at angle pi with full value sits at (30, 150).
    chart.pointer_click(30.0, 150.0).expect("click");
    chart.render().expect("render");

    let svg = chart.renderer().document();
    assert!(svg.contains(r#"class="datapoint selected""#));
    assert!(!svg.contains(r#"class="datapoint hover""#));
}

#[test]
fn empty_chart_renders_an_empty_path() {
    let mut chart = RadarChart::new(SvgRenderer::new(), RadarChartConfig::new(300, 300))
        .expect("chart init");
    chart.render().expect("render empty");

    let svg = chart.renderer().document();
    assert!(svg.contains(r#"<path d="" "#));
    assert!(!svg.contains("<line"));
    assert!(!svg.contains("<text"));
}

#[test]
fn label_text_is_xml_escaped() {
    let svg = rendered_svg(
        RadarChartConfig::new(300, 300),
        vec![
            AxisDatum::new(1.0, (0.0, 2.0), "a & b"),
            AxisDatum::new(1.0, (0.0, 2.0), "<c>"),
        ],
    );

    assert!(svg.contains("a &amp; b"));
    assert!(svg.contains("&lt;c&gt;"));
}

#[test]
fn each_render_pass_replaces_the_document() {
    let config = RadarChartConfig::new(300, 300).with_radius(120.0);
    let mut chart = RadarChart::new(SvgRenderer::new(), config).expect("chart init");

    chart.set_data(sample_data()).expect("set data");
    chart.render().expect("first render");
    let first = chart.renderer().document().to_owned();

    chart
        .set_data(vec![AxisDatum::new(2.0, (0.0, 10.0), "only")])
        .expect("set data");
    chart.render().expect("second render");
    let second = chart.renderer().document();

    assert_ne!(first, second);
    assert_eq!(second.matches("<line").count(), 1);
}

#[test]
fn document_to_svg_end_to_end() {
    let json = r#"{
        "width": 300, "height": 300, "margin": 30,
        "id": "skills", "title": "Skill coverage", "description": "by area",
        "selectable": true,
        "data": [5, 10, 7],
        "databounds": [10, 10, 10],
        "labels": ["backend", "frontend", "ops"]
    }"#;

    let (config, data) = RadarDocument::from_json_str(json)
        .expect("parse")
        .into_parts()
        .expect("lower");
    let mut chart = RadarChart::new(SvgRenderer::new(), config).expect("chart init");
    chart.set_data(data).expect("set data");
    chart.render().expect("render");

    let svg = chart.renderer().document();
    assert!(svg.contains(r#"id="skills""#));
    assert!(svg.contains("<title>Skill coverage</title>"));
    assert!(svg.contains("backend"));
    assert_eq!(svg.matches(r#"class="datapoint""#).count(), 3);
}
