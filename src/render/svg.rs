use crate::error::RadarResult;
use crate::render::{Color, RadarFrame, Renderer, TextHAlign};

/// Renderer backend that serializes each frame into an SVG document.
///
/// Every primitive carries its stylesheet class, so the emitted markup can
/// be styled by the host page; stroke and fill attributes are also written
/// inline so the document is viewable standalone.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// SVG markup produced by the most recent render pass.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RadarFrame) -> RadarResult<()> {
        frame.validate()?;

        let mut out = String::new();
        out.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}""#,
            frame.viewport.width, frame.viewport.height
        ));
        if let Some(id) = &frame.metadata.id {
            out.push_str(&format!(r#" id="{}""#, escape_xml(id)));
        }
        out.push_str(">\n");

        if let Some(title) = &frame.metadata.title {
            out.push_str(&format!("  <title>{}</title>\n", escape_xml(title)));
        }
        if let Some(description) = &frame.metadata.description {
            out.push_str(&format!("  <desc>{}</desc>\n", escape_xml(description)));
        }

        // Background guides first, markers above the data polygon.
        for circle in frame.circles.iter().filter(|c| !c.filled) {
            out.push_str(&format!(
                r#"  <circle cx="{}" cy="{}" r="{}" fill="none" stroke="{}" stroke-width="{}" class="{}"/>"#,
                circle.cx,
                circle.cy,
                circle.radius,
                css_color(circle.color),
                circle.stroke_width,
                circle.class.as_str()
            ));
            out.push('\n');
        }

        for line in &frame.lines {
            out.push_str(&format!(
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" class="{}"/>"#,
                line.x1,
                line.y1,
                line.x2,
                line.y2,
                css_color(line.color),
                line.stroke_width,
                line.class.as_str()
            ));
            out.push('\n');
        }

        for polygon in &frame.polygons {
            out.push_str(&format!(
                r#"  <path d="{}" fill="none" stroke="{}" stroke-width="{}" class="{}"/>"#,
                polygon.path_data(),
                css_color(polygon.color),
                polygon.stroke_width,
                polygon.class.as_str()
            ));
            out.push('\n');
        }

        for circle in frame.circles.iter().filter(|c| c.filled) {
            out.push_str(&format!(
                r#"  <circle cx="{}" cy="{}" r="{}" fill="{}" stroke="none" class="{}"/>"#,
                circle.cx,
                circle.cy,
                circle.radius,
                css_color(circle.color),
                circle.class.as_str()
            ));
            out.push('\n');
        }

        for text in &frame.texts {
            out.push_str(&format!(
                r#"  <text x="{}" y="{}" dy="0.5ex" text-anchor="{}" font-size="{}" fill="{}" class="{}">{}</text>"#,
                text.x,
                text.y,
                text_anchor(text.h_align),
                text.font_size_px,
                css_color(text.color),
                text.class.as_str(),
                escape_xml(&text.text)
            ));
            out.push('\n');
        }

        out.push_str("</svg>\n");
        self.document = out;
        Ok(())
    }
}

fn text_anchor(h_align: TextHAlign) -> &'static str {
    match h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    }
}

fn css_color(color: Color) -> String {
    let to_byte = |channel: f64| (channel * 255.0).round() as u8;
    if (color.alpha - 1.0).abs() < f64::EPSILON {
        format!(
            "rgb({},{},{})",
            to_byte(color.red),
            to_byte(color.green),
            to_byte(color.blue)
        )
    } else {
        format!(
            "rgba({},{},{},{})",
            to_byte(color.red),
            to_byte(color.green),
            to_byte(color.blue),
            color.alpha
        )
    }
}

fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
