use crate::core::{Point, PolygonVertices};
use crate::error::{RadarError, RadarResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> RadarResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(RadarError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Stylesheet class carried by every primitive.
///
/// These names are the chart's CSS contract: hosts style `axis`, `label`,
/// `graph`, `quadrant`, and `datapoint` (with `hover` / `selected`
/// modifiers) from their own stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CssClass {
    Axis,
    Label,
    Graph,
    Quadrant,
    DataPoint,
    DataPointHover,
    DataPointSelected,
}

impl CssClass {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Axis => "axis",
            Self::Label => "label",
            Self::Graph => "graph",
            Self::Quadrant => "quadrant",
            Self::DataPoint => "datapoint",
            Self::DataPointHover => "datapoint hover",
            Self::DataPointSelected => "datapoint selected",
        }
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub class: CssClass,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke_width: f64,
        color: Color,
        class: CssClass,
    ) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            class,
        }
    }

    pub fn validate(self) -> RadarResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(RadarError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(RadarError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one circle: data-point markers and quadrant rings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub filled: bool,
    pub class: CssClass,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(
        cx: f64,
        cy: f64,
        radius: f64,
        stroke_width: f64,
        color: Color,
        filled: bool,
        class: CssClass,
    ) -> Self {
        Self {
            cx,
            cy,
            radius,
            stroke_width,
            color,
            filled,
            class,
        }
    }

    pub fn validate(self) -> RadarResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(RadarError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(RadarError::InvalidData(
                "circle radius must be finite and >= 0".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(RadarError::InvalidData(
                "circle stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for the closed data polygon.
///
/// Vertices are in axis order; the path always closes back to the first
/// vertex. An empty vertex list is valid and renders as an empty path.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonPrimitive {
    pub vertices: PolygonVertices,
    pub stroke_width: f64,
    pub color: Color,
    pub class: CssClass,
}

impl PolygonPrimitive {
    #[must_use]
    pub fn new(
        vertices: PolygonVertices,
        stroke_width: f64,
        color: Color,
        class: CssClass,
    ) -> Self {
        Self {
            vertices,
            stroke_width,
            color,
            class,
        }
    }

    pub fn validate(&self) -> RadarResult<()> {
        for vertex in &self.vertices {
            if !vertex.is_finite() {
                return Err(RadarError::InvalidData(
                    "polygon vertices must be finite".to_owned(),
                ));
            }
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(RadarError::InvalidData(
                "polygon stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }

    /// SVG-style path data: `M .. L .. Z`, or empty for zero vertices.
    #[must_use]
    pub fn path_data(&self) -> String {
        let mut data = String::new();
        for (index, vertex) in self.vertices.iter().enumerate() {
            let command = if index == 0 { 'M' } else { 'L' };
            if index > 0 {
                data.push(' ');
            }
            data.push(command);
            data.push_str(&format!("{},{}", vertex.x, vertex.y));
        }
        if !self.vertices.is_empty() {
            data.push('Z');
        }
        data
    }

    #[must_use]
    pub fn first_vertex(&self) -> Option<Point> {
        self.vertices.first().copied()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub class: CssClass,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
        class: CssClass,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            class,
        }
    }

    pub fn validate(&self) -> RadarResult<()> {
        if self.text.is_empty() {
            return Err(RadarError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(RadarError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(RadarError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
