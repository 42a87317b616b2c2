use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{RadarError, RadarResult};

/// Chart configuration: dimensions, center, radius, and draw flags.
///
/// This replaces the source ecosystem's arity-dispatched getter/setter
/// chain with plain named fields plus `#[must_use]` fluent setters.
/// Setters only affect future renders; nothing is recomputed on write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarChartConfig {
    pub width: u32,
    pub height: u32,
    pub center: (f64, f64),
    pub radius: f64,
    /// Distance past the axis endpoint at which labels are anchored.
    #[serde(default = "default_label_offset")]
    pub label_offset: f64,
    /// Radius of data-point markers, also the pointer hit-test radius.
    #[serde(default = "default_marker_radius")]
    pub marker_radius: f64,
    #[serde(default = "default_true")]
    pub draw_axes: bool,
    #[serde(default = "default_true")]
    pub draw_labels: bool,
    #[serde(default)]
    pub draw_quadrants: bool,
    #[serde(default = "default_true")]
    pub draw_points: bool,
    #[serde(default)]
    pub selectable: bool,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl RadarChartConfig {
    /// Creates a config centered in the viewport with the largest radius
    /// that fits.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            center: (f64::from(width) / 2.0, f64::from(height) / 2.0),
            radius: f64::from(width.min(height)) / 2.0,
            label_offset: default_label_offset(),
            marker_radius: default_marker_radius(),
            draw_axes: true,
            draw_labels: true,
            draw_quadrants: false,
            draw_points: true,
            selectable: false,
            id: None,
            title: None,
            description: None,
        }
    }

    #[must_use]
    pub fn with_center(mut self, x: f64, y: f64) -> Self {
        self.center = (x, y);
        self
    }

    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn with_label_offset(mut self, label_offset: f64) -> Self {
        self.label_offset = label_offset;
        self
    }

    #[must_use]
    pub fn with_marker_radius(mut self, marker_radius: f64) -> Self {
        self.marker_radius = marker_radius;
        self
    }

    #[must_use]
    pub fn with_draw_axes(mut self, draw_axes: bool) -> Self {
        self.draw_axes = draw_axes;
        self
    }

    #[must_use]
    pub fn with_draw_labels(mut self, draw_labels: bool) -> Self {
        self.draw_labels = draw_labels;
        self
    }

    #[must_use]
    pub fn with_draw_quadrants(mut self, draw_quadrants: bool) -> Self {
        self.draw_quadrants = draw_quadrants;
        self
    }

    #[must_use]
    pub fn with_draw_points(mut self, draw_points: bool) -> Self {
        self.draw_points = draw_points;
        self
    }

    #[must_use]
    pub fn with_selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    pub fn validate(&self) -> RadarResult<()> {
        if !self.viewport().is_valid() {
            return Err(RadarError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        if !self.center.0.is_finite() || !self.center.1.is_finite() {
            return Err(RadarError::InvalidData(
                "chart center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(RadarError::InvalidData(
                "chart radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.label_offset.is_finite() || self.label_offset < 0.0 {
            return Err(RadarError::InvalidData(
                "label offset must be finite and >= 0".to_owned(),
            ));
        }
        if !self.marker_radius.is_finite() || self.marker_radius <= 0.0 {
            return Err(RadarError::InvalidData(
                "marker radius must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> RadarResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| RadarError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> RadarResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| RadarError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_label_offset() -> f64 {
    10.0
}

fn default_marker_radius() -> f64 {
    4.0
}

fn default_true() -> bool {
    true
}
