use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::AxisDatum;
use crate::error::{RadarError, RadarResult};

use super::RadarChartConfig;

/// The static JSON data document a radar chart is loaded from.
///
/// Field names are camelCase on the wire (`drawAxes`, `drawLabels`);
/// `databounds[i]` is the upper bound of axis `i`, with an implicit lower
/// bound of 0. Malformed documents (mismatched array lengths, margin
/// leaving no radius) fail fast instead of partially rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarDocument {
    pub width: u32,
    pub height: u32,
    pub margin: f64,
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default = "default_true")]
    pub draw_axes: bool,
    #[serde(default = "default_true")]
    pub draw_labels: bool,
    #[serde(default)]
    pub selectable: bool,
    pub data: Vec<f64>,
    pub databounds: Vec<f64>,
    pub labels: Vec<String>,
}

impl RadarDocument {
    pub fn from_json_str(input: &str) -> RadarResult<Self> {
        let document: Self = serde_json::from_str(input)
            .map_err(|e| RadarError::InvalidData(format!("failed to parse radar document: {e}")))?;
        document.validate()?;
        Ok(document)
    }

    pub fn to_json_pretty(&self) -> RadarResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            RadarError::InvalidData(format!("failed to serialize radar document: {e}"))
        })
    }

    pub fn validate(&self) -> RadarResult<()> {
        if self.data.len() != self.databounds.len() || self.data.len() != self.labels.len() {
            return Err(RadarError::LengthMismatch {
                data: self.data.len(),
                databounds: self.databounds.len(),
                labels: self.labels.len(),
            });
        }
        if self.width == 0 || self.height == 0 {
            return Err(RadarError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(RadarError::InvalidData(
                "document margin must be finite and >= 0".to_owned(),
            ));
        }
        if self.margin >= f64::from(self.width) / 2.0 {
            return Err(RadarError::InvalidData(
                "document margin leaves no chart radius".to_owned(),
            ));
        }
        Ok(())
    }

    /// Lowers the document into chart configuration and per-axis data.
    ///
    /// Derivations follow the original document layout: the chart is
    /// centered at `width/2` on both axes, `radius = width/2 - margin`
    /// (applied exactly once), and labels sit `margin/2` past the axis
    /// endpoints. Point markers are drawn whenever the chart is
    /// selectable, since selection needs something to point at.
    pub fn into_parts(self) -> RadarResult<(RadarChartConfig, Vec<AxisDatum>)> {
        self.validate()?;

        let half_width = f64::from(self.width) / 2.0;
        let config = RadarChartConfig::new(self.width, self.height)
            .with_center(half_width, half_width)
            .with_radius(half_width - self.margin)
            .with_label_offset(self.margin / 2.0)
            .with_draw_axes(self.draw_axes)
            .with_draw_labels(self.draw_labels)
            .with_draw_points(self.selectable)
            .with_selectable(self.selectable)
            .with_id(self.id)
            .with_title(self.title)
            .with_description(self.description);

        let data: Vec<AxisDatum> = self
            .data
            .iter()
            .zip(&self.databounds)
            .zip(&self.labels)
            .map(|((&value, &bound), label)| AxisDatum::new(value, (0.0, bound), label.clone()))
            .collect();
        for datum in &data {
            datum.validate()?;
        }

        debug!(axis_count = data.len(), id = %config.id.as_deref().unwrap_or(""), "lowered radar document");
        Ok((config, data))
    }
}

fn default_true() -> bool {
    true
}
