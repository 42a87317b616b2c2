use serde::{Deserialize, Serialize};

use crate::error::{RadarError, RadarResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Cartesian position in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// One spoke of a radar chart: a value, the value range it lives in, and a
/// label.
///
/// `range.0 <= value <= range.1` is expected but not enforced; values
/// outside the range place the data point beyond (or inside) the nominal
/// chart radius without clamping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisDatum {
    pub value: f64,
    pub range: (f64, f64),
    pub label: String,
}

impl AxisDatum {
    #[must_use]
    pub fn new(value: f64, range: (f64, f64), label: impl Into<String>) -> Self {
        Self {
            value,
            range,
            label: label.into(),
        }
    }

    /// Rejects non-finite values and degenerate ranges up front so a chart
    /// never partially renders from silently broken input.
    pub fn validate(&self) -> RadarResult<()> {
        if !self.value.is_finite() {
            return Err(RadarError::InvalidData(
                "axis value must be finite".to_owned(),
            ));
        }
        if !self.range.0.is_finite() || !self.range.1.is_finite() || self.range.0 == self.range.1 {
            return Err(RadarError::DegenerateRange {
                min: self.range.0,
                max: self.range.1,
            });
        }
        Ok(())
    }
}
