use crate::error::{RadarError, RadarResult};

/// Linear map from an axis value range onto distance-from-center
/// `[0, radius]`.
///
/// The map is exact at its endpoints (`range.0` maps to `0`, `range.1`
/// maps to `radius`) and extrapolates without clamping outside them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    range_min: f64,
    range_max: f64,
    radius: f64,
}

impl AxisScale {
    pub fn new(range_min: f64, range_max: f64, radius: f64) -> RadarResult<Self> {
        if !range_min.is_finite() || !range_max.is_finite() || range_min == range_max {
            return Err(RadarError::DegenerateRange {
                min: range_min,
                max: range_max,
            });
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(RadarError::InvalidData(
                "scale radius must be finite and >= 0".to_owned(),
            ));
        }

        Ok(Self {
            range_min,
            range_max,
            radius,
        })
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }

    #[must_use]
    pub fn radius(self) -> f64 {
        self.radius
    }

    pub fn value_to_distance(self, value: f64) -> RadarResult<f64> {
        if !value.is_finite() {
            return Err(RadarError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.range_max - self.range_min;
        Ok((value - self.range_min) / span * self.radius)
    }

    pub fn distance_to_value(self, distance: f64) -> RadarResult<f64> {
        if !distance.is_finite() {
            return Err(RadarError::InvalidData(
                "distance must be finite".to_owned(),
            ));
        }
        if self.radius == 0.0 {
            return Err(RadarError::InvalidData(
                "cannot invert a zero-radius scale".to_owned(),
            ));
        }

        let span = self.range_max - self.range_min;
        Ok(self.range_min + distance / self.radius * span)
    }
}
