use std::f64::consts::TAU;

use smallvec::SmallVec;

use crate::core::scale::AxisScale;
use crate::core::types::{AxisDatum, Point};
use crate::error::RadarResult;

/// Ring radii for the quadrant guides, as fractions of the chart radius.
pub const QUADRANT_RING_FRACTIONS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

/// Angular distance between adjacent axes.
#[must_use]
pub fn angular_step(axis_count: usize) -> f64 {
    debug_assert!(axis_count > 0);
    TAU / axis_count as f64
}

/// Angle of axis `index`, a function of index only, never of value.
#[must_use]
pub fn axis_angle(index: usize, axis_count: usize) -> f64 {
    index as f64 * angular_step(axis_count)
}

#[must_use]
pub fn polar_to_point(center: Point, distance: f64, angle: f64) -> Point {
    Point::new(
        center.x + distance * angle.cos(),
        center.y + distance * angle.sin(),
    )
}

/// Everything derived for one spoke: recomputed fresh per frame pass,
/// never persisted across renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisGeometry {
    pub angle: f64,
    pub endpoint: Point,
    pub label_anchor: Point,
    pub data_point: Point,
}

pub type PolygonVertices = SmallVec<[Point; 8]>;

/// Output of the geometry pass for one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarGeometry {
    pub axes: Vec<AxisGeometry>,
    /// Data points in axis order; the rendered polygon closes back to the
    /// first vertex.
    pub polygon: PolygonVertices,
    pub ring_radii: [f64; 4],
}

impl RadarGeometry {
    /// Runs the geometry pass: one linear scale and one set of cartesian
    /// positions per axis.
    ///
    /// An empty data slice yields an empty geometry (no axes, empty
    /// polygon) rather than an error.
    pub fn compute(
        center: Point,
        radius: f64,
        label_offset: f64,
        data: &[AxisDatum],
    ) -> RadarResult<Self> {
        let axis_count = data.len();
        let mut axes = Vec::with_capacity(axis_count);
        let mut polygon = PolygonVertices::with_capacity(axis_count);

        for (index, datum) in data.iter().enumerate() {
            let scale = AxisScale::new(datum.range.0, datum.range.1, radius)?;
            let angle = axis_angle(index, axis_count);
            let distance = scale.value_to_distance(datum.value)?;

            let axis = AxisGeometry {
                angle,
                endpoint: polar_to_point(center, radius, angle),
                label_anchor: polar_to_point(center, radius + label_offset, angle),
                data_point: polar_to_point(center, distance, angle),
            };
            polygon.push(axis.data_point);
            axes.push(axis);
        }

        Ok(Self {
            axes,
            polygon,
            ring_radii: QUADRANT_RING_FRACTIONS.map(|fraction| fraction * radius),
        })
    }

    #[must_use]
    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }
}
