pub mod geometry;
pub mod scale;
pub mod types;

pub use geometry::{
    AxisGeometry, PolygonVertices, RadarGeometry, QUADRANT_RING_FRACTIONS, angular_step,
    axis_angle, polar_to_point,
};
pub use scale::AxisScale;
pub use types::{AxisDatum, Point, Viewport};
