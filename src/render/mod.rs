mod frame;
mod null_renderer;
mod primitives;
mod svg;

pub use frame::{FrameMetadata, RadarFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, CssClass, LinePrimitive, PolygonPrimitive, TextHAlign, TextPrimitive,
};
pub use svg::SvgRenderer;

use crate::error::RadarResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RadarFrame` so
/// drawing code remains isolated from chart domain and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RadarFrame) -> RadarResult<()>;
}
