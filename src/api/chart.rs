use tracing::{debug, trace};

use crate::core::{AxisDatum, Point, RadarGeometry};
use crate::error::RadarResult;
use crate::interaction::{PointState, SelectionState, hit_test_markers};
use crate::render::{
    CirclePrimitive, Color, CssClass, FrameMetadata, LinePrimitive, PolygonPrimitive, RadarFrame,
    Renderer, TextHAlign, TextPrimitive,
};

use super::RadarChartConfig;

const AXIS_STROKE: Color = Color::rgb(0.55, 0.55, 0.55);
const QUADRANT_STROKE: Color = Color::rgb(0.82, 0.82, 0.82);
const GRAPH_STROKE: Color = Color::rgba(0.23, 0.45, 0.78, 0.9);
const MARKER_FILL: Color = Color::rgb(0.23, 0.45, 0.78);
const LABEL_FILL: Color = Color::rgb(0.1, 0.1, 0.1);

const AXIS_STROKE_WIDTH: f64 = 1.0;
const QUADRANT_STROKE_WIDTH: f64 = 1.0;
const GRAPH_STROKE_WIDTH: f64 = 2.0;
const LABEL_FONT_SIZE_PX: f64 = 12.0;

/// Radar chart engine: owns configuration, data, and selection state, and
/// builds one frame of drawable primitives per render pass.
///
/// Geometry is recomputed fresh on every pass; only the configuration,
/// the data, and the selection persist between renders.
pub struct RadarChart<R: Renderer> {
    renderer: R,
    config: RadarChartConfig,
    data: Vec<AxisDatum>,
    selection: SelectionState,
}

impl<R: Renderer> RadarChart<R> {
    pub fn new(renderer: R, config: RadarChartConfig) -> RadarResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            data: Vec::new(),
            selection: SelectionState::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &RadarChartConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RadarChartConfig) -> RadarResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn data(&self) -> &[AxisDatum] {
        &self.data
    }

    /// Replaces the chart data. Fails fast on non-finite values or
    /// degenerate ranges and clears any hover/selection, since point
    /// indices no longer refer to the same axes.
    pub fn set_data(&mut self, data: Vec<AxisDatum>) -> RadarResult<()> {
        for datum in &data {
            datum.validate()?;
        }
        debug!(axis_count = data.len(), "set chart data");
        self.data = data;
        self.selection.clear();
        Ok(())
    }

    #[must_use]
    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Builds the declarative frame for the current config, data, and
    /// selection. Pure with respect to the renderer.
    pub fn build_frame(&self) -> RadarResult<RadarFrame> {
        let geometry = self.geometry()?;
        let center = self.center();
        let config = &self.config;

        let mut frame = RadarFrame::new(config.viewport()).with_metadata(FrameMetadata {
            id: config.id.clone(),
            title: config.title.clone(),
            description: config.description.clone(),
        });

        if config.draw_quadrants {
            for ring_radius in geometry.ring_radii {
                frame = frame.with_circle(CirclePrimitive::new(
                    center.x,
                    center.y,
                    ring_radius,
                    QUADRANT_STROKE_WIDTH,
                    QUADRANT_STROKE,
                    false,
                    CssClass::Quadrant,
                ));
            }
        }

        if config.draw_axes {
            for axis in &geometry.axes {
                frame = frame.with_line(LinePrimitive::new(
                    center.x,
                    center.y,
                    axis.endpoint.x,
                    axis.endpoint.y,
                    AXIS_STROKE_WIDTH,
                    AXIS_STROKE,
                    CssClass::Axis,
                ));
            }
        }

        // The data polygon is always drawn, even when empty.
        frame = frame.with_polygon(PolygonPrimitive::new(
            geometry.polygon.clone(),
            GRAPH_STROKE_WIDTH,
            GRAPH_STROKE,
            CssClass::Graph,
        ));

        if config.draw_points {
            for (index, axis) in geometry.axes.iter().enumerate() {
                frame = frame.with_circle(CirclePrimitive::new(
                    axis.data_point.x,
                    axis.data_point.y,
                    config.marker_radius,
                    AXIS_STROKE_WIDTH,
                    MARKER_FILL,
                    true,
                    marker_class(self.selection.point_state(index)),
                ));
            }
        }

        if config.draw_labels {
            for (axis, datum) in geometry.axes.iter().zip(&self.data) {
                if datum.label.is_empty() {
                    continue;
                }
                frame = frame.with_text(TextPrimitive::new(
                    datum.label.clone(),
                    axis.label_anchor.x,
                    axis.label_anchor.y,
                    LABEL_FONT_SIZE_PX,
                    LABEL_FILL,
                    TextHAlign::Center,
                    CssClass::Label,
                ));
            }
        }

        trace!(
            lines = frame.lines.len(),
            circles = frame.circles.len(),
            texts = frame.texts.len(),
            "built radar frame"
        );
        Ok(frame)
    }

    /// Builds the current frame and hands it to the renderer.
    pub fn render(&mut self) -> RadarResult<()> {
        let frame = self.build_frame()?;
        self.renderer.render(&frame)
    }

    /// Pointer moved to `(x, y)` in chart pixel space.
    ///
    /// Returns `true` when hover state changed and the host should
    /// re-render. Inactive unless the chart is selectable and draws
    /// point markers.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> RadarResult<bool> {
        if !self.interaction_active() {
            return Ok(false);
        }

        let changed = match self.hit_test(x, y)? {
            Some(index) => self.selection.on_hover_enter(index),
            None => self.selection.on_hover_leave(),
        };
        if changed {
            trace!(hovered = ?self.selection.hovered(), "hover state changed");
        }
        Ok(changed)
    }

    /// Pointer left the chart area entirely; selection is untouched.
    pub fn pointer_leave(&mut self) -> bool {
        if !self.interaction_active() {
            return false;
        }
        self.selection.on_hover_leave()
    }

    /// Pointer clicked at `(x, y)`. A click on a marker selects that point
    /// (exactly one selected system-wide); a click on empty space changes
    /// nothing.
    pub fn pointer_click(&mut self, x: f64, y: f64) -> RadarResult<bool> {
        if !self.interaction_active() {
            return Ok(false);
        }

        match self.hit_test(x, y)? {
            Some(index) => {
                let changed = self.selection.on_click(index);
                debug!(index, "data point selected");
                Ok(changed)
            }
            None => Ok(false),
        }
    }

    fn interaction_active(&self) -> bool {
        self.config.selectable && self.config.draw_points
    }

    fn hit_test(&self, x: f64, y: f64) -> RadarResult<Option<usize>> {
        let geometry = self.geometry()?;
        Ok(hit_test_markers(
            &geometry.polygon,
            x,
            y,
            self.config.marker_radius,
        ))
    }

    fn geometry(&self) -> RadarResult<RadarGeometry> {
        RadarGeometry::compute(
            self.center(),
            self.config.radius,
            self.config.label_offset,
            &self.data,
        )
    }

    fn center(&self) -> Point {
        Point::new(self.config.center.0, self.config.center.1)
    }
}

fn marker_class(state: PointState) -> CssClass {
    match state {
        PointState::Default => CssClass::DataPoint,
        PointState::Hover => CssClass::DataPointHover,
        PointState::Selected => CssClass::DataPointSelected,
    }
}
