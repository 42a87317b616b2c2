use serde::{Deserialize, Serialize};

use crate::core::Point;

/// Visual state of one data-point marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PointState {
    #[default]
    Default,
    Hover,
    Selected,
}

/// Explicit hover/selection state owned by the chart instance.
///
/// At most one point is selected at any time, by construction. Rendering
/// derives marker classes from this state instead of mutating the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    hovered: Option<usize>,
    selected: Option<usize>,
}

impl SelectionState {
    #[must_use]
    pub fn hovered(self) -> Option<usize> {
        self.hovered
    }

    #[must_use]
    pub fn selected(self) -> Option<usize> {
        self.selected
    }

    /// Visual state for marker `index`; selection wins over hover.
    #[must_use]
    pub fn point_state(self, index: usize) -> PointState {
        if self.selected == Some(index) {
            PointState::Selected
        } else if self.hovered == Some(index) {
            PointState::Hover
        } else {
            PointState::Default
        }
    }

    /// Pointer entered marker `index`. The selected point never also shows
    /// the hover state; any other previous hover clears.
    ///
    /// Returns `true` when the visual state changed.
    pub fn on_hover_enter(&mut self, index: usize) -> bool {
        let next = if self.selected == Some(index) {
            None
        } else {
            Some(index)
        };
        let changed = self.hovered != next;
        self.hovered = next;
        changed
    }

    /// Pointer left all markers; selection is untouched.
    pub fn on_hover_leave(&mut self) -> bool {
        let changed = self.hovered.is_some();
        self.hovered = None;
        changed
    }

    /// Marker `index` was clicked: it becomes the single selected point and
    /// any previous selection reverts to default.
    pub fn on_click(&mut self, index: usize) -> bool {
        let changed = self.selected != Some(index) || self.hovered.is_some();
        self.selected = Some(index);
        self.hovered = None;
        changed
    }

    pub fn clear(&mut self) {
        self.hovered = None;
        self.selected = None;
    }
}

/// Finds the marker containing the pointer, if any.
///
/// Markers are tested in axis order, so overlapping markers resolve to the
/// lowest index. Containment includes the marker outline.
#[must_use]
pub fn hit_test_markers(markers: &[Point], x: f64, y: f64, marker_radius: f64) -> Option<usize> {
    let pointer = Point::new(x, y);
    markers
        .iter()
        .position(|marker| marker.distance_to(pointer) <= marker_radius)
}
