//! Overlay groups: named, togglable collections of rendered shapes.

use crate::core::geo::LatLng;
use crate::style::PathStyle;

/// A single rendered map shape
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Fixed-pixel-radius circle marker with an optional popup text
    CircleMarker {
        center: LatLng,
        style: PathStyle,
        popup: Option<String>,
    },
    /// Polyline drawn with one style, e.g. a plate boundary segment
    Polyline {
        points: Vec<LatLng>,
        style: PathStyle,
    },
}

/// A named collection of shapes that can be toggled in the layer switcher.
///
/// Groups start empty and hidden; the data loader fills them when its feed
/// completes and makes them visible. They live for the whole session and
/// are never incrementally updated.
#[derive(Debug, Clone)]
pub struct OverlayGroup {
    name: String,
    shapes: Vec<Shape>,
    visible: bool,
}

impl OverlayGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shapes: Vec::new(),
            visible: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Adds shapes to the group
    pub fn extend(&mut self, shapes: impl IntoIterator<Item = Shape>) {
        self.shapes.extend(shapes);
    }
}
