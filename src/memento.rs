//! Read-only snapshots used to roll the document back.
//!
//! A [`DocumentMemento`] wraps a [`CanvasMemento`], which wraps a deep copy of
//! the canvas' [`LayerManager`]. Mementos expose no way to modify their
//! contents and are consumed by the restore that uses them.

use crate::color::Color;
use crate::layer_manager::LayerManager;

#[derive(Debug, Clone, PartialEq)]
pub struct CanvasMemento {
    layers: LayerManager,
}

impl CanvasMemento {
    pub(crate) fn new(layers: LayerManager) -> Self {
        Self { layers }
    }

    pub fn layers(&self) -> &LayerManager {
        &self.layers
    }

    pub(crate) fn into_layers(self) -> LayerManager {
        self.layers
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentMemento {
    canvas: CanvasMemento,
    color: Color,
}

impl DocumentMemento {
    pub(crate) fn new(canvas: CanvasMemento, color: Color) -> Self {
        Self { canvas, color }
    }

    pub fn canvas(&self) -> &CanvasMemento {
        &self.canvas
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub(crate) fn into_parts(self) -> (CanvasMemento, Color) {
        (self.canvas, self.color)
    }
}
