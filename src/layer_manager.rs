use egui::{Pos2, Vec2};

use crate::color::Color;
use crate::layer::Layer;

/// Ordered stack of layers plus the active-layer selection.
///
/// Index 0 is the bottom of the stack and every layer's depth equals its
/// index. The active layer is remembered by index, so a cloned manager
/// selects the corresponding layer of the clone.
///
/// Out-of-range indices are ignored throughout; mutators report whether
/// anything changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerManager {
    layers: Vec<Layer>,
    active: Option<usize>,
}

impl LayerManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    pub fn layer_mut(&mut self, index: usize) -> Option<&mut Layer> {
        self.layers.get_mut(index)
    }

    pub fn index_of(&self, layer: &Layer) -> Option<usize> {
        self.layers.iter().position(|l| l.id() == layer.id())
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_layer(&self) -> Option<&Layer> {
        self.active.and_then(|index| self.layers.get(index))
    }

    pub fn active_layer_mut(&mut self) -> Option<&mut Layer> {
        self.active.and_then(|index| self.layers.get_mut(index))
    }

    fn renumber(&mut self) {
        for (depth, layer) in self.layers.iter_mut().enumerate() {
            layer.set_depth(depth);
        }
    }

    /// Drops a selection that no longer points at a layer.
    pub(crate) fn resolve_active(&mut self) {
        if self.active.is_some_and(|index| index >= self.layers.len()) {
            self.active = None;
        }
    }

    /// Appends `layer` on top and makes it active. Returns `false` if a layer
    /// with the same id is already in the stack.
    pub fn add_layer(&mut self, layer: Layer) -> bool {
        if self.index_of(&layer).is_some() {
            return false;
        }
        self.layers.push(layer);
        self.renumber();
        self.active = Some(self.layers.len() - 1);
        true
    }

    /// Removes the layer at `index` and reselects the layer below it, or the
    /// one that moved into `index`, or nothing when the stack is empty.
    pub fn remove_layer(&mut self, index: usize) -> Option<Layer> {
        if index >= self.layers.len() {
            return None;
        }
        let removed = self.layers.remove(index);
        self.renumber();
        self.active = if index > 0 {
            Some(index - 1)
        } else if index < self.layers.len() {
            Some(index)
        } else {
            None
        };
        Some(removed)
    }

    /// Moves the layer at `index` by `dz` positions in the stack. Moves past
    /// either end are ignored. The active layer stays selected.
    pub fn change_depth_index(&mut self, index: usize, dz: isize) -> bool {
        if dz == 0 || index >= self.layers.len() {
            return false;
        }
        let Some(target) = index.checked_add_signed(dz) else {
            return false;
        };
        if target >= self.layers.len() {
            return false;
        }

        let active_id = self.active_layer().map(Layer::id);
        let layer = self.layers.remove(index);
        self.layers.insert(target, layer);
        self.renumber();
        if let Some(id) = active_id {
            self.active = self.layers.iter().position(|l| l.id() == id);
        }
        true
    }

    pub fn select_layer(&mut self, index: usize) -> bool {
        if index >= self.layers.len() {
            return false;
        }
        self.active = Some(index);
        true
    }

    pub fn toggle_visibility(&mut self, index: usize) -> bool {
        match self.layers.get_mut(index) {
            Some(layer) => {
                layer.set_visible(!layer.is_visible());
                true
            }
            None => false,
        }
    }

    pub fn set_layer_name(&mut self, index: usize, name: &str) -> bool {
        match self.layers.get_mut(index) {
            Some(layer) => {
                layer.set_name(name);
                true
            }
            None => false,
        }
    }

    pub fn set_layer_alpha(&mut self, index: usize, alpha: f32) -> bool {
        match self.layers.get_mut(index) {
            Some(layer) => {
                layer.set_alpha(alpha);
                true
            }
            None => false,
        }
    }

    /// Writes a pixel into the active layer, in that layer's local
    /// coordinates. Returns `false` without an active raster layer or when the
    /// pixel falls outside of it.
    pub fn set_active_layer_pixel(&mut self, x: i32, y: i32, color: Color) -> bool {
        self.active_layer_mut()
            .is_some_and(|layer| layer.set_pixel(x, y, color))
    }

    pub fn move_active_layer(&mut self, delta: Vec2) -> bool {
        self.active_layer_mut()
            .map(|layer| layer.translate(delta))
            .is_some()
    }

    /// Sets the rotation of the active layer, in degrees.
    pub fn rotate_active_layer(&mut self, degrees: f32) -> bool {
        self.active_layer_mut()
            .map(|layer| layer.set_rotation(degrees))
            .is_some()
    }

    pub fn set_active_layer_x(&mut self, x: f32) -> bool {
        self.active_layer_mut()
            .map(|layer| layer.set_position(Pos2::new(x, layer.position().y)))
            .is_some()
    }

    pub fn set_active_layer_y(&mut self, y: f32) -> bool {
        self.active_layer_mut()
            .map(|layer| layer.set_position(Pos2::new(layer.position().x, y)))
            .is_some()
    }
}
