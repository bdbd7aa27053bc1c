use std::rc::Rc;

use egui::Vec2;
use log::trace;

use crate::color::Color;
use crate::error::{CanvasError, check_dimensions};
use crate::layer::{Layer, factory};
use crate::layer_manager::LayerManager;
use crate::listener::{
    CanvasUpdateListener, LayerUpdateEvent, LayerUpdateKind, LayerUpdateListener, ListenerList,
};
use crate::memento::CanvasMemento;
use crate::raster::Pixel;
use crate::renderer::{Renderer, Viewport};

/// The layer stack of a document together with its observers.
///
/// Every change that goes through the canvas notifies the layer listeners
/// first and then the canvas listeners. Cloning deep-copies the layers but
/// shares the listeners.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    layers: LayerManager,
    canvas_listeners: ListenerList<dyn CanvasUpdateListener>,
    layer_listeners: ListenerList<dyn LayerUpdateListener>,
}

impl PartialEq for Canvas {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.layers == other.layers
    }
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            layers: LayerManager::new(),
            canvas_listeners: ListenerList::default(),
            layer_listeners: ListenerList::default(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layer_manager(&self) -> &LayerManager {
        &self.layers
    }

    pub fn layers(&self) -> &[Layer] {
        self.layers.layers()
    }

    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.layer(index)
    }

    pub fn active_layer(&self) -> Option<&Layer> {
        self.layers.active_layer()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.layers.active_index()
    }

    /// Transparent raster layer covering the whole canvas. Not added.
    pub fn new_raster_layer(&self, name: &str) -> Result<Layer, CanvasError> {
        factory::create_raster(name, self.width, self.height)
    }

    pub fn add_canvas_listener(&self, listener: Rc<dyn CanvasUpdateListener>) -> Result<(), CanvasError> {
        self.canvas_listeners.add(listener)
    }

    pub fn remove_canvas_listener(&self, listener: &Rc<dyn CanvasUpdateListener>) -> bool {
        self.canvas_listeners.remove(listener)
    }

    pub fn add_layer_listener(&self, listener: Rc<dyn LayerUpdateListener>) -> Result<(), CanvasError> {
        self.layer_listeners.add(listener)
    }

    pub fn remove_layer_listener(&self, listener: &Rc<dyn LayerUpdateListener>) -> bool {
        self.layer_listeners.remove(listener)
    }

    fn notify(&self, kind: LayerUpdateKind, added: Option<&Layer>, removed: Option<&Layer>) {
        let event = LayerUpdateEvent {
            kind,
            added,
            removed,
            selected: self.layers.active_layer(),
            layers: self.layers.layers(),
        };
        trace!(
            "layer update {:?}, notifying {} layer and {} canvas listeners",
            kind,
            self.layer_listeners.len(),
            self.canvas_listeners.len()
        );
        self.layer_listeners.for_each(|l| l.layer_updated(&event));
        self.canvas_listeners.for_each(|l| l.canvas_updated());
    }

    /// Asks the canvas listeners to repaint without changing any layer, e.g.
    /// for a tool preview drawn on top of the canvas.
    pub fn request_repaint(&self) {
        trace!("repaint requested, notifying {} canvas listeners", self.canvas_listeners.len());
        self.canvas_listeners.for_each(|l| l.canvas_updated());
    }

    fn notify_if(&self, changed: bool, kind: LayerUpdateKind) -> bool {
        if changed {
            self.notify(kind, None, None);
        }
        changed
    }

    /// Adds `layer` on top of the stack and selects it. Ignored if the very
    /// same layer is already on the canvas.
    pub fn add_layer(&mut self, layer: Layer) -> bool {
        if !self.layers.add_layer(layer) {
            return false;
        }
        self.notify(LayerUpdateKind::Created, self.layers.active_layer(), None);
        true
    }

    pub fn remove_layer(&mut self, index: usize) -> Option<Layer> {
        let removed = self.layers.remove_layer(index)?;
        self.notify(LayerUpdateKind::Removed, None, Some(&removed));
        Some(removed)
    }

    pub fn select_layer(&mut self, index: usize) -> bool {
        let changed = self.layers.select_layer(index);
        self.notify_if(changed, LayerUpdateKind::Selected)
    }

    pub fn change_depth_index(&mut self, index: usize, dz: isize) -> bool {
        let changed = self.layers.change_depth_index(index, dz);
        self.notify_if(changed, LayerUpdateKind::Edited)
    }

    pub fn toggle_visibility(&mut self, index: usize) -> bool {
        let changed = self.layers.toggle_visibility(index);
        self.notify_if(changed, LayerUpdateKind::VisibilityToggled)
    }

    pub fn set_layer_name(&mut self, index: usize, name: &str) -> bool {
        let changed = self.layers.set_layer_name(index, name);
        self.notify_if(changed, LayerUpdateKind::Edited)
    }

    pub fn set_layer_alpha(&mut self, index: usize, alpha: f32) -> bool {
        let changed = self.layers.set_layer_alpha(index, alpha);
        self.notify_if(changed, LayerUpdateKind::Edited)
    }

    pub fn set_active_layer_pixel(&mut self, x: i32, y: i32, color: Color) -> bool {
        let changed = self.layers.set_active_layer_pixel(x, y, color);
        self.notify_if(changed, LayerUpdateKind::Edited)
    }

    /// Writes a batch of pixels into the active layer and notifies once.
    /// Returns how many pixels landed inside the layer.
    pub fn set_active_layer_pixels(&mut self, pixels: &[Pixel]) -> usize {
        let written = pixels
            .iter()
            .filter(|p| self.layers.set_active_layer_pixel(p.x, p.y, p.color))
            .count();
        self.notify_if(written > 0, LayerUpdateKind::Edited);
        written
    }

    pub fn move_active_layer(&mut self, delta: Vec2) -> bool {
        let changed = self.layers.move_active_layer(delta);
        self.notify_if(changed, LayerUpdateKind::PositionChanged)
    }

    pub fn rotate_active_layer(&mut self, degrees: f32) -> bool {
        let changed = self.layers.rotate_active_layer(degrees);
        self.notify_if(changed, LayerUpdateKind::Edited)
    }

    pub fn set_active_layer_x(&mut self, x: f32) -> bool {
        let changed = self.layers.set_active_layer_x(x);
        self.notify_if(changed, LayerUpdateKind::PositionChanged)
    }

    pub fn set_active_layer_y(&mut self, y: f32) -> bool {
        let changed = self.layers.set_active_layer_y(y);
        self.notify_if(changed, LayerUpdateKind::PositionChanged)
    }

    /// Deep copy of the current layer stack.
    pub fn create_snapshot(&self) -> CanvasMemento {
        CanvasMemento::new(self.layers.clone())
    }

    /// Replaces the whole layer stack with the snapshot's and notifies both
    /// listener families.
    pub fn restore(&mut self, memento: CanvasMemento) {
        self.layers = memento.into_layers();
        self.layers.resolve_active();
        self.notify(LayerUpdateKind::Edited, None, None);
    }

    /// Draws all visible layers, bottom first.
    pub fn draw(&self, renderer: &mut dyn Renderer, viewport: &Viewport) {
        for layer in self.layers.layers() {
            layer.draw(renderer, viewport);
        }
    }
}
