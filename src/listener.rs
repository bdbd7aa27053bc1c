use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::CanvasError;
use crate::layer::Layer;

/// Receives a "something changed, repaint" notification.
pub trait CanvasUpdateListener {
    fn canvas_updated(&self);
}

impl<F: Fn()> CanvasUpdateListener for F {
    fn canvas_updated(&self) {
        self()
    }
}

/// What happened to the layer stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerUpdateKind {
    Created,
    Removed,
    Edited,
    Selected,
    PositionChanged,
    VisibilityToggled,
}

/// Structured layer notification. All references point into the canvas (or,
/// for `removed`, at the layer that just left it) and are only valid for the
/// duration of the callback.
#[derive(Debug, Clone, Copy)]
pub struct LayerUpdateEvent<'a> {
    pub kind: LayerUpdateKind,
    pub added: Option<&'a Layer>,
    pub removed: Option<&'a Layer>,
    pub selected: Option<&'a Layer>,
    pub layers: &'a [Layer],
}

pub trait LayerUpdateListener {
    fn layer_updated(&self, event: &LayerUpdateEvent<'_>);
}

impl<F: Fn(&LayerUpdateEvent<'_>)> LayerUpdateListener for F {
    fn layer_updated(&self, event: &LayerUpdateEvent<'_>) {
        self(event)
    }
}

/// Ordered list of listener handles.
///
/// Clones share the same underlying list: listeners observe a document, they
/// are not part of it. Registering a handle that is already present is an
/// error. Listeners must not mutate the canvas they observe from within a
/// callback.
pub struct ListenerList<L: ?Sized> {
    listeners: Rc<RefCell<Vec<Rc<L>>>>,
}

impl<L: ?Sized> Clone for ListenerList<L> {
    fn clone(&self) -> Self {
        Self {
            listeners: Rc::clone(&self.listeners),
        }
    }
}

impl<L: ?Sized> Default for ListenerList<L> {
    fn default() -> Self {
        Self {
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<L: ?Sized> fmt::Debug for ListenerList<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerList")
            .field("listeners", &format!("<{} listeners>", self.len()))
            .finish()
    }
}

impl<L: ?Sized> ListenerList<L> {
    pub fn add(&self, listener: Rc<L>) -> Result<(), CanvasError> {
        let mut listeners = self.listeners.borrow_mut();
        if listeners.iter().any(|l| Rc::ptr_eq(l, &listener)) {
            return Err(CanvasError::DuplicateListener);
        }
        listeners.push(listener);
        Ok(())
    }

    /// Unregisters `listener`. Returns `false` if it was not registered.
    pub fn remove(&self, listener: &Rc<L>) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|l| !Rc::ptr_eq(l, listener));
        listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls `f` for every listener in registration order.
    pub fn for_each(&self, mut f: impl FnMut(&L)) {
        // Snapshot so a callback may register or remove listeners.
        let listeners = self.listeners.borrow().clone();
        for listener in &listeners {
            f(listener);
        }
    }
}
