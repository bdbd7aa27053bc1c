use egui::Pos2;

/// Mouse button attached to a pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MouseButton {
    #[default]
    None,
    Primary,
    Middle,
    Secondary,
}

/// Normalized pointer state in canvas coordinates. Translating native
/// windowing events into this is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseStatus {
    pub position: Pos2,
    pub button: MouseButton,
}

impl MouseStatus {
    pub fn new(position: Pos2, button: MouseButton) -> Self {
        Self { position, button }
    }

    pub fn primary(x: f32, y: f32) -> Self {
        Self::new(Pos2::new(x, y), MouseButton::Primary)
    }
}

/// One step of a press / drag / release gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Pressed(MouseStatus),
    Dragged(MouseStatus),
    Released(MouseStatus),
}

impl InputEvent {
    pub fn status(&self) -> MouseStatus {
        match self {
            InputEvent::Pressed(status)
            | InputEvent::Dragged(status)
            | InputEvent::Released(status) => *status,
        }
    }
}
