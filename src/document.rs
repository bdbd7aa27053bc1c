use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::CanvasError;
use crate::memento::DocumentMemento;

/// The editable model: a canvas and the current drawing color.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    canvas: Canvas,
    color: Color,
}

impl Document {
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        Ok(Self::with_canvas(Canvas::new(width, height)?))
    }

    pub fn with_canvas(canvas: Canvas) -> Self {
        Self {
            canvas,
            color: Color::BLACK,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Snapshot of everything an undo may need to roll back.
    pub fn create_memento(&self) -> DocumentMemento {
        DocumentMemento::new(self.canvas.create_snapshot(), self.color)
    }

    pub fn restore(&mut self, memento: DocumentMemento) {
        let (canvas, color) = memento.into_parts();
        self.color = color;
        self.canvas.restore(canvas);
    }
}
