use crate::rendering::domain::drawing_surface::DrawingSurface;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Circle { x: f32, y: f32, radius: f32 },
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
}

/// Keeps the draw calls issued since the last `clear()`.
///
/// Used for dry runs without an overlay image and by tests that assert on
/// exactly what was drawn.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
    clear_count: usize,
    present_count: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    pub fn present_count(&self) -> usize {
        self.present_count
    }
}

impl DrawingSurface for RecordingSurface {
    fn clear(&mut self) {
        self.calls.clear();
        self.clear_count += 1;
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32) {
        self.calls.push(DrawCall::Circle { x, y, radius });
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.calls.push(DrawCall::Line { x1, y1, x2, y2 });
    }

    fn present(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        log::trace!("presenting {} draw calls", self.calls.len());
        self.present_count += 1;
        Ok(())
    }
}
