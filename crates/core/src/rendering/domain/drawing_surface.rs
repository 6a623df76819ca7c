/// Primitive drawing calls used by the skeleton overlay.
///
/// Coordinates are frame pixels. Fill and stroke styling belong to the
/// implementation.
pub trait DrawingSurface: Send {
    fn clear(&mut self);

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32);

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);

    /// Called once per frame after all hands are drawn. Default: no-op.
    fn present(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}
