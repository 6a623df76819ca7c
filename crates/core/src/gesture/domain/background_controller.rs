use crate::gesture::domain::cyclic_state::{CyclicState, CyclicStateError};
use crate::presentation::domain::presentation_target::PresentationTarget;
use crate::shared::color::Color;

/// Cycles the presentation background through a fixed palette.
///
/// The target is painted with the starting color on construction, so it
/// always shows the value at the current index.
pub struct BackgroundController {
    palette: CyclicState<Color>,
    target: Box<dyn PresentationTarget>,
}

impl BackgroundController {
    pub fn new(
        palette: Vec<Color>,
        mut target: Box<dyn PresentationTarget>,
    ) -> Result<Self, CyclicStateError> {
        let palette = CyclicState::new(palette)?;
        target.set_background(*palette.current());
        Ok(Self { palette, target })
    }

    /// Moves to the next color, applies it and announces it.
    pub fn advance(&mut self) -> Color {
        let color = *self.palette.advance();
        self.target.set_background(color);
        self.target
            .set_status(&format!("Background changed to {color}"));
        log::info!(
            "Background changed to {color} (index {})",
            self.palette.index()
        );
        color
    }

    pub fn current(&self) -> Color {
        *self.palette.current()
    }

    pub fn index(&self) -> usize {
        self.palette.index()
    }

    /// Forwards a status line without touching the palette.
    pub fn set_status(&mut self, text: &str) {
        self.target.set_status(text);
    }
}
