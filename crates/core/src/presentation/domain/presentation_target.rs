use crate::shared::color::Color;

/// Where the current background color and status line are shown.
pub trait PresentationTarget: Send {
    fn set_background(&mut self, color: Color);

    fn set_status(&mut self, text: &str);
}
