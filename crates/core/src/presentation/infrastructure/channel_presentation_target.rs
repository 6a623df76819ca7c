use crossbeam_channel::{Receiver, Sender};

use crate::presentation::domain::presentation_target::PresentationTarget;
use crate::shared::color::Color;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PresentationEvent {
    Background(Color),
    Status(String),
}

/// Forwards presentation updates over a channel to whichever thread owns
/// the actual display.
///
/// A disconnected receiver is ignored; the pipeline keeps running.
pub struct ChannelPresentationTarget {
    tx: Sender<PresentationEvent>,
}

impl ChannelPresentationTarget {
    pub fn new(tx: Sender<PresentationEvent>) -> Self {
        Self { tx }
    }

    /// Creates a target paired with the receiving end of an unbounded channel.
    pub fn channel() -> (Self, Receiver<PresentationEvent>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self::new(tx), rx)
    }
}

impl PresentationTarget for ChannelPresentationTarget {
    fn set_background(&mut self, color: Color) {
        let _ = self.tx.send(PresentationEvent::Background(color));
    }

    fn set_status(&mut self, text: &str) {
        let _ = self.tx.send(PresentationEvent::Status(text.to_string()));
    }
}
