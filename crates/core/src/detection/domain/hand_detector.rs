use crate::detection::domain::hand_landmarks::DetectionFrame;
use crate::shared::frame::Frame;

/// Per-call options forwarded to the hand detector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EstimationOptions {
    /// Report coordinates mirrored horizontally, for selfie-style display.
    pub flip_horizontal: bool,
    pub max_hands: usize,
}

impl Default for EstimationOptions {
    fn default() -> Self {
        Self {
            flip_horizontal: true,
            max_hands: crate::shared::constants::DEFAULT_MAX_HANDS,
        }
    }
}

/// Domain interface for hand pose estimation.
///
/// Implementations may be stateful (e.g., a model session), hence `&mut self`.
/// A call blocks until the detector resolves; there is no timeout.
pub trait HandDetector: Send {
    fn estimate_hands(
        &mut self,
        frame: &Frame,
        options: &EstimationOptions,
    ) -> Result<DetectionFrame, Box<dyn std::error::Error>>;

    /// Whether the model has finished loading. Callers skip detection
    /// while this is false.
    fn is_ready(&self) -> bool {
        true
    }
}
