//! Level-to-edge conversion for the combined pose predicate.

use crate::detection::domain::hand_landmarks::DetectionFrame;
use crate::detection::domain::pose_predicate::PosePredicate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebounceState {
    /// The next true predicate fires an edge.
    Armed,
    /// An edge fired and the predicate has stayed true since.
    Fired,
}

/// Emits one event per maximal run of true predicate values.
///
/// Memory depth is one frame. A false value, including a frame with no
/// hands, re-arms it.
#[derive(Debug, Default)]
pub struct EdgeDebouncer {
    previous: bool,
}

impl EdgeDebouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one predicate value and returns whether a rising edge fired.
    pub fn update(&mut self, current: bool) -> bool {
        let fired = current && !self.previous;
        self.previous = current;
        fired
    }

    /// Folds a detection frame into the combined predicate (any hand
    /// satisfies it; no hands means false) and feeds it to [`Self::update`].
    pub fn observe(&mut self, frame: &DetectionFrame, predicate: &dyn PosePredicate) -> bool {
        self.update(combined_predicate(frame, predicate))
    }

    pub fn state(&self) -> DebounceState {
        if self.previous {
            DebounceState::Fired
        } else {
            DebounceState::Armed
        }
    }
}

pub fn combined_predicate(frame: &DetectionFrame, predicate: &dyn PosePredicate) -> bool {
    frame.hands().iter().any(|hand| predicate.is_satisfied(hand))
}
