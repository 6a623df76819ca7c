//! 21-point hand landmarks in frame pixel space.
//!
//! Slots follow the standard hand topology (wrist, then four joints per
//! finger from thumb to pinky). A detector may fail to resolve some points,
//! so every slot is optional.

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_FINGER_TIP: usize = 8;
pub const MIDDLE_FINGER_TIP: usize = 12;
pub const RING_FINGER_TIP: usize = 16;
pub const PINKY_TIP: usize = 20;

/// Fingertips that must rise above the wrist for a lifted hand. Thumb excluded.
pub const LIFT_FINGERTIPS: [usize; 4] = [
    INDEX_FINGER_TIP,
    MIDDLE_FINGER_TIP,
    RING_FINGER_TIP,
    PINKY_TIP,
];

/// A 2D keypoint. `y` grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One detected hand. Carries no identity across frames.
#[derive(Clone, Debug, PartialEq)]
pub struct Hand {
    landmarks: [Option<Landmark>; LANDMARK_COUNT],
}

impl Hand {
    pub fn new(landmarks: [Option<Landmark>; LANDMARK_COUNT]) -> Self {
        Self { landmarks }
    }

    /// A hand whose landmark sequence is missing entirely.
    pub fn empty() -> Self {
        Self::new([None; LANDMARK_COUNT])
    }

    /// Builds a hand from detector output in slot order.
    ///
    /// Short sequences leave the trailing slots empty; entries past the
    /// last slot are ignored.
    pub fn from_slots<I>(slots: I) -> Self
    where
        I: IntoIterator<Item = Option<Landmark>>,
    {
        let mut landmarks = [None; LANDMARK_COUNT];
        for (slot, landmark) in landmarks.iter_mut().zip(slots) {
            *slot = landmark;
        }
        Self { landmarks }
    }

    pub fn landmark(&self, index: usize) -> Option<Landmark> {
        self.landmarks.get(index).copied().flatten()
    }

    pub fn landmarks(&self) -> &[Option<Landmark>; LANDMARK_COUNT] {
        &self.landmarks
    }

    pub fn has_landmarks(&self) -> bool {
        self.landmarks.iter().any(Option::is_some)
    }

    /// Present landmarks with their slot index.
    pub fn present(&self) -> impl Iterator<Item = (usize, Landmark)> + '_ {
        self.landmarks
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|lm| (i, lm)))
    }

    /// Mirrors every landmark about the vertical axis of a frame `width` wide.
    pub fn mirrored(&self, width: f32) -> Self {
        let mut landmarks = self.landmarks;
        for lm in landmarks.iter_mut().flatten() {
            lm.x = width - lm.x;
        }
        Self { landmarks }
    }
}

/// All hands found in one capture cycle. Consumed within one iteration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetectionFrame {
    hands: Vec<Hand>,
}

impl DetectionFrame {
    pub fn new(hands: Vec<Hand>) -> Self {
        Self { hands }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn len(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    /// Keeps the first `max` hands.
    pub fn truncate(&mut self, max: usize) {
        self.hands.truncate(max);
    }
}

impl From<Vec<Hand>> for DetectionFrame {
    fn from(hands: Vec<Hand>) -> Self {
        Self::new(hands)
    }
}
