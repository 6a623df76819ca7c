use crate::detection::domain::hand_landmarks::{Hand, LIFT_FINGERTIPS, WRIST};
use crate::shared::constants::DEFAULT_LIFT_THRESHOLD;

/// Domain interface for classifying a single hand's pose.
pub trait PosePredicate: Send {
    fn is_satisfied(&self, hand: &Hand) -> bool;
}

/// Holds when the index, middle, ring and pinky tips all sit more than
/// `threshold` pixels above the wrist.
///
/// The threshold is in raw pixels and tuned for 640x480 capture. It is not
/// normalized for resolution or hand-to-camera distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LiftedHandPredicate {
    threshold: f32,
}

impl LiftedHandPredicate {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

impl Default for LiftedHandPredicate {
    fn default() -> Self {
        Self::new(DEFAULT_LIFT_THRESHOLD)
    }
}

impl PosePredicate for LiftedHandPredicate {
    fn is_satisfied(&self, hand: &Hand) -> bool {
        let Some(wrist) = hand.landmark(WRIST) else {
            return false;
        };
        LIFT_FINGERTIPS.iter().all(|&tip| {
            hand.landmark(tip)
                .is_some_and(|tip| wrist.y - tip.y > self.threshold)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::domain::hand_landmarks::{
        Landmark, INDEX_FINGER_TIP, LANDMARK_COUNT, MIDDLE_FINGER_TIP, PINKY_TIP,
        RING_FINGER_TIP, THUMB_TIP,
    };
    use rstest::rstest;

    /// Wrist at y=0, the four lift fingertips at `tip_y`.
    fn hand_with_tips(tip_y: f32) -> [Option<Landmark>; LANDMARK_COUNT] {
        let mut slots = [None; LANDMARK_COUNT];
        slots[WRIST] = Some(Landmark::new(320.0, 0.0));
        for tip in LIFT_FINGERTIPS {
            slots[tip] = Some(Landmark::new(320.0, tip_y));
        }
        slots
    }

    #[test]
    fn test_all_tips_well_above_wrist() {
        let hand = Hand::new(hand_with_tips(-71.0));
        assert!(LiftedHandPredicate::default().is_satisfied(&hand));
    }

    #[test]
    fn test_exactly_threshold_is_not_lifted() {
        let hand = Hand::new(hand_with_tips(-70.0));
        assert!(!LiftedHandPredicate::default().is_satisfied(&hand));
    }

    #[rstest]
    #[case::index(INDEX_FINGER_TIP)]
    #[case::middle(MIDDLE_FINGER_TIP)]
    #[case::ring(RING_FINGER_TIP)]
    #[case::pinky(PINKY_TIP)]
    fn test_one_low_fingertip_fails(#[case] tip: usize) {
        let mut slots = hand_with_tips(-200.0);
        slots[tip] = Some(Landmark::new(320.0, -69.0));
        assert!(!LiftedHandPredicate::default().is_satisfied(&Hand::new(slots)));
    }

    #[rstest]
    #[case::index(INDEX_FINGER_TIP)]
    #[case::middle(MIDDLE_FINGER_TIP)]
    #[case::ring(RING_FINGER_TIP)]
    #[case::pinky(PINKY_TIP)]
    fn test_one_missing_fingertip_fails(#[case] tip: usize) {
        let mut slots = hand_with_tips(-200.0);
        slots[tip] = None;
        assert!(!LiftedHandPredicate::default().is_satisfied(&Hand::new(slots)));
    }

    #[test]
    fn test_missing_wrist_fails() {
        let mut slots = hand_with_tips(-200.0);
        slots[WRIST] = None;
        assert!(!LiftedHandPredicate::default().is_satisfied(&Hand::new(slots)));
    }

    #[test]
    fn test_empty_hand_fails() {
        assert!(!LiftedHandPredicate::default().is_satisfied(&Hand::empty()));
    }

    #[test]
    fn test_thumb_is_ignored() {
        let mut slots = hand_with_tips(-100.0);
        slots[THUMB_TIP] = Some(Landmark::new(320.0, 500.0));
        assert!(LiftedHandPredicate::default().is_satisfied(&Hand::new(slots)));
        slots[THUMB_TIP] = None;
        assert!(LiftedHandPredicate::default().is_satisfied(&Hand::new(slots)));
    }

    #[test]
    fn test_pointing_down_is_not_lifted() {
        let hand = Hand::new(hand_with_tips(150.0));
        assert!(!LiftedHandPredicate::default().is_satisfied(&hand));
    }

    #[test]
    fn test_custom_threshold() {
        let hand = Hand::new(hand_with_tips(-40.0));
        assert!(LiftedHandPredicate::new(30.0).is_satisfied(&hand));
        assert!(!LiftedHandPredicate::new(50.0).is_satisfied(&hand));
    }

    #[test]
    fn test_wrist_offset_is_relative() {
        let mut slots = hand_with_tips(320.0);
        slots[WRIST] = Some(Landmark::new(320.0, 400.0));
        // 400 - 320 = 80 > 70
        assert!(LiftedHandPredicate::default().is_satisfied(&Hand::new(slots)));
    }
}
