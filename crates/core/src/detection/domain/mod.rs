pub mod hand_detector;
pub mod hand_landmarks;
pub mod pose_predicate;
