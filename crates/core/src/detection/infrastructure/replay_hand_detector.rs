use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::detection::domain::hand_detector::{EstimationOptions, HandDetector};
use crate::detection::domain::hand_landmarks::{DetectionFrame, Hand, Landmark};
use crate::shared::frame::Frame;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read detections from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse detections: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct Recording {
    frames: Vec<Vec<Option<RecordedHand>>>,
}

#[derive(Deserialize)]
struct RecordedHand {
    #[serde(default)]
    keypoints: Option<Vec<Option<RecordedKeypoint>>>,
}

#[derive(Deserialize)]
struct RecordedKeypoint {
    x: f32,
    y: f32,
}

impl RecordedHand {
    fn into_hand(self) -> Hand {
        match self.keypoints {
            Some(points) => Hand::from_slots(
                points
                    .into_iter()
                    .map(|kp| kp.map(|kp| Landmark::new(kp.x, kp.y))),
            ),
            None => Hand::empty(),
        }
    }
}

/// Plays back previously recorded detector output, one entry per call.
///
/// Recorded coordinates are un-mirrored camera space; `flip_horizontal`
/// mirrors them against the width of the frame passed in. Once the recording
/// is exhausted every call reports zero hands.
pub struct ReplayHandDetector {
    frames: Vec<DetectionFrame>,
    cursor: usize,
}

impl ReplayHandDetector {
    pub fn new(frames: Vec<DetectionFrame>) -> Self {
        Self { frames, cursor: 0 }
    }

    pub fn from_path(path: &Path) -> Result<Self, ReplayError> {
        let json = fs::read_to_string(path).map_err(|source| ReplayError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ReplayError> {
        let recording: Recording = serde_json::from_str(json)?;
        let frames = recording
            .frames
            .into_iter()
            .map(|hands| {
                DetectionFrame::new(
                    hands
                        .into_iter()
                        .flatten()
                        .map(RecordedHand::into_hand)
                        .collect(),
                )
            })
            .collect();
        Ok(Self::new(frames))
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.frames.len().saturating_sub(self.cursor)
    }
}

impl HandDetector for ReplayHandDetector {
    fn estimate_hands(
        &mut self,
        frame: &Frame,
        options: &EstimationOptions,
    ) -> Result<DetectionFrame, Box<dyn std::error::Error>> {
        let Some(recorded) = self.frames.get(self.cursor) else {
            return Ok(DetectionFrame::empty());
        };
        self.cursor += 1;

        let mut detected = if options.flip_horizontal {
            let width = frame.width() as f32;
            DetectionFrame::new(
                recorded
                    .hands()
                    .iter()
                    .map(|hand| hand.mirrored(width))
                    .collect(),
            )
        } else {
            recorded.clone()
        };
        detected.truncate(options.max_hands);
        Ok(detected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::domain::hand_landmarks::{PINKY_TIP, WRIST};
    use approx::assert_relative_eq;

    fn options(flip: bool, max_hands: usize) -> EstimationOptions {
        EstimationOptions {
            flip_horizontal: flip,
            max_hands,
        }
    }

    fn frame() -> Frame {
        Frame::blank(640, 480, 0)
    }

    #[test]
    fn test_plays_frames_in_order_then_empty() {
        let json = r#"{"frames": [
            [{"keypoints": [{"x": 10.0, "y": 20.0}]}],
            [],
            [{"keypoints": []}, {"keypoints": []}]
        ]}"#;
        let mut detector = ReplayHandDetector::from_json(json).unwrap();
        assert_eq!(detector.len(), 3);

        let opts = options(false, 2);
        assert_eq!(detector.estimate_hands(&frame(), &opts).unwrap().len(), 1);
        assert_eq!(detector.estimate_hands(&frame(), &opts).unwrap().len(), 0);
        assert_eq!(detector.estimate_hands(&frame(), &opts).unwrap().len(), 2);
        assert_eq!(detector.remaining(), 0);
        assert!(detector.estimate_hands(&frame(), &opts).unwrap().is_empty());
    }

    #[test]
    fn test_null_keypoints_become_empty_slots() {
        let json = r#"{"frames": [[{"keypoints": [{"x": 1.0, "y": 2.0}, null, {"x": 3.0, "y": 4.0}]}]]}"#;
        let mut detector = ReplayHandDetector::from_json(json).unwrap();
        let detected = detector.estimate_hands(&frame(), &options(false, 2)).unwrap();
        let hand = &detected.hands()[0];
        assert!(hand.landmark(WRIST).is_some());
        assert!(hand.landmark(1).is_none());
        assert!(hand.landmark(2).is_some());
        assert!(hand.landmark(PINKY_TIP).is_none());
    }

    #[test]
    fn test_missing_keypoint_sequence_is_empty_hand() {
        let json = r#"{"frames": [[{"keypoints": null}, {}]]}"#;
        let mut detector = ReplayHandDetector::from_json(json).unwrap();
        let detected = detector.estimate_hands(&frame(), &options(false, 2)).unwrap();
        assert_eq!(detected.len(), 2);
        assert!(detected.hands().iter().all(|h| !h.has_landmarks()));
    }

    #[test]
    fn test_null_hand_is_dropped() {
        let json = r#"{"frames": [[null, {"keypoints": []}]]}"#;
        let mut detector = ReplayHandDetector::from_json(json).unwrap();
        let detected = detector.estimate_hands(&frame(), &options(false, 2)).unwrap();
        assert_eq!(detected.len(), 1);
    }

    #[test]
    fn test_flip_mirrors_against_frame_width() {
        let json = r#"{"frames": [[{"keypoints": [{"x": 100.0, "y": 50.0}]}]]}"#;
        let mut detector = ReplayHandDetector::from_json(json).unwrap();
        let detected = detector.estimate_hands(&frame(), &options(true, 2)).unwrap();
        let wrist = detected.hands()[0].landmark(WRIST).unwrap();
        assert_relative_eq!(wrist.x, 540.0);
        assert_relative_eq!(wrist.y, 50.0);
    }

    #[test]
    fn test_max_hands_keeps_first() {
        let json = r#"{"frames": [[
            {"keypoints": [{"x": 1.0, "y": 0.0}]},
            {"keypoints": [{"x": 2.0, "y": 0.0}]},
            {"keypoints": [{"x": 3.0, "y": 0.0}]}
        ]]}"#;
        let mut detector = ReplayHandDetector::from_json(json).unwrap();
        let detected = detector.estimate_hands(&frame(), &options(false, 2)).unwrap();
        assert_eq!(detected.len(), 2);
        assert_relative_eq!(detected.hands()[1].landmark(WRIST).unwrap().x, 2.0);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            ReplayHandDetector::from_json("{\"frames\": 3}"),
            Err(ReplayError::Parse(_))
        ));
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hands.json");
        fs::write(&path, r#"{"frames": [[], []]}"#).unwrap();
        let detector = ReplayHandDetector::from_path(&path).unwrap();
        assert_eq!(detector.len(), 2);
        assert!(!detector.is_empty());
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            ReplayHandDetector::from_path(&dir.path().join("nope.json")),
            Err(ReplayError::Read { .. })
        ));
    }
}
