use crate::detection::domain::hand_landmarks::Hand;
use crate::rendering::domain::drawing_surface::DrawingSurface;
use crate::shared::constants::DEFAULT_POINT_RADIUS;

/// Bones of the 21-point hand, as landmark index pairs.
pub const HAND_CONNECTIONS: [[usize; 2]; 23] = [
    // thumb
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 4],
    // index
    [0, 5],
    [5, 6],
    [6, 7],
    [7, 8],
    // middle
    [0, 9],
    [9, 10],
    [10, 11],
    [11, 12],
    // ring
    [0, 13],
    [13, 14],
    [14, 15],
    [15, 16],
    // pinky
    [0, 17],
    [17, 18],
    [18, 19],
    [19, 20],
    // palm
    [5, 9],
    [9, 13],
    [13, 17],
];

/// Draws a hand as dots on every present landmark joined by bone lines.
///
/// Bones with a missing endpoint are skipped. The renderer never clears
/// the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkeletonRenderer {
    point_radius: f32,
}

impl SkeletonRenderer {
    pub fn new(point_radius: f32) -> Self {
        Self { point_radius }
    }

    pub fn draw_hand(&self, hand: &Hand, surface: &mut dyn DrawingSurface) {
        for (_, lm) in hand.present() {
            surface.fill_circle(lm.x, lm.y, self.point_radius);
        }

        for [a, b] in HAND_CONNECTIONS {
            if let (Some(p), Some(q)) = (hand.landmark(a), hand.landmark(b)) {
                surface.draw_line(p.x, p.y, q.x, q.y);
            }
        }
    }
}

impl Default for SkeletonRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_POINT_RADIUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::domain::hand_landmarks::{Landmark, LANDMARK_COUNT};
    use crate::rendering::infrastructure::recording_surface::{DrawCall, RecordingSurface};
    use rstest::rstest;

    fn hand_with(indices: &[usize]) -> Hand {
        let mut slots = [None; LANDMARK_COUNT];
        for &i in indices {
            slots[i] = Some(Landmark::new(i as f32 * 10.0, i as f32 * 5.0));
        }
        Hand::new(slots)
    }

    fn counts(surface: &RecordingSurface) -> (usize, usize) {
        let circles = surface
            .calls()
            .iter()
            .filter(|c| matches!(c, DrawCall::Circle { .. }))
            .count();
        let lines = surface
            .calls()
            .iter()
            .filter(|c| matches!(c, DrawCall::Line { .. }))
            .count();
        (circles, lines)
    }

    #[test]
    fn test_topology_has_no_duplicate_or_out_of_range_pairs() {
        for (i, [a, b]) in HAND_CONNECTIONS.iter().enumerate() {
            assert!(*a < LANDMARK_COUNT && *b < LANDMARK_COUNT);
            assert_ne!(a, b);
            for [c, d] in &HAND_CONNECTIONS[i + 1..] {
                assert!(!(a == c && b == d) && !(a == d && b == c));
            }
        }
    }

    #[test]
    fn test_full_hand_draws_every_point_and_bone() {
        let hand = hand_with(&(0..LANDMARK_COUNT).collect::<Vec<_>>());
        let mut surface = RecordingSurface::new();
        SkeletonRenderer::default().draw_hand(&hand, &mut surface);
        assert_eq!(counts(&surface), (21, 23));
    }

    #[rstest]
    #[case::wrist_and_index_tip(&[0, 8], (2, 0))]
    #[case::wrist_only(&[0], (1, 0))]
    #[case::thumb_chain(&[0, 1, 2, 3, 4], (5, 4))]
    #[case::palm_knuckles(&[5, 9, 13, 17], (4, 3))]
    #[case::wrist_and_knuckles(&[0, 5, 9, 13, 17], (5, 7))]
    #[case::nothing(&[], (0, 0))]
    fn test_missing_landmarks_skip_bones(
        #[case] present: &[usize],
        #[case] expected: (usize, usize),
    ) {
        let mut surface = RecordingSurface::new();
        SkeletonRenderer::default().draw_hand(&hand_with(present), &mut surface);
        assert_eq!(counts(&surface), expected);
    }

    #[test]
    fn test_circles_use_landmark_coordinates_and_radius() {
        let mut surface = RecordingSurface::new();
        SkeletonRenderer::new(7.0).draw_hand(&hand_with(&[0, 1]), &mut surface);
        assert_eq!(
            surface.calls(),
            &[
                DrawCall::Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: 7.0
                },
                DrawCall::Circle {
                    x: 10.0,
                    y: 5.0,
                    radius: 7.0
                },
                DrawCall::Line {
                    x1: 0.0,
                    y1: 0.0,
                    x2: 10.0,
                    y2: 5.0
                },
            ]
        );
    }

    #[test]
    fn test_renderer_does_not_clear() {
        let mut surface = RecordingSurface::new();
        SkeletonRenderer::default().draw_hand(&hand_with(&[0]), &mut surface);
        assert_eq!(surface.clear_count(), 0);
    }
}
