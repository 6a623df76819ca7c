//! Turns a stream of hand-landmark detections into a debounced
//! "hand lifted" event that cycles a background color, with a skeleton
//! overlay of every detected hand.
//!
//! Each area is split into `domain` (ports and pure logic) and
//! `infrastructure` (adapters for concrete sources, surfaces and targets).

pub mod detection;
pub mod gesture;
pub mod pipeline;
pub mod presentation;
pub mod rendering;
pub mod shared;
pub mod video;
