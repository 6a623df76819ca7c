use crate::shared::frame::Frame;
use crate::video::domain::video_source::VideoSource;

/// Produces black frames at a fixed resolution.
///
/// Stands in for a camera when detections come from a recording and the
/// pixels are irrelevant. `limit` bounds the number of frames; `None` runs
/// until cancelled.
pub struct BlankVideoSource {
    width: u32,
    height: u32,
    limit: Option<usize>,
    produced: usize,
}

impl BlankVideoSource {
    pub fn new(width: u32, height: u32, limit: Option<usize>) -> Self {
        Self {
            width,
            height,
            limit,
            produced: 0,
        }
    }
}

impl VideoSource for BlankVideoSource {
    fn next_frame(&mut self) -> Result<Option<Frame>, Box<dyn std::error::Error>> {
        if self.limit.is_some_and(|limit| self.produced >= limit) {
            return Ok(None);
        }
        let frame = Frame::blank(self.width, self.height, self.produced);
        self.produced += 1;
        Ok(Some(frame))
    }

    fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
