use crate::shared::frame::Frame;

/// A live or recorded frame feed at a fixed resolution.
///
/// Capability negotiation (opening a camera, decoding headers) happens when
/// the source is constructed, before the frame loop starts.
pub trait VideoSource: Send {
    /// Returns the next frame, or `Ok(None)` once the feed has ended.
    fn next_frame(&mut self) -> Result<Option<Frame>, Box<dyn std::error::Error>>;

    fn resolution(&self) -> (u32, u32);
}
