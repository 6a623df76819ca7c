/// The host's "run again next frame" primitive.
///
/// The frame driver calls this between iterations; it is the loop's only
/// yield point besides the detector call.
pub trait FrameScheduler: Send {
    fn wait_for_next_frame(&mut self);
}
