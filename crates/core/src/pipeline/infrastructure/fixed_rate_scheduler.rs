use std::time::{Duration, Instant};

use crate::pipeline::frame_scheduler::FrameScheduler;

/// Paces iterations to at most `fps` per second.
///
/// Sleeps only for the part of the frame interval not already spent in the
/// iteration, so a slow detector throttles the loop instead of queueing
/// work behind it.
pub struct FixedRateScheduler {
    interval: Duration,
    last_tick: Option<Instant>,
}

impl FixedRateScheduler {
    pub fn new(fps: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / fps.max(1),
            last_tick: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl FrameScheduler for FixedRateScheduler {
    fn wait_for_next_frame(&mut self) {
        if let Some(last) = self.last_tick {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                std::thread::sleep(self.interval - elapsed);
            }
        }
        self.last_tick = Some(Instant::now());
    }
}

/// Runs the next iteration right away. For replays and tests.
#[derive(Default)]
pub struct ImmediateScheduler {
    ticks: usize,
}

impl ImmediateScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ticks(&self) -> usize {
        self.ticks
    }
}

impl FrameScheduler for ImmediateScheduler {
    fn wait_for_next_frame(&mut self) {
        self.ticks += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_from_fps() {
        assert_eq!(
            FixedRateScheduler::new(50).interval(),
            Duration::from_millis(20)
        );
    }

    #[test]
    fn test_zero_fps_is_clamped() {
        assert_eq!(FixedRateScheduler::new(0).interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_first_wait_does_not_sleep() {
        let mut scheduler = FixedRateScheduler::new(1);
        let start = Instant::now();
        scheduler.wait_for_next_frame();
        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[test]
    fn test_second_wait_paces_to_interval() {
        let mut scheduler = FixedRateScheduler::new(50);
        scheduler.wait_for_next_frame();
        let start = Instant::now();
        scheduler.wait_for_next_frame();
        assert!(start.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn test_immediate_counts_ticks() {
        let mut scheduler = ImmediateScheduler::new();
        scheduler.wait_for_next_frame();
        scheduler.wait_for_next_frame();
        assert_eq!(scheduler.ticks(), 2);
    }
}
