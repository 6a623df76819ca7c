use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::Receiver;

use crate::pipeline::frame_driver::{FrameDriver, FrameReport, RunSummary};
use crate::pipeline::frame_scheduler::FrameScheduler;

pub enum DriverMessage {
    Frame(FrameReport),
    Finished(RunSummary),
}

/// A frame loop running on its own thread.
///
/// Dropping the handle does not stop the loop; call [`DriverHandle::stop`].
pub struct DriverHandle {
    messages: Receiver<DriverMessage>,
    cancelled: Arc<AtomicBool>,
    thread: JoinHandle<RunSummary>,
}

impl DriverHandle {
    pub fn messages(&self) -> &Receiver<DriverMessage> {
        &self.messages
    }

    /// Asks the loop to stop after the iteration in flight.
    pub fn stop(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Waits for the loop thread to exit.
    pub fn join(self) -> Result<RunSummary, Box<dyn std::error::Error>> {
        self.thread
            .join()
            .map_err(|_| "frame driver thread panicked".into())
    }
}

/// Moves `driver` onto a worker thread and starts its loop.
///
/// Every iteration is reported over the returned channel; a final
/// `Finished` message follows when the loop exits.
pub fn spawn(mut driver: FrameDriver, mut scheduler: Box<dyn FrameScheduler>) -> DriverHandle {
    let (tx, rx) = crossbeam_channel::unbounded::<DriverMessage>();
    let cancelled = Arc::new(AtomicBool::new(false));
    let cancelled_clone = cancelled.clone();

    let thread = thread::spawn(move || {
        let summary = driver.run_with(scheduler.as_mut(), &cancelled_clone, |report| {
            let _ = tx.send(DriverMessage::Frame(report.clone()));
        });
        let _ = tx.send(DriverMessage::Finished(summary.clone()));
        summary
    });

    DriverHandle {
        messages: rx,
        cancelled,
        thread,
    }
}
