use std::collections::BTreeMap;
use std::time::Instant;

/// Observer for frame loop events.
///
/// The frame driver reports through this port so each host picks its own
/// output (log lines, nothing at all) without touching the loop.
pub trait PipelineLogger: Send {
    /// Frame `index` finished.
    fn frame(&mut self, index: usize);

    /// Duration of a named stage (`capture`, `detect`, `render`) for one frame.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// A per-frame sample such as the hand count.
    fn metric(&mut self, name: &str, value: f64);

    /// A human-readable status line.
    fn info(&mut self, message: &str);

    /// End-of-run report. Default: no-op.
    fn summary(&self) {}
}

/// Discards everything.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn frame(&mut self, _index: usize) {}
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn metric(&mut self, _name: &str, _value: f64) {}
    fn info(&mut self, _message: &str) {}
}

/// Running aggregate of one stage or metric.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SampleStats {
    pub count: usize,
    pub total: f64,
    pub max: f64,
}

impl SampleStats {
    fn record(&mut self, value: f64) {
        if self.count == 0 || value > self.max {
            self.max = value;
        }
        self.count += 1;
        self.total += value;
    }

    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total / self.count as f64
        }
    }
}

/// Logs progress every `every_frames` frames and a per-stage breakdown
/// when the loop stops.
///
/// Keeps aggregates only, so memory stays flat on an unbounded camera feed.
pub struct StdoutPipelineLogger {
    every_frames: usize,
    stages: BTreeMap<String, SampleStats>,
    metrics: BTreeMap<String, SampleStats>,
    started: Instant,
    frames: usize,
    last_status: Option<String>,
}

impl StdoutPipelineLogger {
    pub fn new(every_frames: usize) -> Self {
        Self {
            every_frames: every_frames.max(1),
            stages: BTreeMap::new(),
            metrics: BTreeMap::new(),
            started: Instant::now(),
            frames: 0,
            last_status: None,
        }
    }

    pub fn stage_stats(&self, stage: &str) -> Option<SampleStats> {
        self.stages.get(stage).copied()
    }

    pub fn metric_stats(&self, name: &str) -> Option<SampleStats> {
        self.metrics.get(name).copied()
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn last_status(&self) -> Option<&str> {
        self.last_status.as_deref()
    }

    /// The end-of-run report, or `None` before any frame completed.
    pub fn report(&self) -> Option<String> {
        if self.frames == 0 {
            return None;
        }

        let elapsed_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        let fps = if elapsed_ms > 0.0 {
            self.frames as f64 * 1000.0 / elapsed_ms
        } else {
            0.0
        };
        let mut lines = vec![format!(
            "Frame loop: {} frames in {:.1}s ({fps:.1} fps)",
            self.frames,
            elapsed_ms / 1000.0
        )];

        for (stage, stats) in &self.stages {
            let share = if elapsed_ms > 0.0 {
                stats.total / elapsed_ms * 100.0
            } else {
                0.0
            };
            lines.push(format!(
                "  {stage:8} mean {:6.2}ms  max {:6.2}ms  ({share:4.1}%)",
                stats.mean(),
                stats.max
            ));
        }
        for (name, stats) in &self.metrics {
            lines.push(format!(
                "  {name:8} mean {:.2}  total {:.0}",
                stats.mean(),
                stats.total
            ));
        }

        Some(lines.join("\n"))
    }
}

impl Default for StdoutPipelineLogger {
    fn default() -> Self {
        Self::new(crate::shared::constants::DEFAULT_TARGET_FPS as usize)
    }
}

impl PipelineLogger for StdoutPipelineLogger {
    fn frame(&mut self, index: usize) {
        self.frames += 1;
        if self.frames % self.every_frames == 0 {
            log::info!("{} frames processed (frame {index})", self.frames);
        }
    }

    fn timing(&mut self, stage: &str, duration_ms: f64) {
        self.stages
            .entry(stage.to_string())
            .or_default()
            .record(duration_ms);
    }

    fn metric(&mut self, name: &str, value: f64) {
        self.metrics.entry(name.to_string()).or_default().record(value);
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
        self.last_status = Some(message.to_string());
    }

    fn summary(&self) {
        if let Some(report) = self.report() {
            log::info!("\n{report}");
        }
    }
}
