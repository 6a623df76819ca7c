use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crate::detection::domain::hand_detector::{EstimationOptions, HandDetector};
use crate::detection::domain::hand_landmarks::DetectionFrame;
use crate::detection::domain::pose_predicate::{LiftedHandPredicate, PosePredicate};
use crate::gesture::domain::background_controller::BackgroundController;
use crate::gesture::domain::edge_debouncer::{DebounceState, EdgeDebouncer};
use crate::pipeline::frame_scheduler::FrameScheduler;
use crate::pipeline::pipeline_logger::{NullPipelineLogger, PipelineLogger};
use crate::presentation::domain::presentation_target::PresentationTarget;
use crate::rendering::domain::drawing_surface::DrawingSurface;
use crate::rendering::domain::skeleton_renderer::SkeletonRenderer;
use crate::shared::color::Color;
use crate::shared::config::{ConfigError, GestureConfig};
use crate::shared::frame::Frame;
use crate::video::domain::video_source::VideoSource;

/// What happened during one iteration.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameReport {
    /// Zero-based iteration count.
    pub index: usize,
    pub hands: usize,
    /// Combined predicate: any hand lifted.
    pub lifted: bool,
    /// A rising edge fired and the background advanced.
    pub edge: bool,
    pub background: Color,
    pub palette_index: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TickOutcome {
    Processed(FrameReport),
    /// The video source has no more frames.
    EndOfStream,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub frames: usize,
    pub edges: usize,
    pub background: Color,
    pub palette_index: usize,
}

/// Runs the capture → detect → render → debounce → advance loop.
///
/// Owns all cross-frame state: the debounce bit and the palette cursor.
/// Per-frame failures (capture errors, a detector that is not ready or
/// errors out) count as a frame with zero hands and never stop the loop.
pub struct FrameDriver {
    source: Box<dyn VideoSource>,
    detector: Box<dyn HandDetector>,
    surface: Box<dyn DrawingSurface>,
    renderer: SkeletonRenderer,
    predicate: Box<dyn PosePredicate>,
    debouncer: EdgeDebouncer,
    controller: BackgroundController,
    options: EstimationOptions,
    logger: Box<dyn PipelineLogger>,
    frame_limit: Option<usize>,
    frames: usize,
    edges: usize,
}

impl FrameDriver {
    pub fn new(
        source: Box<dyn VideoSource>,
        detector: Box<dyn HandDetector>,
        surface: Box<dyn DrawingSurface>,
        controller: BackgroundController,
    ) -> Self {
        Self {
            source,
            detector,
            surface,
            renderer: SkeletonRenderer::default(),
            predicate: Box::new(LiftedHandPredicate::default()),
            debouncer: EdgeDebouncer::new(),
            controller,
            options: EstimationOptions::default(),
            logger: Box::new(NullPipelineLogger),
            frame_limit: None,
            frames: 0,
            edges: 0,
        }
    }

    /// Validates `config` and wires predicate, renderer, options and
    /// palette from it.
    pub fn from_config(
        config: &GestureConfig,
        source: Box<dyn VideoSource>,
        detector: Box<dyn HandDetector>,
        surface: Box<dyn DrawingSurface>,
        target: Box<dyn PresentationTarget>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let controller = BackgroundController::new(config.palette.clone(), target)
            .map_err(|_| ConfigError::EmptyPalette)?;
        Ok(Self::new(source, detector, surface, controller)
            .with_predicate(Box::new(LiftedHandPredicate::new(config.lift_threshold)))
            .with_renderer(SkeletonRenderer::new(config.point_radius))
            .with_options(EstimationOptions {
                flip_horizontal: config.flip_horizontal,
                max_hands: config.max_hands,
            }))
    }

    pub fn with_predicate(mut self, predicate: Box<dyn PosePredicate>) -> Self {
        self.predicate = predicate;
        self
    }

    pub fn with_renderer(mut self, renderer: SkeletonRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn with_options(mut self, options: EstimationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_logger(mut self, logger: Box<dyn PipelineLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Ends [`Self::run`] after `limit` iterations in total. `None` runs
    /// until the source ends or the loop is cancelled.
    pub fn with_frame_limit(mut self, limit: Option<usize>) -> Self {
        self.frame_limit = limit;
        self
    }

    /// Publishes a status line through the presentation target.
    pub fn set_status(&mut self, text: &str) {
        self.controller.set_status(text);
        self.logger.info(text);
    }

    /// Runs exactly one iteration.
    pub fn tick(&mut self) -> TickOutcome {
        let started = Instant::now();
        let frame = match self.source.next_frame() {
            Ok(Some(frame)) => Some(frame),
            Ok(None) => return TickOutcome::EndOfStream,
            Err(e) => {
                log::warn!("Frame {}: capture failed: {e}", self.frames);
                None
            }
        };
        self.logger.timing("capture", elapsed_ms(started));

        self.surface.clear();

        let started = Instant::now();
        let detected = frame
            .as_ref()
            .map(|frame| self.detect(frame))
            .unwrap_or_default();
        self.logger.timing("detect", elapsed_ms(started));

        let started = Instant::now();
        for hand in detected.hands() {
            self.renderer.draw_hand(hand, self.surface.as_mut());
        }
        if let Err(e) = self.surface.present() {
            log::warn!("Frame {}: failed to present overlay: {e}", self.frames);
        }
        self.logger.timing("render", elapsed_ms(started));

        let edge = self.debouncer.observe(&detected, self.predicate.as_ref());
        let lifted = self.debouncer.state() == DebounceState::Fired;
        if edge {
            self.controller.advance();
            self.edges += 1;
        }

        let report = FrameReport {
            index: self.frames,
            hands: detected.len(),
            lifted,
            edge,
            background: self.controller.current(),
            palette_index: self.controller.index(),
        };
        self.logger.metric("hands", detected.len() as f64);
        self.logger.metric("edges", if edge { 1.0 } else { 0.0 });
        self.logger.frame(report.index);
        self.frames += 1;

        TickOutcome::Processed(report)
    }

    /// Loops until `cancelled` is set or the source ends.
    ///
    /// Cancellation is checked between iterations; an iteration in flight
    /// always completes.
    pub fn run(
        &mut self,
        scheduler: &mut dyn FrameScheduler,
        cancelled: &AtomicBool,
    ) -> RunSummary {
        self.run_with(scheduler, cancelled, |_| {})
    }

    /// Like [`Self::run`], calling `on_frame` after every iteration.
    pub fn run_with<F>(
        &mut self,
        scheduler: &mut dyn FrameScheduler,
        cancelled: &AtomicBool,
        mut on_frame: F,
    ) -> RunSummary
    where
        F: FnMut(&FrameReport),
    {
        while !cancelled.load(Ordering::Relaxed) {
            if self.frame_limit.is_some_and(|limit| self.frames >= limit) {
                log::info!("Frame limit of {} reached", self.frames);
                break;
            }
            match self.tick() {
                TickOutcome::Processed(report) => on_frame(&report),
                TickOutcome::EndOfStream => {
                    log::info!("Video source ended after {} frames", self.frames);
                    break;
                }
            }
            scheduler.wait_for_next_frame();
        }
        self.logger.summary();
        self.summary()
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            frames: self.frames,
            edges: self.edges,
            background: self.controller.current(),
            palette_index: self.controller.index(),
        }
    }

    fn detect(&mut self, frame: &Frame) -> DetectionFrame {
        if !self.detector.is_ready() {
            log::debug!("Frame {}: detector not ready, skipping", self.frames);
            return DetectionFrame::empty();
        }
        match self.detector.estimate_hands(frame, &self.options) {
            Ok(detected) => detected,
            Err(e) => {
                log::warn!("Frame {}: hand detection failed: {e}", self.frames);
                DetectionFrame::empty()
            }
        }
    }
}

fn elapsed_ms(since: Instant) -> f64 {
    since.elapsed().as_secs_f64() * 1000.0
}
