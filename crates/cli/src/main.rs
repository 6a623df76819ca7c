use std::path::PathBuf;
use std::process;

use clap::Parser;
use crossbeam_channel::select;

use handlift_core::detection::infrastructure::replay_hand_detector::ReplayHandDetector;
use handlift_core::pipeline::frame_driver::FrameDriver;
use handlift_core::pipeline::frame_scheduler::FrameScheduler;
use handlift_core::pipeline::infrastructure::fixed_rate_scheduler::{
    FixedRateScheduler, ImmediateScheduler,
};
use handlift_core::pipeline::infrastructure::threaded_frame_driver::{self, DriverMessage};
use handlift_core::pipeline::pipeline_logger::StdoutPipelineLogger;
use handlift_core::presentation::domain::presentation_target::PresentationTarget;
use handlift_core::presentation::infrastructure::channel_presentation_target::{
    ChannelPresentationTarget, PresentationEvent,
};
use handlift_core::rendering::domain::drawing_surface::DrawingSurface;
use handlift_core::rendering::infrastructure::raster_surface::{RasterSurface, SkeletonStyle};
use handlift_core::rendering::infrastructure::recording_surface::RecordingSurface;
use handlift_core::shared::config::GestureConfig;
use handlift_core::shared::constants::{STATUS_LOADING_MODEL, STATUS_MODEL_LOADED};
use handlift_core::video::domain::video_source::VideoSource;
use handlift_core::video::infrastructure::blank_video_source::BlankVideoSource;
use handlift_core::video::infrastructure::image_sequence_source::ImageSequenceSource;

/// Cycle a background color each time a hand is lifted, driven by recorded
/// hand detections.
#[derive(Parser)]
#[command(name = "handlift")]
struct Cli {
    /// JSON file of recorded hand detections, one entry per frame.
    #[arg(long)]
    detections: PathBuf,

    /// Directory of frame images to use as the video feed.
    #[arg(long)]
    frames: Option<PathBuf>,

    /// Write the skeleton overlay of every frame as PNG into this directory.
    #[arg(long)]
    overlay_dir: Option<PathBuf>,

    /// Config file (defaults to the per-user config location).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fingertip rise above the wrist, in pixels, that counts as lifted.
    #[arg(long)]
    threshold: Option<f32>,

    /// Frame rate cap; 0 replays as fast as possible.
    #[arg(long)]
    fps: Option<u32>,

    /// Keep detector coordinates un-mirrored.
    #[arg(long)]
    no_flip: bool,

    /// Stop after this many frames.
    #[arg(long)]
    max_frames: Option<usize>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    let (mut target, presentation_rx) = ChannelPresentationTarget::channel();
    target.set_status(STATUS_LOADING_MODEL);
    drain_presentation(&presentation_rx);

    let detector = load_detector(&cli)?;
    let frame_limit = cli.max_frames.unwrap_or(detector.len());
    let source = build_source(&cli, &config, frame_limit)?;
    let surface = build_surface(&cli, &config);

    let mut driver =
        FrameDriver::from_config(&config, source, Box::new(detector), surface, Box::new(target))?
            .with_logger(Box::new(StdoutPipelineLogger::default()))
            .with_frame_limit(cli.max_frames);
    driver.set_status(STATUS_MODEL_LOADED);

    let scheduler: Box<dyn FrameScheduler> = match cli.fps.unwrap_or(config.target_fps) {
        0 => Box::new(ImmediateScheduler::new()),
        fps => Box::new(FixedRateScheduler::new(fps)),
    };

    let handle = threaded_frame_driver::spawn(driver, scheduler);
    let driver_rx = handle.messages().clone();
    let mut finished = false;

    while !finished {
        select! {
            recv(presentation_rx) -> event => {
                if let Ok(event) = event {
                    show(&event);
                }
            }
            recv(driver_rx) -> message => {
                match message {
                    Ok(DriverMessage::Frame(report)) => {
                        if report.edge {
                            log::debug!("Lift detected on frame {}", report.index);
                        }
                    }
                    Ok(DriverMessage::Finished(_)) | Err(_) => finished = true,
                }
            }
        }
    }

    let summary = handle.join()?;
    drain_presentation(&presentation_rx);
    println!(
        "{} frames, {} lifts, background {} (index {})",
        summary.frames, summary.edges, summary.background, summary.palette_index
    );
    Ok(())
}

fn build_config(cli: &Cli) -> Result<GestureConfig, Box<dyn std::error::Error>> {
    let mut config = GestureConfig::load_or_default(cli.config.as_deref())?;
    if let Some(threshold) = cli.threshold {
        config.lift_threshold = threshold;
    }
    if cli.no_flip {
        config.flip_horizontal = false;
    }
    config.validate()?;
    Ok(config)
}

fn load_detector(cli: &Cli) -> Result<ReplayHandDetector, Box<dyn std::error::Error>> {
    let detector = ReplayHandDetector::from_path(&cli.detections)?;
    log::info!(
        "Loaded {} recorded frames from {}",
        detector.len(),
        cli.detections.display()
    );
    Ok(detector)
}

/// Image frames when a directory is given, else blank frames for
/// `frame_limit` iterations.
fn build_source(
    cli: &Cli,
    config: &GestureConfig,
    frame_limit: usize,
) -> Result<Box<dyn VideoSource>, Box<dyn std::error::Error>> {
    match &cli.frames {
        Some(dir) => Ok(Box::new(ImageSequenceSource::open(
            dir,
            config.width,
            config.height,
        )?)),
        None => Ok(Box::new(BlankVideoSource::new(
            config.width,
            config.height,
            Some(frame_limit),
        ))),
    }
}

fn build_surface(cli: &Cli, config: &GestureConfig) -> Box<dyn DrawingSurface> {
    match &cli.overlay_dir {
        Some(dir) => {
            let style = SkeletonStyle {
                point_color: config.point_color,
                line_color: config.line_color,
                line_width: config.line_width,
            };
            Box::new(
                RasterSurface::new(config.width, config.height, style)
                    .with_output_dir(dir.clone()),
            )
        }
        None => Box::new(RecordingSurface::new()),
    }
}

fn drain_presentation(rx: &crossbeam_channel::Receiver<PresentationEvent>) {
    for event in rx.try_iter() {
        show(&event);
    }
}

fn show(event: &PresentationEvent) {
    match event {
        PresentationEvent::Background(color) => log::info!("Background: {color}"),
        PresentationEvent::Status(text) => eprintln!("{text}"),
    }
}
