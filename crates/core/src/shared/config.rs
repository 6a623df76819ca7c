//! Runtime configuration for the hand-lift pipeline.
//!
//! Stored as JSON. Every field is optional in the file; missing fields take
//! the reference defaults (640x480 capture, 70 px lift threshold, six-color
//! palette).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::color::Color;
use crate::shared::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH,
    DEFAULT_LIFT_THRESHOLD, DEFAULT_LINE_WIDTH, DEFAULT_MAX_HANDS, DEFAULT_PALETTE,
    DEFAULT_POINT_RADIUS, DEFAULT_TARGET_FPS,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("palette must contain at least one color")]
    EmptyPalette,
    #[error("frame size must be non-zero, got {width}x{height}")]
    ZeroFrameSize { width: u32, height: u32 },
    #[error("lift threshold must be a positive finite number, got {0}")]
    InvalidThreshold(f32),
    #[error("target fps must be at least 1")]
    ZeroFps,
    #[error("max hands must be at least 1")]
    ZeroMaxHands,
    #[error("point radius must be a non-negative finite number, got {0}")]
    InvalidPointRadius(f32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    pub width: u32,
    pub height: u32,
    pub lift_threshold: f32,
    pub palette: Vec<Color>,
    pub flip_horizontal: bool,
    pub max_hands: usize,
    pub target_fps: u32,
    pub point_radius: f32,
    pub line_width: u32,
    pub point_color: Color,
    pub line_color: Color,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_FRAME_WIDTH,
            height: DEFAULT_FRAME_HEIGHT,
            lift_threshold: DEFAULT_LIFT_THRESHOLD,
            palette: default_palette(),
            flip_horizontal: true,
            max_hands: DEFAULT_MAX_HANDS,
            target_fps: DEFAULT_TARGET_FPS,
            point_radius: DEFAULT_POINT_RADIUS,
            line_width: DEFAULT_LINE_WIDTH,
            point_color: Color::AQUA,
            line_color: Color::BLUE,
        }
    }
}

fn default_palette() -> Vec<Color> {
    DEFAULT_PALETTE
        .iter()
        .filter_map(|hex| hex.parse().ok())
        .collect()
}

impl GestureConfig {
    /// `<config_dir>/HandLift/config.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Reads and validates a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when given, else the default location if a file exists
    /// there, else the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroFrameSize {
                width: self.width,
                height: self.height,
            });
        }
        if !self.lift_threshold.is_finite() || self.lift_threshold <= 0.0 {
            return Err(ConfigError::InvalidThreshold(self.lift_threshold));
        }
        if self.target_fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        if self.max_hands == 0 {
            return Err(ConfigError::ZeroMaxHands);
        }
        if !self.point_radius.is_finite() || self.point_radius < 0.0 {
            return Err(ConfigError::InvalidPointRadius(self.point_radius));
        }
        Ok(())
    }
}
