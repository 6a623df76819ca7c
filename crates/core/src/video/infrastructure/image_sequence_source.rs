use std::path::{Path, PathBuf};

use crate::shared::constants::IMAGE_EXTENSIONS;
use crate::shared::frame::Frame;
use crate::video::domain::video_source::VideoSource;

/// Replays a directory of still images as a video feed, in file-name order.
///
/// Every image is decoded with the `image` crate and resized to the
/// configured resolution so downstream pixel coordinates stay consistent.
pub struct ImageSequenceSource {
    paths: Vec<PathBuf>,
    width: u32,
    height: u32,
    cursor: usize,
}

impl ImageSequenceSource {
    pub fn open(dir: &Path, width: u32, height: u32) -> Result<Self, Box<dyn std::error::Error>> {
        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| is_image(path))
            .collect();
        if paths.is_empty() {
            return Err(format!("No image files found in {}", dir.display()).into());
        }
        paths.sort();
        log::info!("Found {} frames in {}", paths.len(), dir.display());
        Ok(Self {
            paths,
            width,
            height,
            cursor: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

impl VideoSource for ImageSequenceSource {
    fn next_frame(&mut self) -> Result<Option<Frame>, Box<dyn std::error::Error>> {
        let Some(path) = self.paths.get(self.cursor) else {
            return Ok(None);
        };
        let index = self.cursor;
        self.cursor += 1;

        let img = image::open(path)?.to_rgb8();
        let img = if img.dimensions() != (self.width, self.height) {
            image::imageops::resize(
                &img,
                self.width,
                self.height,
                image::imageops::FilterType::Triangle,
            )
        } else {
            img
        };
        Ok(Some(Frame::new(img.into_raw(), self.width, self.height, index)))
    }

    fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
