use std::path::PathBuf;

use crate::rendering::domain::drawing_surface::DrawingSurface;
use crate::shared::color::Color;
use crate::shared::frame::Frame;

/// Fill and stroke settings for [`RasterSurface`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkeletonStyle {
    pub point_color: Color,
    pub line_color: Color,
    pub line_width: u32,
}

impl Default for SkeletonStyle {
    fn default() -> Self {
        Self {
            point_color: Color::AQUA,
            line_color: Color::BLUE,
            line_width: crate::shared::constants::DEFAULT_LINE_WIDTH,
        }
    }
}

/// Software rasterizer that draws onto an RGB [`Frame`].
///
/// `clear()` resets the canvas to black. When an output directory is set,
/// `present()` writes the canvas as `overlay_NNNNNN.png`, numbered by
/// presented frame.
pub struct RasterSurface {
    canvas: Frame,
    style: SkeletonStyle,
    output_dir: Option<PathBuf>,
    presented: usize,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32, style: SkeletonStyle) -> Self {
        Self {
            canvas: Frame::blank(width, height, 0),
            style,
            output_dir: None,
            presented: 0,
        }
    }

    pub fn with_output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = Some(dir);
        self
    }

    pub fn canvas(&self) -> &Frame {
        &self.canvas
    }

    /// Paints the pixels inside `bounds` whose centers satisfy `inside`.
    fn paint_where<F>(&mut self, bounds: (f32, f32, f32, f32), color: Color, inside: F)
    where
        F: Fn(f32, f32) -> bool,
    {
        let (min_x, min_y, max_x, max_y) = bounds;
        let w = self.canvas.width() as i64;
        let h = self.canvas.height() as i64;
        let x0 = (min_x.floor() as i64).max(0);
        let y0 = (min_y.floor() as i64).max(0);
        let x1 = (max_x.ceil() as i64).min(w - 1);
        let y1 = (max_y.ceil() as i64).min(h - 1);
        if x0 > x1 || y0 > y1 {
            return;
        }

        let rgb = color.to_rgb();
        let mut pixels = self.canvas.as_ndarray_mut();
        for row in y0..=y1 {
            for col in x0..=x1 {
                if inside(col as f32 + 0.5, row as f32 + 0.5) {
                    for (c, value) in rgb.iter().enumerate() {
                        pixels[[row as usize, col as usize, c]] = *value;
                    }
                }
            }
        }
    }
}

impl DrawingSurface for RasterSurface {
    fn clear(&mut self) {
        self.canvas.fill(Color::new(0, 0, 0));
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32) {
        let r_sq = radius * radius;
        self.paint_where(
            (x - radius, y - radius, x + radius, y + radius),
            self.style.point_color,
            |px, py| (px - x).powi(2) + (py - y).powi(2) <= r_sq,
        );
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let half = (self.style.line_width.max(1) as f32) / 2.0;
        let bounds = (
            x1.min(x2) - half,
            y1.min(y2) - half,
            x1.max(x2) + half,
            y1.max(y2) + half,
        );
        let (dx, dy) = (x2 - x1, y2 - y1);
        let len_sq = dx * dx + dy * dy;
        self.paint_where(bounds, self.style.line_color, |px, py| {
            let t = if len_sq > 0.0 {
                (((px - x1) * dx + (py - y1) * dy) / len_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let (cx, cy) = (x1 + t * dx, y1 + t * dy);
            (px - cx).powi(2) + (py - cy).powi(2) <= half * half
        });
    }

    fn present(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let index = self.presented;
        self.presented += 1;

        let Some(dir) = &self.output_dir else {
            return Ok(());
        };
        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!("overlay_{index:06}.png"));

        let img = image::RgbImage::from_raw(
            self.canvas.width(),
            self.canvas.height(),
            self.canvas.data().to_vec(),
        )
        .ok_or("Failed to create image from canvas data")?;
        img.save(&path)?;
        log::debug!("Wrote overlay {}", path.display());
        Ok(())
    }
}
