use ndarray::{ArrayView3, ArrayViewMut3};

use crate::shared::color::Color;

pub const RGB_CHANNELS: usize = 3;

/// One captured image: packed RGB8, row-major, plus its position in the feed.
///
/// Sources convert to this layout on read and surfaces draw into it; nothing
/// in between looks at the pixels.
#[derive(Clone, Debug)]
pub struct Frame {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    index: usize,
}

impl Frame {
    pub fn new(pixels: Vec<u8>, width: u32, height: u32, index: usize) -> Self {
        debug_assert_eq!(
            pixels.len(),
            byte_len(width, height),
            "pixel buffer must hold width * height RGB triples"
        );
        Self {
            pixels,
            width,
            height,
            index,
        }
    }

    /// All-black frame.
    pub fn blank(width: u32, height: u32, index: usize) -> Self {
        Self::new(vec![0; byte_len(width, height)], width, height, index)
    }

    pub fn data(&self) -> &[u8] {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn fill(&mut self, color: Color) {
        let rgb = color.to_rgb();
        for px in self.pixels.chunks_exact_mut(RGB_CHANNELS) {
            px.copy_from_slice(&rgb);
        }
    }

    /// `(row, col, channel)` view.
    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.pixels)
            .expect("Frame data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.pixels)
            .expect("Frame data length must match dimensions")
    }

    fn shape(&self) -> (usize, usize, usize) {
        (self.height as usize, self.width as usize, RGB_CHANNELS)
    }
}

fn byte_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * RGB_CHANNELS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_pixels_and_index() {
        let pixels: Vec<u8> = (0..12).collect();
        let frame = Frame::new(pixels.clone(), 2, 2, 5);
        assert_eq!((frame.width(), frame.height()), (2, 2));
        assert_eq!(frame.index(), 5);
        assert_eq!(frame.data(), &pixels[..]);
    }

    #[test]
    fn test_blank_is_black() {
        let frame = Frame::blank(4, 3, 7);
        assert_eq!(frame.data().len(), 36);
        assert_eq!(frame.index(), 7);
        assert!(frame.data().iter().all(|&b| b == 0));
    }

    #[test]
    #[should_panic(expected = "pixel buffer must hold width * height RGB triples")]
    fn test_short_buffer_panics_in_debug() {
        Frame::new(vec![0; 10], 2, 2, 0);
    }

    #[test]
    fn test_fill_paints_every_pixel() {
        let mut frame = Frame::blank(3, 2, 0);
        frame.fill(Color::new(0xFF, 0x57, 0x33));
        assert!(frame
            .data()
            .chunks_exact(RGB_CHANNELS)
            .all(|px| px == [0xFF, 0x57, 0x33]));
    }

    #[test]
    fn test_ndarray_view_is_row_major() {
        let mut frame = Frame::blank(4, 2, 0);
        assert_eq!(frame.as_ndarray().shape(), &[2, 4, 3]);

        frame.as_ndarray_mut()[[1, 3, 2]] = 200;
        assert_eq!(frame.data()[(4 + 3) * 3 + 2], 200);
    }
}
