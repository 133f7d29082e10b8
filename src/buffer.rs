//! Decoded pixel buffer input contract
//!
//! The engine performs no decoding itself: callers hand it a decoded,
//! row-major 8-bit buffer with 3 (RGB) or 4 (RGBA) channels. Alpha is
//! ignored. Before quantization the buffer is resampled onto a small
//! square canvas with cover/crop semantics so color proportions are
//! never skewed by anisotropic stretching.

use crate::error::{ExtractionError, Result};

/// Channel layout of a decoded pixel buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channels {
    /// 3 bytes per pixel
    Rgb,
    /// 4 bytes per pixel, alpha ignored
    Rgba,
}

impl Channels {
    /// Bytes per pixel for this layout
    pub fn count(self) -> usize {
        match self {
            Channels::Rgb => 3,
            Channels::Rgba => 4,
        }
    }
}

/// A caller-owned, read-only decoded image.
///
/// Row-major, top-left origin, 8 bits per sample.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: Channels,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap decoded pixel data, validating it against the declared shape
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::InvalidDimensions` for zero-sized images
    /// and `ExtractionError::BufferMismatch` when the data length does
    /// not equal `width * height * channels`.
    pub fn new(width: u32, height: u32, channels: Channels, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ExtractionError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize * channels.count();
        if data.len() != expected {
            return Err(ExtractionError::BufferMismatch {
                width,
                height,
                channels: channels.count() as u8,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channel layout
    pub fn channels(&self) -> Channels {
        self.channels
    }

    fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let stride = self.channels.count();
        let idx = (y as usize * self.width as usize + x as usize) * stride;
        (self.data[idx], self.data[idx + 1], self.data[idx + 2])
    }

    /// Resample onto a `size`x`size` canvas with cover/crop semantics.
    ///
    /// The source is scaled uniformly until it covers the canvas, then
    /// center-cropped; each canvas cell takes its nearest source pixel.
    pub(crate) fn sample_canvas(&self, size: u32) -> Vec<(u8, u8, u8)> {
        let scale = f32::max(
            size as f32 / self.width as f32,
            size as f32 / self.height as f32,
        );
        // Source window that maps onto the canvas, centered
        let window_w = size as f32 / scale;
        let window_h = size as f32 / scale;
        let offset_x = (self.width as f32 - window_w) / 2.0;
        let offset_y = (self.height as f32 - window_h) / 2.0;

        let mut samples = Vec::with_capacity(size as usize * size as usize);
        for y in 0..size {
            let sy = (offset_y + (y as f32 + 0.5) / scale).floor();
            let sy = (sy as i64).clamp(0, self.height as i64 - 1) as u32;
            for x in 0..size {
                let sx = (offset_x + (x as f32 + 0.5) / scale).floor();
                let sx = (sx as i64).clamp(0, self.width as i64 - 1) as u32;
                samples.push(self.pixel(sx, sy));
            }
        }
        samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, rgb: (u8, u8, u8)) -> PixelBuffer {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for _ in 0..width * height {
            data.extend_from_slice(&[rgb.0, rgb.1, rgb.2]);
        }
        PixelBuffer::new(width, height, Channels::Rgb, data).unwrap()
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(matches!(
            PixelBuffer::new(0, 10, Channels::Rgb, vec![]),
            Err(ExtractionError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_rejects_length_mismatch() {
        assert!(matches!(
            PixelBuffer::new(2, 2, Channels::Rgb, vec![0; 11]),
            Err(ExtractionError::BufferMismatch { .. })
        ));
    }

    #[test]
    fn test_rgba_alpha_ignored() {
        let data = vec![10, 20, 30, 255, 40, 50, 60, 0];
        let buffer = PixelBuffer::new(2, 1, Channels::Rgba, data).unwrap();
        assert_eq!(buffer.pixel(0, 0), (10, 20, 30));
        assert_eq!(buffer.pixel(1, 0), (40, 50, 60));
    }

    #[test]
    fn test_sample_canvas_identity() {
        let buffer = solid(100, 100, (51, 102, 204));
        let samples = buffer.sample_canvas(100);
        assert_eq!(samples.len(), 10_000);
        assert!(samples.iter().all(|&p| p == (51, 102, 204)));
    }

    #[test]
    fn test_sample_canvas_upscales_small_images() {
        let buffer = solid(2, 2, (255, 0, 0));
        let samples = buffer.sample_canvas(100);
        assert_eq!(samples.len(), 10_000);
        assert!(samples.iter().all(|&p| p == (255, 0, 0)));
    }

    #[test]
    fn test_sample_canvas_crops_wide_images_to_center() {
        // 300x100 image: left/right thirds red, center third blue.
        // Cover-cropping a square canvas must keep only the center.
        let mut data = Vec::new();
        for _y in 0..100u32 {
            for x in 0..300u32 {
                if (100..200).contains(&x) {
                    data.extend_from_slice(&[0, 0, 255]);
                } else {
                    data.extend_from_slice(&[255, 0, 0]);
                }
            }
        }
        let buffer = PixelBuffer::new(300, 100, Channels::Rgb, data).unwrap();
        let samples = buffer.sample_canvas(100);
        assert!(samples.iter().all(|&p| p == (0, 0, 255)));
    }
}
