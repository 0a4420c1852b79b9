//! Bitmap data types

use crate::digit_pipeline::common::error::{PipelineError, Result};

/// Width of the resampled bitmap and of the model input, in pixels.
pub const TARGET_WIDTH: usize = 28;
/// Height of the resampled bitmap and of the model input, in pixels.
pub const TARGET_HEIGHT: usize = 28;

const BYTES_PER_PIXEL: usize = 4;

/// A raw RGBA bitmap captured from the drawing surface.
///
/// The surface owns the pixel buffer; the pipeline only ever reads it.
/// Dimensions are arbitrary (square by convention) but must be positive and
/// consistent with the buffer length.
#[derive(Debug, Clone)]
pub struct RawBitmap {
    /// Width of the bitmap in pixels
    pub width: u32,
    /// Height of the bitmap in pixels
    pub height: u32,
    /// RGBA pixel data interleaved [R, G, B, A, R, G, B, A, ...]
    pub data: Vec<u8>,
}

impl RawBitmap {
    /// Builds a bitmap after checking dimensions against the buffer length.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let bitmap = Self { width, height, data };
        bitmap.validate()?;
        Ok(bitmap)
    }

    /// Checks that the bitmap is non-empty and internally consistent.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PipelineError::InvalidInput(format!(
                "bitmap dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.data.is_empty() {
            return Err(PipelineError::InvalidInput(
                "bitmap pixel data is empty".to_string(),
            ));
        }
        let expected = self.width as usize * self.height as usize * BYTES_PER_PIXEL;
        if self.data.len() != expected {
            return Err(PipelineError::InvalidInput(format!(
                "bitmap data length {} does not match {}x{} RGBA ({} bytes)",
                self.data.len(),
                self.width,
                self.height,
                expected
            )));
        }
        Ok(())
    }
}

/// An RGBA bitmap resampled to the fixed 28x28 model extent.
///
/// Constructed only by [`rasterize`](super::rasterize), so the length
/// invariant (28 * 28 * 4 bytes) always holds.
#[derive(Debug, Clone)]
pub struct DownsampledBitmap {
    /// RGBA pixel data interleaved, row-major, 28x28
    pub(crate) data: Vec<u8>,
}

impl DownsampledBitmap {
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Resampling filter applied when stretching the source onto 28x28.
///
/// The choice affects classification accuracy but not the shape contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResizeFilter {
    /// Nearest neighbour (fastest, blocky strokes)
    Nearest,
    /// Bilinear interpolation (default, closest to a canvas draw-scale)
    #[default]
    Bilinear,
    /// Lanczos windowed sinc (sharpest, slowest)
    Lanczos3,
}

impl ResizeFilter {
    pub(crate) fn to_filter_type(self) -> image::imageops::FilterType {
        match self {
            ResizeFilter::Nearest => image::imageops::FilterType::Nearest,
            ResizeFilter::Bilinear => image::imageops::FilterType::Triangle,
            ResizeFilter::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}
