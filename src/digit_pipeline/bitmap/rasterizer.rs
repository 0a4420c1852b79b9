//! Direct rescale of the captured drawing onto the 28x28 model extent.
//!
//! The full source extent is mapped onto the target with no cropping and no
//! letterboxing. A non-square source therefore distorts the stroke; the
//! drawing surface keeps its canvas square by convention.

use image::{ImageBuffer, Rgba};
use tracing::debug;

use crate::digit_pipeline::bitmap::types::{
    DownsampledBitmap, RawBitmap, ResizeFilter, TARGET_HEIGHT, TARGET_WIDTH,
};
use crate::digit_pipeline::common::error::{PipelineError, Result};

/// Resamples a raw drawing-surface bitmap down to 28x28 RGBA.
///
/// Fails with `InvalidInput` when the bitmap is empty, has a zero dimension,
/// or its buffer length disagrees with its declared dimensions. Pure
/// function over its input.
pub fn rasterize(bitmap: &RawBitmap, filter: ResizeFilter) -> Result<DownsampledBitmap> {
    bitmap.validate()?;

    debug!(
        "Resampling {}x{} bitmap to {}x{} ({:?})",
        bitmap.width, bitmap.height, TARGET_WIDTH, TARGET_HEIGHT, filter
    );

    let source: ImageBuffer<Rgba<u8>, &[u8]> =
        ImageBuffer::from_raw(bitmap.width, bitmap.height, bitmap.data.as_slice()).ok_or_else(
            || {
                PipelineError::InvalidInput(format!(
                    "bitmap buffer too small for {}x{} RGBA",
                    bitmap.width, bitmap.height
                ))
            },
        )?;

    let resized = image::imageops::resize(
        &source,
        TARGET_WIDTH as u32,
        TARGET_HEIGHT as u32,
        filter.to_filter_type(),
    );

    Ok(DownsampledBitmap {
        data: resized.into_raw(),
    })
}
