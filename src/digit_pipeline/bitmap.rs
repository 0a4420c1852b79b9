//! Bitmap capture and resampling
//!
//! The drawing surface hands the pipeline an RGBA bitmap of arbitrary
//! dimensions; this module validates it and resamples it down to the fixed
//! 28x28 extent the model expects.

pub mod rasterizer;
pub mod types;

pub use rasterizer::rasterize;
pub use types::{DownsampledBitmap, RawBitmap, ResizeFilter, TARGET_HEIGHT, TARGET_WIDTH};
