//! Tensor preparation
//!
//! Reduces the resampled RGBA bitmap to a single intensity channel, scales
//! it into [0, 1], and packs it into the (1, 1, 28, 28) layout the model
//! contract requires.

pub mod assemble;
pub mod grayscale;
pub mod normalize;
pub mod types;

pub use assemble::assemble;
pub use grayscale::{binarize, invert, to_grayscale};
pub use normalize::normalize;
pub use types::{InputTensor, IntensityMatrix, NormalizedMatrix};
