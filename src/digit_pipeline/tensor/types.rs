//! Tensor stage data types

use ndarray::{Array2, Array4};

/// 28x28 intensity values in [0, 255], one per pixel, row-major.
pub type IntensityMatrix = Array2<f32>;

/// 28x28 intensity values scaled into [0, 1].
pub type NormalizedMatrix = Array2<f32>;

/// Model input of shape (batch, channel, height, width) = (1, 1, 28, 28).
///
/// Row-major with width as the fastest-varying axis. This layout is a
/// contractual requirement of the external model; document it alongside any
/// replacement model artifact.
pub type InputTensor = Array4<f32>;
