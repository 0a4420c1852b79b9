//! Model input assembly.

use ndarray::Axis;

use crate::digit_pipeline::bitmap::types::{TARGET_HEIGHT, TARGET_WIDTH};
use crate::digit_pipeline::common::error::{PipelineError, Result};
use crate::digit_pipeline::tensor::types::{InputTensor, NormalizedMatrix};

/// Packs a normalized 28x28 matrix into the (1, 1, 28, 28) model input.
///
/// Row-major pixel ordering is preserved: the matrix rows become the height
/// axis and its columns the width axis. Fails with `ShapeMismatch` when the
/// matrix is not exactly 28x28.
pub fn assemble(matrix: NormalizedMatrix) -> Result<InputTensor> {
    let (height, width) = matrix.dim();
    if height != TARGET_HEIGHT || width != TARGET_WIDTH {
        return Err(PipelineError::ShapeMismatch(
            format!("{TARGET_HEIGHT}x{TARGET_WIDTH}"),
            format!("{height}x{width}"),
        ));
    }
    Ok(matrix.insert_axis(Axis(0)).insert_axis(Axis(0)))
}
