//! Intensity normalization.

use crate::digit_pipeline::tensor::types::{IntensityMatrix, NormalizedMatrix};

/// Maps intensities from [0, 255] into [0, 1], `v' = v / 255.0`.
///
/// No clamping; the grayscale reducer already guarantees the input range.
pub fn normalize(matrix: IntensityMatrix) -> NormalizedMatrix {
    matrix.mapv_into(|v| v / 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_stay_zeros() {
        let normalized = normalize(IntensityMatrix::zeros((28, 28)));
        assert!(normalized.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn full_intensity_becomes_one() {
        let normalized = normalize(IntensityMatrix::from_elem((28, 28), 255.0));
        assert!(normalized.iter().all(|&v| (v - 1.0).abs() < f32::EPSILON));
    }

    #[test]
    fn midrange_scales_linearly() {
        let normalized = normalize(IntensityMatrix::from_elem((28, 28), 51.0));
        assert!(normalized.iter().all(|&v| (v - 0.2).abs() < 1e-6));
    }
}
