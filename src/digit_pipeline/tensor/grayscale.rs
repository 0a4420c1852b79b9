//! Single-channel reduction and ink preparation.

use ndarray::Array2;

use crate::digit_pipeline::bitmap::types::{DownsampledBitmap, TARGET_HEIGHT, TARGET_WIDTH};
use crate::digit_pipeline::tensor::types::IntensityMatrix;

// ITU-R BT.601 luma weights
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Reduces a 28x28 RGBA bitmap to a single intensity channel.
///
/// Each pixel becomes `0.299*R + 0.587*G + 0.114*B`; the alpha channel is
/// ignored. Values are clamped to [0, 255] against floating rounding.
pub fn to_grayscale(bitmap: &DownsampledBitmap) -> IntensityMatrix {
    let data = bitmap.data();
    Array2::from_shape_fn((TARGET_HEIGHT, TARGET_WIDTH), |(row, col)| {
        let offset = (row * TARGET_WIDTH + col) * 4;
        let r = data[offset] as f32;
        let g = data[offset + 1] as f32;
        let b = data[offset + 2] as f32;
        (LUMA_R * r + LUMA_G * g + LUMA_B * b).clamp(0.0, 255.0)
    })
}

/// Flips intensities, `v' = 255 - v`.
///
/// Dark-ink-on-light drawings become the white-on-black convention the MNIST
/// family of models was trained on.
pub fn invert(matrix: IntensityMatrix) -> IntensityMatrix {
    matrix.mapv_into(|v| 255.0 - v)
}

/// Snaps intensities to {0, 255} around `threshold`.
pub fn binarize(matrix: IntensityMatrix, threshold: f32) -> IntensityMatrix {
    matrix.mapv_into(|v| if v >= threshold { 255.0 } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digit_pipeline::bitmap::{rasterize, RawBitmap, ResizeFilter};

    fn downsampled_solid(rgba: [u8; 4]) -> DownsampledBitmap {
        let data = rgba.iter().copied().cycle().take(28 * 28 * 4).collect();
        let bitmap = RawBitmap::new(28, 28, data).unwrap();
        rasterize(&bitmap, ResizeFilter::Nearest).unwrap()
    }

    #[test]
    fn white_maps_to_full_intensity() {
        let matrix = to_grayscale(&downsampled_solid([255, 255, 255, 255]));
        for &v in matrix.iter() {
            assert!((v - 255.0).abs() < 0.01);
        }
    }

    #[test]
    fn black_maps_to_zero_intensity() {
        let matrix = to_grayscale(&downsampled_solid([0, 0, 0, 255]));
        for &v in matrix.iter() {
            assert!(v.abs() < 0.01);
        }
    }

    #[test]
    fn channel_weights_are_bt601() {
        let red = to_grayscale(&downsampled_solid([255, 0, 0, 255]));
        let green = to_grayscale(&downsampled_solid([0, 255, 0, 255]));
        let blue = to_grayscale(&downsampled_solid([0, 0, 255, 255]));
        assert!((red[[0, 0]] - 255.0 * 0.299).abs() < 0.01);
        assert!((green[[0, 0]] - 255.0 * 0.587).abs() < 0.01);
        assert!((blue[[0, 0]] - 255.0 * 0.114).abs() < 0.01);
    }

    #[test]
    fn alpha_is_ignored() {
        let opaque = to_grayscale(&downsampled_solid([120, 60, 30, 255]));
        let transparent = to_grayscale(&downsampled_solid([120, 60, 30, 0]));
        assert_eq!(opaque, transparent);
    }

    #[test]
    fn invert_flips_intensities() {
        let matrix = to_grayscale(&downsampled_solid([255, 255, 255, 255]));
        let inverted = invert(matrix);
        for &v in inverted.iter() {
            assert!(v.abs() < 0.01);
        }
    }

    #[test]
    fn binarize_snaps_around_threshold() {
        let matrix = IntensityMatrix::from_shape_fn((28, 28), |(row, _)| row as f32 * 9.0);
        let snapped = binarize(matrix, 128.0);
        for ((row, _col), &v) in snapped.indexed_iter() {
            let expected = if row as f32 * 9.0 >= 128.0 { 255.0 } else { 0.0 };
            assert_eq!(v, expected);
        }
    }
}
