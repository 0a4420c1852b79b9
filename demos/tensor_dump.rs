//! Prints the preprocessed model input for a drawing, without running any
//! model. Useful for comparing the tensor against another front-end's
//! preprocessing when swapping model artifacts.

use digitpad_rs::digit_pipeline::{DigitPipeline, OrtClassifier, PipelineConfig, RawBitmap};

fn main() -> anyhow::Result<()> {
    let image_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "drawing.png".to_string());

    let decoded = image::open(&image_path)?.to_rgba8();
    let bitmap = RawBitmap::new(decoded.width(), decoded.height(), decoded.into_raw())?;

    let pipeline: DigitPipeline<OrtClassifier> =
        DigitPipeline::pending(PipelineConfig::default());
    let tensor = pipeline.preprocess(&bitmap)?;

    let min = tensor.iter().copied().fold(f32::INFINITY, f32::min);
    let max = tensor.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let mean = tensor.sum() / tensor.len() as f32;

    println!("Input: {image_path}");
    println!("Tensor shape: {:?}", tensor.shape());
    println!("Stats: min={min:.6}, max={max:.6}, mean={mean:.6}");

    // 28x28 ASCII rendering, darkest to brightest
    let ramp = [' ', '.', ':', '-', '=', '+', '*', '#', '@'];
    for row in 0..28 {
        let line: String = (0..28)
            .map(|col| {
                let v = tensor[[0, 0, row, col]];
                ramp[((v * (ramp.len() - 1) as f32).round() as usize).min(ramp.len() - 1)]
            })
            .collect();
        println!("{line}");
    }

    Ok(())
}
