use digitpad_rs::digit_pipeline::{DigitPipeline, PipelineConfig};
use digitpad_rs::logger;

use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting digitpad...");

    let mut args = std::env::args().skip(1);
    let image_path = args.next().unwrap_or_else(|| "drawing.png".to_string());
    let model_path = args.next().unwrap_or_else(|| "model.onnx".to_string());

    let config = PipelineConfig::builder().build();
    let pipeline = DigitPipeline::from_model_file(&model_path, config)?;

    info!("Digit pipeline initialized");
    info!("Resize filter: {:?}", pipeline.config().filter);
    info!(
        "Ink inversion: {}",
        if pipeline.config().invert {
            "enabled"
        } else {
            "disabled"
        }
    );

    match pipeline.classify_file(&image_path) {
        Ok(prediction) => info!(
            "Predicted digit: {} (score {:.4})",
            prediction.label, prediction.score
        ),
        Err(e) => error!("Classification failed: {}", e),
    }

    Ok(())
}
