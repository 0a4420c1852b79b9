use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid input bitmap: {0}")]
    InvalidInput(String),

    #[error("Shape mismatch: expected {0}, got {1}")]
    ShapeMismatch(String, String),

    #[error("No model session available")]
    ModelUnavailable,

    #[error("Failed to load model: {0}")]
    ModelLoad(String),

    #[error("Inference failed: {0}")]
    InferenceError(String),

    #[error("Empty score vector")]
    EmptyScores,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
