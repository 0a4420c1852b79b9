//! Digit classification pipeline module
//!
//! This module turns a raw drawing-surface bitmap into a model-ready tensor
//! and a predicted digit, with separate modules for bitmap capture and
//! resampling, tensor preparation, the model boundary, the decision rule,
//! and pipeline orchestration.

pub mod bitmap;
pub mod classify;
pub mod common;
pub mod decision;
pub mod model;
pub mod tensor;

pub use common::{
    PipelineError,
    Result,
};

pub use bitmap::{
    DownsampledBitmap,
    RawBitmap,
    ResizeFilter,
    TARGET_HEIGHT,
    TARGET_WIDTH,
    rasterize,
};

pub use tensor::{
    InputTensor,
    IntensityMatrix,
    NormalizedMatrix,
    assemble,
    binarize,
    invert,
    normalize,
    to_grayscale,
};

pub use model::{
    DIGIT_CLASSES,
    DigitClassifier,
    OrtClassifier,
    Prediction,
    ScoreVector,
};

pub use decision::decide;

pub use classify::{
    DigitPipeline,
    PipelineConfig,
    PipelineConfigBuilder,
    RequestGeneration,
};
