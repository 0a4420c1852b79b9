//! Freehand digit classification.
//!
//! Turns a raster drawing of a digit into a (1,1,28,28) float tensor and
//! runs it through a pre-trained ONNX model, returning the arg-max label.

pub mod digit_pipeline;
pub mod logger;
