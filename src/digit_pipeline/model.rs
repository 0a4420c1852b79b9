//! Model boundary
//!
//! The classifier is an opaque collaborator: a single capability from input
//! tensor to score vector. The pipeline only ever talks to the
//! [`DigitClassifier`] trait so any backend (ONNX Runtime, a remote
//! service, a test mock) can be substituted without touching the stages.

pub mod classifier;
pub mod ort_classifier;
pub mod types;

pub use classifier::DigitClassifier;
pub use ort_classifier::OrtClassifier;
pub use types::{DIGIT_CLASSES, Prediction, ScoreVector};
