//! ONNX Runtime classification backend.
//!
//! Wraps an `ort` session loaded from a serialized ONNX artifact. The model
//! is expected to accept one float32 tensor of shape (1, 1, 28, 28) and
//! return a named output map whose first output flattens to a length-10
//! score vector; input and output names are discovered from the session's
//! declared metadata rather than hard-coded.

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use tracing::{debug, info};

use crate::digit_pipeline::common::error::{PipelineError, Result};
use crate::digit_pipeline::model::classifier::DigitClassifier;
use crate::digit_pipeline::model::types::ScoreVector;
use crate::digit_pipeline::tensor::types::InputTensor;

/// A reusable handle to a loaded ONNX digit model.
///
/// The session sits behind a mutex so one handle can serve repeated and
/// concurrent pipeline invocations; calls serialize at the session.
pub struct OrtClassifier {
    session: Mutex<Session>,
    input_name: String,
    output_name: String,
}

impl OrtClassifier {
    /// Loads a serialized ONNX model from disk and prepares a session.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading ONNX model from {}", path.display());

        let session = Session::builder()
            .map_err(|e| PipelineError::ModelLoad(e.to_string()))?
            .commit_from_file(path)
            .map_err(|e| PipelineError::ModelLoad(format!("{}: {}", path.display(), e)))?;

        let input_name = session
            .inputs()
            .first()
            .map(|i| i.name().to_string())
            .ok_or_else(|| PipelineError::ModelLoad("model declares no inputs".to_string()))?;
        let output_name = session
            .outputs()
            .first()
            .map(|o| o.name().to_string())
            .ok_or_else(|| PipelineError::ModelLoad("model declares no outputs".to_string()))?;

        info!(
            input = %input_name,
            output = %output_name,
            "ONNX session ready"
        );

        Ok(Self {
            session: Mutex::new(session),
            input_name,
            output_name,
        })
    }

    /// The input name the loaded model declares.
    pub fn input_name(&self) -> &str {
        &self.input_name
    }

    /// The output name the loaded model declares.
    pub fn output_name(&self) -> &str {
        &self.output_name
    }
}

impl DigitClassifier for OrtClassifier {
    fn infer(&self, tensor: &InputTensor) -> Result<ScoreVector> {
        let shape = tensor.shape().to_vec();
        let data = tensor.as_slice().ok_or_else(|| {
            PipelineError::InferenceError("input tensor is not contiguous in memory".to_string())
        })?;

        let input = ort::value::Value::from_array((shape.as_slice(), data.to_vec()))
            .map_err(|e| PipelineError::InferenceError(e.to_string()))?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| PipelineError::InferenceError("model session lock poisoned".to_string()))?;

        let outputs = session
            .run(ort::inputs![self.input_name.as_str() => input])
            .map_err(|e| PipelineError::InferenceError(e.to_string()))?;

        // try_extract_tensor returns (shape, data_slice); a (1, 10) output
        // flattens to the 10 class scores.
        let (_out_shape, out_data) = outputs[self.output_name.as_str()]
            .try_extract_tensor::<f32>()
            .map_err(|e| PipelineError::InferenceError(e.to_string()))?;

        Ok(out_data.to_vec())
    }
}
