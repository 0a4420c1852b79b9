use crate::digit_pipeline::common::error::Result;
use crate::digit_pipeline::model::types::ScoreVector;
use crate::digit_pipeline::tensor::types::InputTensor;

/// Capability interface to a pre-trained digit classification model.
///
/// Implementations own session lifecycle (load-once, reuse-many) and may be
/// invoked repeatedly from multiple pipeline invocations; the call blocks
/// until the backend produces its scores.
pub trait DigitClassifier {
    fn infer(&self, tensor: &InputTensor) -> Result<ScoreVector>;
}
