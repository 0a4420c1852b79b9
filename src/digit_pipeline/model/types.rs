//! Model boundary data types

/// Number of digit classes the classifier distinguishes.
pub const DIGIT_CLASSES: usize = 10;

/// Ordered model scores; index *i* corresponds to digit class *i*.
pub type ScoreVector = Vec<f32>;

/// The pipeline's final output: the winning digit and its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Predicted digit in [0, 9]
    pub label: u8,
    /// Score of the winning class, for confidence reporting
    pub score: f32,
}
