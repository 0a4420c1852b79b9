//! Arg-max decision rule.

use crate::digit_pipeline::common::error::{PipelineError, Result};
use crate::digit_pipeline::model::types::{DIGIT_CLASSES, Prediction};

/// Selects the digit with the highest score.
///
/// Scans left to right; on a tie the lowest index wins (first occurrence of
/// the maximum). Fails with `EmptyScores` on an empty vector and
/// `ShapeMismatch` when the length is not exactly ten — the classifier
/// domain is fixed to ten digit classes.
pub fn decide(scores: &[f32]) -> Result<Prediction> {
    if scores.is_empty() {
        return Err(PipelineError::EmptyScores);
    }
    if scores.len() != DIGIT_CLASSES {
        return Err(PipelineError::ShapeMismatch(
            DIGIT_CLASSES.to_string(),
            scores.len().to_string(),
        ));
    }

    let mut best = 0;
    for (index, &score) in scores.iter().enumerate().skip(1) {
        // Strictly greater, so the first occurrence of the maximum wins.
        if score > scores[best] {
            best = index;
        }
    }

    Ok(Prediction {
        label: best as u8,
        score: scores[best],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_maximum() {
        let mut scores = vec![0.0; 10];
        scores[7] = 0.93;
        let prediction = decide(&scores).unwrap();
        assert_eq!(prediction.label, 7);
        assert!((prediction.score - 0.93).abs() < f32::EPSILON);
    }

    #[test]
    fn tie_break_prefers_lowest_index() {
        let scores = vec![0.5, 0.9, 0.9, 0.1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let prediction = decide(&scores).unwrap();
        assert_eq!(prediction.label, 1);
    }

    #[test]
    fn all_equal_scores_yield_label_zero() {
        let scores = vec![0.1; 10];
        assert_eq!(decide(&scores).unwrap().label, 0);
    }

    #[test]
    fn negative_scores_are_handled() {
        let scores = vec![-5.0, -1.0, -3.0, -9.0, -2.0, -4.0, -6.0, -7.0, -8.0, -1.5];
        assert_eq!(decide(&scores).unwrap().label, 1);
    }

    #[test]
    fn empty_vector_is_rejected() {
        assert!(matches!(decide(&[]), Err(PipelineError::EmptyScores)));
    }

    #[test]
    fn short_vector_is_rejected() {
        let scores = vec![0.1; 9];
        assert!(matches!(
            decide(&scores),
            Err(PipelineError::ShapeMismatch(_, _))
        ));
    }

    #[test]
    fn long_vector_is_rejected() {
        let scores = vec![0.1; 11];
        assert!(matches!(
            decide(&scores),
            Err(PipelineError::ShapeMismatch(_, _))
        ));
    }
}
