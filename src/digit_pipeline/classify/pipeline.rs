use std::path::Path;

use tracing::{info, instrument};

use crate::digit_pipeline::bitmap::rasterizer::rasterize;
use crate::digit_pipeline::bitmap::types::RawBitmap;
use crate::digit_pipeline::classify::config::PipelineConfig;
use crate::digit_pipeline::common::error::{PipelineError, Result};
use crate::digit_pipeline::decision::decide;
use crate::digit_pipeline::model::classifier::DigitClassifier;
use crate::digit_pipeline::model::ort_classifier::OrtClassifier;
use crate::digit_pipeline::model::types::{DIGIT_CLASSES, Prediction, ScoreVector};
use crate::digit_pipeline::tensor::assemble::assemble;
use crate::digit_pipeline::tensor::grayscale::{binarize, invert, to_grayscale};
use crate::digit_pipeline::tensor::normalize::normalize;
use crate::digit_pipeline::tensor::types::InputTensor;

/// End-to-end digit classification pipeline.
///
/// Generic over the classifier so any model backend can be substituted; the
/// classifier slot may be empty while the model is still loading, in which
/// case classification fails with `ModelUnavailable` and the caller retries
/// once the model is ready.
pub struct DigitPipeline<C: DigitClassifier> {
    classifier: Option<C>,
    config: PipelineConfig,
}

impl DigitPipeline<OrtClassifier> {
    /// Builds a pipeline over an ONNX model loaded from disk.
    pub fn from_model_file<P: AsRef<Path>>(path: P, config: PipelineConfig) -> Result<Self> {
        let classifier = OrtClassifier::from_file(path)?;
        Ok(Self::with_classifier(classifier, config))
    }
}

impl<C: DigitClassifier> DigitPipeline<C> {
    /// A pipeline whose model has not finished loading yet.
    pub fn pending(config: PipelineConfig) -> Self {
        Self {
            classifier: None,
            config,
        }
    }

    pub fn with_classifier(classifier: C, config: PipelineConfig) -> Self {
        Self {
            classifier: Some(classifier),
            config,
        }
    }

    /// Attaches a classifier once the external loader has produced one.
    pub fn attach_classifier(&mut self, classifier: C) {
        self.classifier = Some(classifier);
    }

    pub fn is_ready(&self) -> bool {
        self.classifier.is_some()
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PipelineConfig) {
        self.config = config;
    }

    /// Runs stages 1-4: resample, grayscale, ink preparation, normalize,
    /// assemble. Pure with respect to the pipeline; every invocation works
    /// on its own transient values.
    #[instrument(skip(self, bitmap), fields(width = bitmap.width, height = bitmap.height))]
    pub fn preprocess(&self, bitmap: &RawBitmap) -> Result<InputTensor> {
        let downsampled = {
            let _span = tracing::info_span!("rasterize").entered();
            rasterize(bitmap, self.config.filter)?
        };

        let mut intensity = {
            let _span = tracing::info_span!("to_grayscale").entered();
            to_grayscale(&downsampled)
        };

        if self.config.invert {
            intensity = invert(intensity);
        }
        if let Some(threshold) = self.config.binarize {
            intensity = binarize(intensity, threshold);
        }

        let normalized = normalize(intensity);
        assemble(normalized)
    }

    /// Classifies a captured drawing, returning the raw score vector
    /// alongside the prediction.
    #[instrument(skip(self, bitmap), fields(width = bitmap.width, height = bitmap.height))]
    pub fn classify_with_scores(&self, bitmap: &RawBitmap) -> Result<(Prediction, ScoreVector)> {
        info!("Starting digit classification");

        let tensor = self.preprocess(bitmap)?;

        let scores = {
            let _span = tracing::info_span!("infer").entered();
            self.invoke(&tensor)?
        };

        let prediction = decide(&scores)?;

        info!(
            label = prediction.label,
            score = prediction.score,
            "Classification complete"
        );
        Ok((prediction, scores))
    }

    /// Classifies a captured drawing.
    pub fn classify(&self, bitmap: &RawBitmap) -> Result<Prediction> {
        self.classify_with_scores(bitmap).map(|(prediction, _)| prediction)
    }

    /// Decodes an image file into a bitmap and classifies it.
    #[instrument(skip(self, path))]
    pub fn classify_file<P: AsRef<Path>>(&self, path: P) -> Result<Prediction> {
        let path = path.as_ref();
        info!(input = %path.display(), "Classifying drawing from file");

        let decoded = image::open(path)
            .map_err(|e| PipelineError::InvalidInput(format!("{}: {}", path.display(), e)))?
            .to_rgba8();
        let bitmap = RawBitmap::new(decoded.width(), decoded.height(), decoded.into_raw())?;

        self.classify(&bitmap)
    }

    /// Invokes the model and checks the score vector against its contract:
    /// exactly ten finite values.
    fn invoke(&self, tensor: &InputTensor) -> Result<ScoreVector> {
        let classifier = self
            .classifier
            .as_ref()
            .ok_or(PipelineError::ModelUnavailable)?;

        let scores = classifier.infer(tensor)?;

        if scores.len() != DIGIT_CLASSES {
            return Err(PipelineError::InferenceError(format!(
                "model returned {} scores, expected {}",
                scores.len(),
                DIGIT_CLASSES
            )));
        }
        if scores.iter().any(|s| !s.is_finite()) {
            return Err(PipelineError::InferenceError(
                "model returned non-finite scores".to_string(),
            ));
        }

        Ok(scores)
    }
}
