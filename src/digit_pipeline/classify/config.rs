//! Pipeline configuration types

use crate::digit_pipeline::bitmap::types::ResizeFilter;

/// Configuration for a classification pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Resampling filter used when stretching the drawing onto 28x28
    pub filter: ResizeFilter,
    /// Flip intensities after grayscale reduction (dark-on-light drawings
    /// need this to match the MNIST white-on-black convention)
    pub invert: bool,
    /// Snap intensities to {0, 255} around this threshold, when set
    pub binarize: Option<f32>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            filter: ResizeFilter::Bilinear,
            invert: false,
            binarize: None,
        }
    }
}

impl PipelineConfig {
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

/// Builder for PipelineConfig
#[derive(Default)]
pub struct PipelineConfigBuilder {
    filter: Option<ResizeFilter>,
    invert: Option<bool>,
    binarize: Option<Option<f32>>,
}

impl PipelineConfigBuilder {
    pub fn filter(mut self, filter: ResizeFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = Some(invert);
        self
    }

    pub fn binarize(mut self, threshold: Option<f32>) -> Self {
        self.binarize = Some(threshold);
        self
    }

    pub fn build(self) -> PipelineConfig {
        let default = PipelineConfig::default();
        PipelineConfig {
            filter: self.filter.unwrap_or(default.filter),
            invert: self.invert.unwrap_or(default.invert),
            binarize: self.binarize.unwrap_or(default.binarize),
        }
    }
}
