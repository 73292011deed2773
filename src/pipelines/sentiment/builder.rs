use std::sync::Arc;

use super::model::PolarityModel;
use super::pipeline::SentimentAnalysisPipeline;
use crate::error::Result;
use crate::pipelines::cache::ModelOptions;
use crate::pipelines::utils::{BasePipelineBuilder, StandardPipelineBuilder};

/// Builder for creating [`SentimentAnalysisPipeline`] instances.
///
/// Use [`Self::vader`] as the entry point.
///
/// # Examples
///
/// ```rust,no_run
/// # use email_sentiment::sentiment::SentimentAnalysisPipelineBuilder;
/// # fn main() -> email_sentiment::error::Result<()> {
/// let pipeline = SentimentAnalysisPipelineBuilder::vader().build()?;
/// # Ok(())
/// # }
/// ```
pub struct SentimentAnalysisPipelineBuilder<M: PolarityModel>(StandardPipelineBuilder<M::Options>);

impl<M: PolarityModel> SentimentAnalysisPipelineBuilder<M> {
    pub(crate) fn new(options: M::Options) -> Self {
        Self(StandardPipelineBuilder::new(options))
    }

    /// Builds the pipeline, reusing a model already loaded by another pipeline.
    ///
    /// # Errors
    ///
    /// Returns an error if the model's resources cannot be loaded.
    pub fn build(self) -> Result<SentimentAnalysisPipeline<M>>
    where
        M: Send + Sync + 'static,
        M::Options: ModelOptions,
    {
        BasePipelineBuilder::build(self)
    }
}

impl<M: PolarityModel> BasePipelineBuilder<M> for SentimentAnalysisPipelineBuilder<M>
where
    M: Send + Sync + 'static,
    M::Options: ModelOptions,
{
    type Pipeline = SentimentAnalysisPipeline<M>;
    type Options = M::Options;

    fn options(&self) -> &Self::Options {
        &self.0.options
    }

    fn create_model(options: Self::Options) -> Result<M> {
        M::new(options)
    }

    fn construct_pipeline(model: Arc<M>) -> Result<Self::Pipeline> {
        Ok(SentimentAnalysisPipeline { model })
    }
}

impl SentimentAnalysisPipelineBuilder<super::SentimentVader> {
    /// Creates a builder for the VADER analyzer with its English lexicon.
    pub fn vader() -> Self {
        Self::new(crate::models::VaderLexicon::English)
    }

    /// Creates a builder for the VADER analyzer with a specific lexicon.
    pub fn vader_with_lexicon(lexicon: crate::models::VaderLexicon) -> Self {
        Self::new(lexicon)
    }
}
