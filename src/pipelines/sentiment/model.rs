use crate::error::Result;

use super::pipeline::PolarityScores;

/// A scorer that maps text to [`PolarityScores`].
///
/// [`SentimentAnalysisPipeline`](super::SentimentAnalysisPipeline) is generic over this trait,
/// so any analyzer producing the four VADER-style scores can sit behind it.
pub trait PolarityModel {
    /// Options used to load the model. Also the model cache key.
    type Options: std::fmt::Debug + Clone;

    /// Load the model and any resources it needs.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::ResourceUnavailable`](crate::error::PipelineError::ResourceUnavailable)
    /// if the model's resources cannot be loaded.
    fn new(options: Self::Options) -> Result<Self>
    where
        Self: Sized;

    /// Score one text.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying analyzer does not produce all four scores.
    fn polarity_scores(&self, text: &str) -> Result<PolarityScores>;

    /// Score a batch of texts, one result per item.
    ///
    /// # Errors
    ///
    /// The outer error is reserved for failures affecting the whole batch.
    fn polarity_scores_batch(&self, texts: &[&str]) -> Result<Vec<Result<PolarityScores>>> {
        Ok(texts
            .iter()
            .map(|text| self.polarity_scores(text))
            .collect())
    }
}
