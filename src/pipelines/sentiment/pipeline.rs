use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::model::PolarityModel;
use crate::error::{PipelineError, Result};
use crate::pipelines::stats::PipelineStats;

// ============ Output types ============

/// Polarity breakdown of one text.
///
/// `neg + neu + pos` is close to `1.0` for any text with at least one token, and `compound`
/// lies in `[-1.0, 1.0]`. Both are properties of the analyzer, not checked here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarityScores {
    /// Share of negative valence.
    pub neg: f64,
    /// Share of neutral valence.
    pub neu: f64,
    /// Share of positive valence.
    pub pos: f64,
    /// Normalized aggregate sentiment in `[-1.0, 1.0]`.
    pub compound: f64,
}

impl PolarityScores {
    /// Score names in ascending lexicographic order.
    pub const KEYS: [&'static str; 4] = ["compound", "neg", "neu", "pos"];

    /// Look up a score by name.
    pub fn get(&self, key: &str) -> Option<f64> {
        match key {
            "compound" => Some(self.compound),
            "neg" => Some(self.neg),
            "neu" => Some(self.neu),
            "pos" => Some(self.pos),
            _ => None,
        }
    }

    /// The scores as a name-ordered mapping.
    pub fn as_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("neg", self.neg),
            ("neu", self.neu),
            ("pos", self.pos),
            ("compound", self.compound),
        ])
    }
}

/// Renders `compound: <v>, neg: <v>, neu: <v>, pos: <v>, `.
///
/// Values use the shortest representation that round-trips and always keep a decimal
/// point, so `0` prints as `0.0`.
impl fmt::Display for PolarityScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.as_map() {
            write!(f, "{key}: {value:?}, ")?;
        }
        Ok(())
    }
}

/// Single-text output from `run()`.
#[derive(Debug)]
pub struct Output {
    /// Polarity scores for the text.
    pub scores: PolarityScores,
    /// Execution statistics.
    pub stats: PipelineStats,
}

/// Single result in batch output.
#[derive(Debug)]
pub struct BatchResult {
    /// Input text.
    pub text: String,
    /// Scores or error for this input.
    pub scores: Result<PolarityScores>,
}

/// Batch output from `run()`.
#[derive(Debug)]
pub struct BatchOutput {
    /// Results for each input, in input order.
    pub results: Vec<BatchResult>,
    /// Execution statistics.
    pub stats: PipelineStats,
}

// ============ Input trait for type-based dispatch ============

#[doc(hidden)]
pub trait SentimentInput<'a> {
    /// Output type for `.run()`.
    type Output;

    #[doc(hidden)]
    fn into_texts(self) -> Vec<&'a str>;
    #[doc(hidden)]
    fn convert_output(
        texts: Vec<&'a str>,
        scores: Vec<Result<PolarityScores>>,
        stats: PipelineStats,
    ) -> Result<Self::Output>;
}

impl<'a> SentimentInput<'a> for &'a str {
    type Output = Output;

    fn into_texts(self) -> Vec<&'a str> {
        vec![self]
    }

    fn convert_output(
        _texts: Vec<&'a str>,
        mut scores: Vec<Result<PolarityScores>>,
        stats: PipelineStats,
    ) -> Result<Self::Output> {
        let scores = scores
            .pop()
            .ok_or_else(|| PipelineError::Unexpected("No scores returned".into()))??;
        Ok(Output { scores, stats })
    }
}

fn batch_output(
    texts: Vec<&str>,
    scores: Vec<Result<PolarityScores>>,
    stats: PipelineStats,
) -> BatchOutput {
    let results = texts
        .into_iter()
        .zip(scores)
        .map(|(text, scores)| BatchResult {
            text: text.to_string(),
            scores,
        })
        .collect();
    BatchOutput { results, stats }
}

impl<'a> SentimentInput<'a> for &'a [&'a str] {
    type Output = BatchOutput;

    fn into_texts(self) -> Vec<&'a str> {
        self.to_vec()
    }

    fn convert_output(
        texts: Vec<&'a str>,
        scores: Vec<Result<PolarityScores>>,
        stats: PipelineStats,
    ) -> Result<Self::Output> {
        Ok(batch_output(texts, scores, stats))
    }
}

impl<'a, const N: usize> SentimentInput<'a> for &'a [&'a str; N] {
    type Output = BatchOutput;

    fn into_texts(self) -> Vec<&'a str> {
        self.as_slice().to_vec()
    }

    fn convert_output(
        texts: Vec<&'a str>,
        scores: Vec<Result<PolarityScores>>,
        stats: PipelineStats,
    ) -> Result<Self::Output> {
        Ok(batch_output(texts, scores, stats))
    }
}

// ============ Pipeline ============

/// Scores text polarity (negative, neutral, positive, compound).
///
/// Construct with [`SentimentAnalysisPipelineBuilder`](super::SentimentAnalysisPipelineBuilder).
///
/// # Examples
///
/// ```rust,no_run
/// # use email_sentiment::sentiment::SentimentAnalysisPipelineBuilder;
/// # fn main() -> email_sentiment::error::Result<()> {
/// let pipeline = SentimentAnalysisPipelineBuilder::vader().build()?;
///
/// let output = pipeline.run("I love this product!")?;
/// println!("compound = {}", output.scores.compound);
///
/// let output = pipeline.run(&["Great!", "Terrible."])?;
/// for r in output.results {
///     println!("{} -> {}", r.text, r.scores?);
/// }
/// # Ok(())
/// # }
/// ```
pub struct SentimentAnalysisPipeline<M: PolarityModel> {
    pub(crate) model: Arc<M>,
}

impl<M: PolarityModel> SentimentAnalysisPipeline<M> {
    /// Wrap an already-loaded model, bypassing the model cache.
    pub fn from_model(model: M) -> Self {
        Self {
            model: Arc::new(model),
        }
    }

    /// Score text polarity.
    ///
    /// Single input → [`Output`], batch → [`BatchOutput`].
    ///
    /// # Errors
    ///
    /// For a single text, any scoring error. For a batch, only errors affecting the whole
    /// batch; per-text errors are kept in [`BatchResult::scores`].
    pub fn run<'a, I: SentimentInput<'a>>(&self, input: I) -> Result<I::Output> {
        let stats_builder = PipelineStats::start();
        let texts = input.into_texts();
        let item_count = texts.len();

        let scores = self.model.polarity_scores_batch(&texts)?;
        tracing::debug!(items = item_count, "scored batch");

        I::convert_output(texts, scores, stats_builder.finish(item_count))
    }

    /// The model behind this pipeline.
    pub fn model(&self) -> &M {
        &self.model
    }
}
