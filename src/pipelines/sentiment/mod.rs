//! Polarity scoring pipeline.
//!
//! Scores text with four values: `neg`, `neu` and `pos` (shares of valence that sum to
//! about `1.0`) and `compound`, a normalized aggregate in `[-1.0, 1.0]`.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use email_sentiment::sentiment::SentimentAnalysisPipelineBuilder;
//!
//! # fn main() -> email_sentiment::error::Result<()> {
//! let pipeline = SentimentAnalysisPipelineBuilder::vader().build()?;
//!
//! let output = pipeline.run("Looks great.")?;
//! println!("{}", output.scores);
//! # Ok(())
//! # }
//! ```
//!
//! # Batch Inference
//!
//! ```rust,no_run
//! # use email_sentiment::sentiment::SentimentAnalysisPipelineBuilder;
//! # fn main() -> email_sentiment::error::Result<()> {
//! # let pipeline = SentimentAnalysisPipelineBuilder::vader().build()?;
//! let output = pipeline.run(&["Best purchase ever!", "Very disappointed."])?;
//!
//! for r in output.results {
//!     println!("{}: {}", r.text, r.scores?.compound);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Supported Models
//!
//! | Model | Options | Builder Method |
//! |-------|---------|----------------|
//! | VADER | [`VaderLexicon::English`] | [`SentimentAnalysisPipelineBuilder::vader`] |

// ============ Internal API ============

pub(crate) mod builder;
pub(crate) mod model;
pub(crate) mod pipeline;

// ============ Public API ============

pub use crate::models::VaderLexicon;
pub use crate::pipelines::stats::PipelineStats;
pub use builder::SentimentAnalysisPipelineBuilder;
pub use model::PolarityModel;
pub use pipeline::{BatchOutput, BatchResult, Output, PolarityScores, SentimentAnalysisPipeline};

#[doc(hidden)]
pub use pipeline::SentimentInput;

/// Only for generic annotations. Use [`SentimentAnalysisPipelineBuilder::vader`].
pub type SentimentVader = crate::models::VaderModel;
