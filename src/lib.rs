//! Polarity scores for a handful of e-mail excerpts.
//!
//! Scoring is delegated to [VADER](https://github.com/cjhutto/vaderSentiment), a lexicon and
//! rule-based sentiment analyzer, wrapped in a small pipeline API. The binary prints each
//! excerpt next to its `compound`, `neg`, `neu` and `pos` scores.
//!
//! ```rust,no_run
//! use email_sentiment::sentiment::SentimentAnalysisPipelineBuilder;
//!
//! # fn main() -> email_sentiment::error::Result<()> {
//! let pipeline = SentimentAnalysisPipelineBuilder::vader().build()?;
//! let output = pipeline.run("Looks great.")?;
//! println!("{}", output.scores);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

// ============ Internal API ============

pub(crate) mod loaders;
pub(crate) mod models;
pub(crate) mod pipelines;

// ============ Public API ============

pub mod emails;
pub mod error;
pub mod report;

pub use pipelines::sentiment;
