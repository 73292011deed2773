//! Error types for this crate.
//!
//! All fallible operations return [`Result<T>`] which uses [`PipelineError`] as the error type.

use thiserror::Error;

/// A [`Result`](std::result::Result) alias using [`PipelineError`] as the error type.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// The unified error type for all crate errors.
///
/// None of these are recovered from inside the crate. The binary lets them
/// reach `main`, which prints the diagnostic and exits non-zero.
///
/// # Example
///
/// ```rust,no_run
/// use email_sentiment::error::PipelineError;
///
/// fn handle_error(e: PipelineError) {
///     match &e {
///         PipelineError::ResourceUnavailable(_) => {
///             // Analyzer lexicon missing - nothing can be scored
///         }
///         PipelineError::Output(_) => {
///             // stdout closed or full
///         }
///         PipelineError::Unexpected(_) => {
///             eprintln!("Internal error: {e}");
///         }
///         _ => {}
///     }
/// }
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PipelineError {
    /// The scorer's linguistic resource could not be loaded. Retrying won't help.
    #[error("sentiment resource unavailable: {0}")]
    ResourceUnavailable(String),

    /// Writing the report to the output stream failed.
    #[error("failed to write output: {0}")]
    Output(String),

    /// Internal error. Report if seen.
    #[error("{0}")]
    Unexpected(String),
}

impl From<std::io::Error> for PipelineError {
    fn from(value: std::io::Error) -> Self {
        PipelineError::Output(value.to_string())
    }
}
