//! Prints e-mail excerpts next to their polarity scores.
//!
//! Each message prints as its text (unless it is not echoed), then one score line with the
//! scores in key order:
//!
//! ```text
//! compound: -0.9231, neg: 0.178, neu: 0.763, pos: 0.059,
//! ```
//!
//! The first failure, from scoring or from writing, ends the report.

use std::io::Write;

use crate::emails::Message;
use crate::error::Result;
use crate::sentiment::{PolarityModel, PolarityScores, SentimentAnalysisPipeline};

/// One score line, without the terminating newline.
pub fn format_scores(scores: &PolarityScores) -> String {
    scores.to_string()
}

/// Print one message and its score line.
///
/// # Errors
///
/// Returns the scorer's error, or [`PipelineError::Output`](crate::error::PipelineError::Output)
/// if `out` cannot be written.
pub fn write_message<M, W>(
    pipeline: &SentimentAnalysisPipeline<M>,
    message: &Message,
    out: &mut W,
) -> Result<()>
where
    M: PolarityModel,
    W: Write + ?Sized,
{
    let _span = tracing::info_span!("message", name = message.name).entered();

    if message.echo {
        writeln!(out, "{}", message.text)?;
    }

    let output = pipeline.run(message.text)?;
    tracing::info!(
        compound = output.scores.compound,
        elapsed_us = output.stats.total_time.as_micros() as u64,
        "scored"
    );

    writeln!(out, "{}", format_scores(&output.scores))?;
    if message.blank_line_after {
        writeln!(out)?;
    }
    Ok(())
}

/// Print every message in order, then flush `out`.
///
/// # Errors
///
/// Stops at the first scoring or write failure and returns it.
pub fn write_report<M, W>(
    pipeline: &SentimentAnalysisPipeline<M>,
    messages: &[Message],
    out: &mut W,
) -> Result<()>
where
    M: PolarityModel,
    W: Write + ?Sized,
{
    for message in messages {
        write_message(pipeline, message, out)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emails::{CHALLENGE, MESSAGES};
    use crate::error::PipelineError;
    use std::io;

    /// Scores by text length so every message gets distinct, predictable values.
    struct LengthModel;

    impl PolarityModel for LengthModel {
        type Options = ();

        fn new(_options: ()) -> Result<Self> {
            Ok(Self)
        }

        fn polarity_scores(&self, text: &str) -> Result<PolarityScores> {
            if text.len() < 100 {
                Ok(PolarityScores {
                    neg: 0.0,
                    neu: 0.625,
                    pos: 0.375,
                    compound: 0.6249,
                })
            } else {
                Ok(PolarityScores {
                    neg: 0.25,
                    neu: 0.75,
                    pos: 0.0,
                    compound: -0.5,
                })
            }
        }
    }

    struct FailingModel;

    impl PolarityModel for FailingModel {
        type Options = ();

        fn new(_options: ()) -> Result<Self> {
            Ok(Self)
        }

        fn polarity_scores(&self, _text: &str) -> Result<PolarityScores> {
            Err(PipelineError::ResourceUnavailable("no lexicon".into()))
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn render(messages: &[Message]) -> String {
        let pipeline = SentimentAnalysisPipeline::from_model(LengthModel);
        let mut out = Vec::new();
        write_report(&pipeline, messages, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn full_report_layout() {
        let long = "compound: -0.5, neg: 0.25, neu: 0.75, pos: 0.0, ";
        let short = "compound: 0.6249, neg: 0.0, neu: 0.625, pos: 0.375, ";
        let expected = format!(
            "{}\n{long}\n\n{short}\n{}\n{long}\n",
            MESSAGES[0].text, MESSAGES[2].text
        );

        assert_eq!(render(&MESSAGES), expected);
    }

    #[test]
    fn challenge_text_is_not_echoed() {
        let report = render(&MESSAGES);
        assert!(!report.contains(CHALLENGE));
    }

    #[test]
    fn every_score_line_is_key_ordered() {
        let report = render(&MESSAGES);
        let lines: Vec<_> = report
            .lines()
            .filter(|line| line.starts_with("compound: "))
            .collect();

        assert_eq!(lines.len(), 3);
        for line in lines {
            let keys: Vec<_> = line
                .split(", ")
                .filter_map(|pair| pair.split_once(": ").map(|(key, _)| key))
                .collect();
            assert_eq!(keys, PolarityScores::KEYS);
            assert!(line.ends_with(", "));
        }
    }

    #[test]
    fn scorer_failure_stops_after_echo() {
        let pipeline = SentimentAnalysisPipeline::from_model(FailingModel);
        let mut out = Vec::new();

        let err = write_report(&pipeline, &MESSAGES, &mut out).unwrap_err();

        assert!(matches!(err, PipelineError::ResourceUnavailable(_)));
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", MESSAGES[0].text));
    }

    #[test]
    fn write_failure_is_an_output_error() {
        let pipeline = SentimentAnalysisPipeline::from_model(LengthModel);
        let err = write_report(&pipeline, &MESSAGES, &mut BrokenPipe).unwrap_err();
        assert!(matches!(err, PipelineError::Output(_)));
    }
}
