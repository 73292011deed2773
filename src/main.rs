use std::io;

use email_sentiment::emails::MESSAGES;
use email_sentiment::error::Result;
use email_sentiment::report;
use email_sentiment::sentiment::SentimentAnalysisPipelineBuilder;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let pipeline = SentimentAnalysisPipelineBuilder::vader().build()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_report(&pipeline, &MESSAGES, &mut out)
}
