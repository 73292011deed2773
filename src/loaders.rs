use std::panic;

use vader_sentiment::SentimentIntensityAnalyzer;

use crate::error::{PipelineError, Result};

/// Sentence whose only lexicon hit is positive. An analyzer that scores it
/// as anything but positive has no usable lexicon.
const PROBE_TEXT: &str = "good";

#[derive(Debug, Clone)]
pub struct LexiconLoader {
    pub name: String,
}

impl LexiconLoader {
    pub fn new(name: &str) -> Self {
        Self { name: name.into() }
    }

    /// Initializes the analyzer once and checks that its lexicon is live.
    ///
    /// There is no retry: a lexicon that fails to load here will not load on
    /// a second attempt in the same process.
    pub fn load(&self) -> Result<SentimentIntensityAnalyzer<'static>> {
        let _span = tracing::info_span!("load_lexicon", lexicon = %self.name).entered();

        let analyzer = panic::catch_unwind(|| SentimentIntensityAnalyzer::new()).map_err(|payload| {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "analyzer initialization panicked".to_string());
            PipelineError::ResourceUnavailable(format!(
                "failed to initialize '{}': {reason}",
                self.name
            ))
        })?;

        let probe = analyzer.polarity_scores(PROBE_TEXT);
        let pos = probe.get("pos").copied().unwrap_or_default();
        if pos <= 0.0 {
            return Err(PipelineError::ResourceUnavailable(format!(
                "lexicon '{}' gave no valence for probe text {PROBE_TEXT:?}",
                self.name
            )));
        }

        tracing::debug!(lexicon = %self.name, probe_pos = pos, "lexicon loaded");
        Ok(analyzer)
    }
}
