use std::collections::HashMap;

use vader_sentiment::SentimentIntensityAnalyzer;

use crate::error::{PipelineError, Result};
use crate::loaders::LexiconLoader;
use crate::pipelines::sentiment::model::PolarityModel;
use crate::pipelines::sentiment::pipeline::PolarityScores;

/// Available VADER lexicons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VaderLexicon {
    /// The English lexicon bundled with the analyzer.
    #[default]
    English,
}

impl std::fmt::Display for VaderLexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            VaderLexicon::English => "vader-english",
        };
        write!(f, "{name}")
    }
}

impl crate::pipelines::cache::ModelOptions for VaderLexicon {
    fn cache_key(&self) -> String {
        self.to_string()
    }
}

/// Rule-based polarity scorer backed by the `vader_sentiment` analyzer.
pub struct VaderModel {
    analyzer: SentimentIntensityAnalyzer<'static>,
    lexicon: VaderLexicon,
}

impl VaderModel {
    /// The lexicon this model was loaded with.
    pub fn lexicon(&self) -> VaderLexicon {
        self.lexicon
    }
}

impl PolarityModel for VaderModel {
    type Options = VaderLexicon;

    fn new(options: Self::Options) -> Result<Self> {
        let analyzer = LexiconLoader::new(&options.to_string()).load()?;
        Ok(Self {
            analyzer,
            lexicon: options,
        })
    }

    fn polarity_scores(&self, text: &str) -> Result<PolarityScores> {
        let raw = self.analyzer.polarity_scores(text);
        tracing::trace!(chars = text.len(), "scored text");
        to_polarity_scores(&raw)
    }
}

fn to_polarity_scores(raw: &HashMap<&str, f64>) -> Result<PolarityScores> {
    let field = |key: &str| {
        raw.get(key).copied().ok_or_else(|| {
            PipelineError::Unexpected(format!("analyzer returned no '{key}' score"))
        })
    };

    // Same precision the reference VADER implementation reports.
    Ok(PolarityScores {
        neg: round_to(field("neg")?, 3),
        neu: round_to(field("neu")?, 3),
        pos: round_to(field("pos")?, 3),
        compound: round_to(field("compound")?, 4),
    })
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
