pub mod classifier;
pub mod error;
pub mod models;
pub mod observer;
pub mod samples;
pub mod stages;
pub mod types;

pub use classifier::{classify, describe, key_insights, Classification, ColorToken, Insight, InsightLevel, Tier};
pub use error::{Error, Result};
pub use models::{BiasModel, Clock, FixedClock, Scheduler, ScoreProfile, SystemClock};
pub use observer::{AnalysisObserver, AnalysisOutcome};
pub use samples::{sample_articles, PRESET_LOCATORS};
pub use stages::{AnalysisStage, ProgressUpdate};
pub use types::{ArticleRecord, Dimension, HighlightedPhrases, Locator, Scores, MAX_SCORE};

/// Host of a locator for log lines; falls back to the raw text.
pub fn locator_host(locator: &str) -> String {
    url::Url::parse(locator.trim())
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| locator.trim().to_string())
}

pub mod prelude {
    pub use crate::{
        AnalysisObserver, AnalysisOutcome, AnalysisStage, ArticleRecord, Dimension, Error,
        Locator, ProgressUpdate, Result, Scores, Tier,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locator_host() {
        assert_eq!(locator_host("https://example.com/a"), "example.com");
        assert_eq!(locator_host("  not a url  "), "not a url");
    }
}
