use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

pub const MAX_SCORE: u8 = 100;

/// One of the five bias-scoring axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    IdeologicalStance,
    FactualGrounding,
    FramingChoices,
    EmotionalTone,
    SourceTransparency,
}

impl Dimension {
    /// Canonical order, used everywhere scores are listed.
    pub const ALL: [Dimension; 5] = [
        Dimension::IdeologicalStance,
        Dimension::FactualGrounding,
        Dimension::FramingChoices,
        Dimension::EmotionalTone,
        Dimension::SourceTransparency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::IdeologicalStance => "ideological_stance",
            Dimension::FactualGrounding => "factual_grounding",
            Dimension::FramingChoices => "framing_choices",
            Dimension::EmotionalTone => "emotional_tone",
            Dimension::SourceTransparency => "source_transparency",
        }
    }

    /// Wire name with underscores shown as spaces, e.g. "ideological stance".
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::IdeologicalStance => "ideological stance",
            Dimension::FactualGrounding => "factual grounding",
            Dimension::FramingChoices => "framing choices",
            Dimension::EmotionalTone => "emotional tone",
            Dimension::SourceTransparency => "source transparency",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| Error::InvalidInput(format!("Unknown dimension: {}", s)))
    }
}

/// A locator that is non-empty after trimming. Nothing else is checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locator(String);

impl Locator {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Locator {
    type Error = Error;

    fn try_from(raw: String) -> Result<Self> {
        Locator::parse(&raw).ok_or_else(|| Error::InvalidInput("locator is empty".to_string()))
    }
}

impl From<Locator> for String {
    fn from(locator: Locator) -> Self {
        locator.0
    }
}

/// Scores for all five dimensions. Every field is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawScores")]
pub struct Scores {
    pub ideological_stance: u8,
    pub factual_grounding: u8,
    pub framing_choices: u8,
    pub emotional_tone: u8,
    pub source_transparency: u8,
}

impl Scores {
    pub fn new(
        ideological_stance: u8,
        factual_grounding: u8,
        framing_choices: u8,
        emotional_tone: u8,
        source_transparency: u8,
    ) -> Result<Self> {
        let scores = Self {
            ideological_stance,
            factual_grounding,
            framing_choices,
            emotional_tone,
            source_transparency,
        };
        scores.validate()?;
        Ok(scores)
    }

    pub fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::IdeologicalStance => self.ideological_stance,
            Dimension::FactualGrounding => self.factual_grounding,
            Dimension::FramingChoices => self.framing_choices,
            Dimension::EmotionalTone => self.emotional_tone,
            Dimension::SourceTransparency => self.source_transparency,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, u8)> + '_ {
        Dimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }

    pub fn validate(&self) -> Result<()> {
        for (dimension, score) in self.iter() {
            if score > MAX_SCORE {
                return Err(Error::InvalidRecord(format!(
                    "{} score {} is outside [0, {}]",
                    dimension, score, MAX_SCORE
                )));
            }
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct RawScores {
    ideological_stance: u8,
    factual_grounding: u8,
    framing_choices: u8,
    emotional_tone: u8,
    source_transparency: u8,
}

impl TryFrom<RawScores> for Scores {
    type Error = Error;

    fn try_from(raw: RawScores) -> Result<Self> {
        Scores::new(
            raw.ideological_stance,
            raw.factual_grounding,
            raw.framing_choices,
            raw.emotional_tone,
            raw.source_transparency,
        )
    }
}

/// Snippets illustrating a dimension. Absent keys mean nothing was recorded.
pub type HighlightedPhrases = BTreeMap<Dimension, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawArticleRecord")]
pub struct ArticleRecord {
    pub source: String,
    pub title: String,
    pub scores: Scores,
    pub highlighted_phrases: HighlightedPhrases,
    pub confidence: f64,
    #[serde(rename = "publishedAt")]
    pub published_at: NaiveDate,
    pub url: String,
}

#[derive(Deserialize)]
struct RawArticleRecord {
    source: String,
    title: String,
    scores: Scores,
    highlighted_phrases: HighlightedPhrases,
    confidence: f64,
    #[serde(rename = "publishedAt")]
    published_at: NaiveDate,
    url: String,
}

impl TryFrom<RawArticleRecord> for ArticleRecord {
    type Error = Error;

    fn try_from(raw: RawArticleRecord) -> Result<Self> {
        let record = ArticleRecord {
            source: raw.source,
            title: raw.title,
            scores: raw.scores,
            highlighted_phrases: raw.highlighted_phrases,
            confidence: raw.confidence,
            published_at: raw.published_at,
            url: raw.url,
        };
        record.validate()?;
        Ok(record)
    }
}

impl ArticleRecord {
    pub fn validate(&self) -> Result<()> {
        self.scores.validate()?;
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(Error::InvalidRecord(format!(
                "confidence {} is outside [0, 1]",
                self.confidence
            )));
        }
        if self.url.trim().is_empty() {
            return Err(Error::InvalidRecord("url is empty".to_string()));
        }
        Ok(())
    }

    pub fn phrases(&self, dimension: Dimension) -> &[String] {
        self.highlighted_phrases
            .get(&dimension)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Confidence as a whole percentage, rounded.
    pub fn confidence_pct(&self) -> u8 {
        (self.confidence * 100.0).round().clamp(0.0, 100.0) as u8
    }
}
