//! Score classification shared by every display surface.
//!
//! Two independent schemes live here: the three-way severity [`Tier`] used
//! for colors, and the per-dimension [`Insight`] text shown next to the
//! emotional tone, factual grounding and framing scores. The insight
//! thresholds use strict `>` comparisons and do not line up with the tiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{Dimension, Scores};

pub const MEDIUM_TIER_FLOOR: f64 = 30.0;
pub const HIGH_TIER_FLOOR: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Low,
    Medium,
    High,
}

impl Tier {
    pub fn of(score: impl Into<f64>) -> Self {
        let score = score.into();
        if score < MEDIUM_TIER_FLOOR {
            Tier::Low
        } else if score < HIGH_TIER_FLOOR {
            Tier::Medium
        } else {
            Tier::High
        }
    }

    pub fn color(&self) -> ColorToken {
        match self {
            Tier::Low => ColorToken::Green,
            Tier::Medium => ColorToken::Amber,
            Tier::High => ColorToken::Red,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Low => "low",
            Tier::Medium => "medium",
            Tier::High => "high",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    Green,
    Amber,
    Red,
}

impl ColorToken {
    pub fn hex(&self) -> &'static str {
        match self {
            ColorToken::Green => "#22c55e",
            ColorToken::Amber => "#eab308",
            ColorToken::Red => "#ef4444",
        }
    }
}

/// Tier and color for one score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub score: f64,
    pub tier: Tier,
    pub color: ColorToken,
    pub hex: &'static str,
}

pub fn classify(score: impl Into<f64>) -> Classification {
    let score = score.into();
    let tier = Tier::of(score);
    let color = tier.color();
    Classification {
        score,
        tier,
        color,
        hex: color.hex(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightLevel {
    Strong,
    Moderate,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub dimension: Dimension,
    pub heading: &'static str,
    pub score: u8,
    pub level: InsightLevel,
    pub text: &'static str,
}

/// Dimensions that get a qualitative insight, in display order.
pub const INSIGHT_DIMENSIONS: [Dimension; 3] = [
    Dimension::EmotionalTone,
    Dimension::FactualGrounding,
    Dimension::FramingChoices,
];

/// Qualitative reading of a score, or `None` for dimensions without one.
pub fn describe(dimension: Dimension, score: u8) -> Option<Insight> {
    let (heading, strong_above, moderate_above, texts) = match dimension {
        Dimension::EmotionalTone => (
            "Emotional Tone Analysis",
            70,
            40,
            [
                "Highly inflammatory language detected",
                "Moderate emotional bias present",
                "Neutral, factual tone maintained",
            ],
        ),
        Dimension::FactualGrounding => (
            "Factual Grounding",
            80,
            50,
            [
                "Well-sourced with clear attribution",
                "Moderate sourcing quality",
                "Poor sourcing, claims need verification",
            ],
        ),
        Dimension::FramingChoices => (
            "Framing Analysis",
            70,
            40,
            [
                "Heavy editorial framing detected",
                "Some selective emphasis present",
                "Neutral presentation of facts",
            ],
        ),
        Dimension::IdeologicalStance | Dimension::SourceTransparency => return None,
    };

    let (level, text) = if score > strong_above {
        (InsightLevel::Strong, texts[0])
    } else if score > moderate_above {
        (InsightLevel::Moderate, texts[1])
    } else {
        (InsightLevel::Neutral, texts[2])
    };

    Some(Insight {
        dimension,
        heading,
        score,
        level,
        text,
    })
}

pub fn key_insights(scores: &Scores) -> Vec<Insight> {
    INSIGHT_DIMENSIONS
        .iter()
        .filter_map(|&d| describe(d, scores.get(d)))
        .collect()
}
