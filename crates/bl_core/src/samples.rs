use chrono::NaiveDate;
use lazy_static::lazy_static;
use serde::Serialize;

use crate::types::{ArticleRecord, Dimension, HighlightedPhrases, Scores};

/// Locators offered as one-click prefills for the analyzer input.
pub const PRESET_LOCATORS: [&str; 4] = [
    "https://techcrunch.com/2025/08/08/instagram-map-privacy",
    "https://nypost.com/2025/08/07/tech/instagram-stalkers",
    "https://axios.com/2025/08/09/lawmakers-instagram-map",
    "https://washingtonpost.com/2025/08/09/gen-z-instagram",
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerformancePoint {
    pub time: &'static str,
    pub response_time_ms: u32,
    pub accuracy_pct: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThroughputPoint {
    pub hour: &'static str,
    pub articles: u32,
}

pub const PERFORMANCE_SERIES: [PerformancePoint; 6] = [
    PerformancePoint { time: "12:00", response_time_ms: 320, accuracy_pct: 89 },
    PerformancePoint { time: "12:30", response_time_ms: 340, accuracy_pct: 91 },
    PerformancePoint { time: "1:00", response_time_ms: 360, accuracy_pct: 88 },
    PerformancePoint { time: "1:30", response_time_ms: 290, accuracy_pct: 93 },
    PerformancePoint { time: "2:00", response_time_ms: 340, accuracy_pct: 91 },
    PerformancePoint { time: "2:30", response_time_ms: 380, accuracy_pct: 87 },
];

pub const THROUGHPUT_SERIES: [ThroughputPoint; 6] = [
    ThroughputPoint { hour: "9 AM", articles: 45 },
    ThroughputPoint { hour: "10 AM", articles: 67 },
    ThroughputPoint { hour: "11 AM", articles: 89 },
    ThroughputPoint { hour: "12 PM", articles: 123 },
    ThroughputPoint { hour: "1 PM", articles: 156 },
    ThroughputPoint { hour: "2 PM", articles: 134 },
];

lazy_static! {
    static ref SAMPLE_ARTICLES: Vec<ArticleRecord> = vec![
        sample(
            "New York Post",
            "Instagram's new location tracking feature accused of attracting stalkers",
            [45, 60, 85, 90, 40],
            &[
                (Dimension::EmotionalTone, &["accused of attracting stalkers", "make it easier for stalkers"]),
                (Dimension::FramingChoices, &["recommend disabling it immediately", "critics say"]),
                (Dimension::IdeologicalStance, &["new feature", "privacy concerns"]),
            ],
            0.87,
            (2025, 8, 7),
            "https://nypost.com/2025/08/07/tech/instagrams-new-location-tracking-feature",
        ),
        sample(
            "TechCrunch",
            "How to use Instagram Map and protect your privacy",
            [55, 90, 25, 15, 85],
            &[
                (Dimension::FactualGrounding, &["explains how Instagram's Map works", "time limits on location sharing"]),
                (Dimension::SourceTransparency, &["TechCrunch explains", "how to control"]),
                (Dimension::FramingChoices, &["protect your privacy", "how to use"]),
            ],
            0.94,
            (2025, 8, 8),
            "https://techcrunch.com/2025/08/08/how-to-use-instagram-map",
        ),
        sample(
            "Axios",
            "Lawmakers urge Meta to shut down Instagram Map: 'abysmal' at protecting children",
            [30, 85, 70, 60, 90],
            &[
                (Dimension::EmotionalTone, &["abysmal at protecting children", "urging Meta"]),
                (Dimension::FramingChoices, &["lawmakers criticized", "shut down"]),
                (Dimension::SourceTransparency, &["bipartisan lawmakers", "calling it 'abysmal'"]),
            ],
            0.91,
            (2025, 8, 9),
            "https://www.axios.com/2025/08/09/instagram-map-democrats",
        ),
    ];
}

/// The fixed sample records shown in the portfolio. Built once, never mutated.
pub fn sample_articles() -> &'static [ArticleRecord] {
    SAMPLE_ARTICLES.as_slice()
}

fn sample(
    source: &str,
    title: &str,
    scores: [u8; 5],
    phrases: &[(Dimension, &[&str])],
    confidence: f64,
    (year, month, day): (i32, u32, u32),
    url: &str,
) -> ArticleRecord {
    let [ideological_stance, factual_grounding, framing_choices, emotional_tone, source_transparency] = scores;
    ArticleRecord {
        source: source.to_string(),
        title: title.to_string(),
        scores: Scores {
            ideological_stance,
            factual_grounding,
            framing_choices,
            emotional_tone,
            source_transparency,
        },
        highlighted_phrases: phrases
            .iter()
            .map(|(dimension, snippets)| {
                (*dimension, snippets.iter().map(|s| s.to_string()).collect())
            })
            .collect::<HighlightedPhrases>(),
        confidence,
        published_at: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        url: url.to_string(),
    }
}
