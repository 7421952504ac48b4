//! Read-only view models of the dashboard.
//!
//! Every function here is a pure function of a [`DashboardState`] snapshot;
//! hosts (terminal, HTTP) only format what they get back.

use bl_core::classifier::{classify, key_insights, ColorToken, Insight, Tier};
use bl_core::samples::{PerformancePoint, ThroughputPoint, PERFORMANCE_SERIES, THROUGHPUT_SERIES};
use bl_core::{sample_articles, ArticleRecord, Dimension, HighlightedPhrases, PRESET_LOCATORS};
use chrono::NaiveDate;
use serde::Serialize;

use crate::state::{ActiveTab, AnalysisStatus, DashboardState, SystemMetrics};

pub const CARD_TITLE_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DashboardView {
    Analyzer(AnalyzerView),
    Operations(OperationsView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzerView {
    pub input: String,
    pub input_enabled: bool,
    pub analyze_enabled: bool,
    pub status: AnalysisStatus,
    pub progress: Option<ProgressView>,
    pub result: Option<ResultView>,
    pub presets: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressView {
    pub message: &'static str,
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    pub source: String,
    pub title: String,
    pub url: String,
    pub published_at: NaiveDate,
    pub confidence_pct: u8,
    pub analyzed_in_ms: u32,
    pub scores: Vec<ScoreView>,
    pub insights: Vec<Insight>,
    pub highlighted_phrases: HighlightedPhrases,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreView {
    pub dimension: Dimension,
    pub label: &'static str,
    pub score: u8,
    pub tier: Tier,
    pub color: ColorToken,
    pub hex: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationsView {
    pub metrics: Vec<MetricCard>,
    pub performance: &'static [PerformancePoint],
    pub throughput: &'static [ThroughputPoint],
    pub portfolio: Vec<SampleCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
    pub note: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleCard {
    pub source: String,
    pub title: String,
    pub emotional_tone: ScoreView,
    pub framing: ScoreView,
}

pub fn present(state: &DashboardState) -> DashboardView {
    match state.active_tab {
        ActiveTab::Analyzer => DashboardView::Analyzer(analyzer_view(state)),
        ActiveTab::Operations => DashboardView::Operations(operations_view(state)),
    }
}

pub fn analyzer_view(state: &DashboardState) -> AnalyzerView {
    let progress = state.is_analyzing().then(|| ProgressView {
        message: state.stage.map(|s| s.message()).unwrap_or_default(),
        percent: state.progress,
    });

    AnalyzerView {
        input: state.input.clone(),
        input_enabled: !state.is_analyzing(),
        analyze_enabled: state.can_submit(),
        status: state.status,
        progress,
        result: state.live.as_ref().map(|r| result_view(r, &state.metrics)),
        presets: PRESET_LOCATORS.to_vec(),
    }
}

pub fn result_view(record: &ArticleRecord, metrics: &SystemMetrics) -> ResultView {
    ResultView {
        source: record.source.clone(),
        title: record.title.clone(),
        url: record.url.clone(),
        published_at: record.published_at,
        confidence_pct: record.confidence_pct(),
        analyzed_in_ms: metrics.avg_response_time_ms,
        scores: record.scores.iter().map(|(d, s)| score_view(d, s)).collect(),
        insights: key_insights(&record.scores),
        highlighted_phrases: record.highlighted_phrases.clone(),
    }
}

pub fn score_view(dimension: Dimension, score: u8) -> ScoreView {
    let c = classify(score);
    ScoreView {
        dimension,
        label: dimension.label(),
        score,
        tier: c.tier,
        color: c.color,
        hex: c.hex,
    }
}

pub fn operations_view(state: &DashboardState) -> OperationsView {
    OperationsView {
        metrics: metric_cards(&state.metrics),
        performance: &PERFORMANCE_SERIES,
        throughput: &THROUGHPUT_SERIES,
        portfolio: sample_articles().iter().map(sample_card).collect(),
    }
}

pub fn metric_cards(metrics: &SystemMetrics) -> Vec<MetricCard> {
    vec![
        MetricCard {
            label: "Articles Processed",
            value: metrics.articles_processed.to_string(),
            note: "+12% from yesterday",
        },
        MetricCard {
            label: "Avg Response Time",
            value: format!("{}ms", metrics.avg_response_time_ms),
            note: "Target: <500ms",
        },
        MetricCard {
            label: "Accuracy Rate",
            value: format!("{}%", metrics.accuracy_pct),
            note: "vs human raters",
        },
        MetricCard {
            label: "System Uptime",
            value: format!("{}%", metrics.uptime_pct),
            note: "Last 30 days",
        },
    ]
}

pub fn sample_card(record: &ArticleRecord) -> SampleCard {
    SampleCard {
        source: record.source.clone(),
        title: truncate_title(&record.title, CARD_TITLE_CHARS),
        emotional_tone: score_view(Dimension::EmotionalTone, record.scores.emotional_tone),
        framing: score_view(Dimension::FramingChoices, record.scores.framing_choices),
    }
}

/// First `max_chars` characters followed by "...", as the portfolio cards show.
pub fn truncate_title(title: &str, max_chars: usize) -> String {
    let mut short: String = title.chars().take(max_chars).collect();
    short.push_str("...");
    short
}
