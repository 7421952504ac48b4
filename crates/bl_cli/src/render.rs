//! Plain-text rendering of the dashboard views.
//!
//! Views are wrapped in `Display` types so the binary decides where they go;
//! only [`draw_progress`] and [`clear_progress`] touch the terminal.

use bl_core::classifier::{Classification, ColorToken, Insight};
use bl_core::{ArticleRecord, PRESET_LOCATORS};
use bl_store::view::{score_view, AnalyzerView, OperationsView, ProgressView, ResultView, ScoreView};
use crossterm::cursor::MoveToColumn;
use crossterm::style::{Color, Print, Stylize};
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use std::fmt;
use std::io::{self, Write};

const BAR_WIDTH: usize = 20;
const LABEL_WIDTH: usize = 22;

fn color_of(token: ColorToken) -> Color {
    match token {
        ColorToken::Green => Color::Green,
        ColorToken::Amber => Color::Yellow,
        ColorToken::Red => Color::Red,
    }
}

fn bar(percent: u8) -> String {
    let filled = (percent.min(100) as usize * BAR_WIDTH) / 100;
    "▉".repeat(filled) + &"▏".repeat(BAR_WIDTH - filled)
}

pub fn progress_line(progress: &ProgressView) -> String {
    format!(
        "{:<34} {:>3}%|{}|",
        progress.message,
        progress.percent,
        bar(progress.percent)
    )
}

pub fn score_line(score: &ScoreView) -> String {
    let tinted = format!("{:>3} {}", score.score, score.tier.as_str()).with(color_of(score.color));
    format!(
        "  {:<width$} {} {}",
        score.label,
        bar(score.score),
        tinted,
        width = LABEL_WIDTH
    )
}

fn insight_line(insight: &Insight) -> String {
    format!("  {}: {}", insight.heading.bold(), insight.text)
}

pub fn draw_progress(out: &mut impl Write, progress: &ProgressView) -> io::Result<()> {
    out.queue(MoveToColumn(0))?
        .queue(Clear(ClearType::CurrentLine))?
        .queue(Print(progress_line(progress)))?;
    out.flush()
}

pub fn clear_progress(out: &mut impl Write) -> io::Result<()> {
    out.queue(MoveToColumn(0))?
        .queue(Clear(ClearType::CurrentLine))?;
    out.flush()
}

/// Analyzer tab: the live result, then the progress line while a run is in flight.
pub struct AnalyzerText<'a>(pub &'a AnalyzerView);

impl fmt::Display for AnalyzerText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.result {
            Some(result) => write!(f, "{}", ResultText(result))?,
            None => writeln!(f, "No analysis yet.")?,
        }
        if let Some(progress) = &self.0.progress {
            writeln!(f, "{}", progress_line(progress))?;
        }
        Ok(())
    }
}

pub struct ResultText<'a>(pub &'a ResultView);

impl fmt::Display for ResultText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        writeln!(f, "{}", result.title.as_str().bold())?;
        writeln!(f, "{} · {} · {}", result.source, result.url, result.published_at)?;
        writeln!(
            f,
            "Confidence {}% · analyzed in {}ms",
            result.confidence_pct, result.analyzed_in_ms
        )?;

        writeln!(f, "\nBias profile")?;
        for score in &result.scores {
            writeln!(f, "{}", score_line(score))?;
        }

        if !result.insights.is_empty() {
            writeln!(f, "\nKey insights")?;
            for insight in &result.insights {
                writeln!(f, "{}", insight_line(insight))?;
            }
        }

        if !result.highlighted_phrases.is_empty() {
            writeln!(f, "\nHighlighted phrases")?;
            for (dimension, phrases) in &result.highlighted_phrases {
                let quoted: Vec<String> = phrases.iter().map(|p| format!("\"{}\"", p)).collect();
                writeln!(
                    f,
                    "  {:<width$} {}",
                    dimension.label(),
                    quoted.join(", "),
                    width = LABEL_WIDTH
                )?;
            }
        }
        Ok(())
    }
}

pub struct OperationsText<'a>(pub &'a OperationsView);

impl fmt::Display for OperationsText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        writeln!(f, "{}", "System metrics".bold())?;
        for card in &view.metrics {
            writeln!(f, "  {:<20} {:>8}  {}", card.label, card.value, card.note)?;
        }

        writeln!(f, "\n{}", "Performance (24h)".bold())?;
        for point in view.performance {
            writeln!(
                f,
                "  {}  {:>4}ms  {:>3}%",
                point.time, point.response_time_ms, point.accuracy_pct
            )?;
        }

        writeln!(f, "\n{}", "Throughput".bold())?;
        for point in view.throughput {
            writeln!(f, "  {}  {:>4} articles", point.hour, point.articles)?;
        }

        writeln!(f, "\n{}", "Recent analyses".bold())?;
        for card in &view.portfolio {
            writeln!(f, "  {} · {}", card.source, card.title)?;
            writeln!(f, "{}", score_line(&card.emotional_tone))?;
            writeln!(f, "{}", score_line(&card.framing))?;
        }
        Ok(())
    }
}

pub struct SamplesText<'a>(pub &'a [ArticleRecord]);

impl fmt::Display for SamplesText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", record.title.as_str().bold())?;
            writeln!(
                f,
                "{} · {} · confidence {}%",
                record.source,
                record.published_at,
                record.confidence_pct()
            )?;
            for (dimension, score) in record.scores.iter() {
                writeln!(f, "{}", score_line(&score_view(dimension, score)))?;
            }
        }
        Ok(())
    }
}

pub struct PresetsText;

impl fmt::Display for PresetsText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, locator) in PRESET_LOCATORS.iter().enumerate() {
            writeln!(f, "  [{}] {}", i, locator)?;
        }
        Ok(())
    }
}

pub struct ClassificationText<'a> {
    pub classification: &'a Classification,
    pub insights: &'a [Insight],
}

impl fmt::Display for ClassificationText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.classification;
        writeln!(f, "{} {} ({})", c.score, c.tier.as_str().with(color_of(c.color)), c.hex)?;
        for insight in self.insights {
            writeln!(f, "{}", insight_line(insight))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bl_core::classifier::{classify, describe, INSIGHT_DIMENSIONS};
    use bl_core::{sample_articles, AnalysisStage};
    use bl_store::view::{analyzer_view, operations_view};
    use bl_store::{reduce, Action, DashboardState};

    #[test]
    fn test_bar_width() {
        assert_eq!(bar(0).chars().filter(|&c| c == '▉').count(), 0);
        assert_eq!(bar(50).chars().filter(|&c| c == '▉').count(), 10);
        assert_eq!(bar(100).chars().count(), BAR_WIDTH);
    }

    #[test]
    fn test_progress_line() {
        let line = progress_line(&ProgressView {
            message: AnalysisStage::FactualGrounding.message(),
            percent: 60,
        });
        assert!(line.starts_with("Evaluating factual grounding..."));
        assert!(line.contains(" 60%|"));
    }

    #[test]
    fn test_empty_analyzer() {
        let text = AnalyzerText(&analyzer_view(&DashboardState::default())).to_string();
        assert_eq!(text, "No analysis yet.\n");
    }

    #[test]
    fn test_analyzer_with_result() {
        let mut state = DashboardState::default();
        reduce(
            &mut state,
            Action::AnalysisCompleted {
                record: sample_articles()[0].clone(),
                response_time_ms: 350,
            },
        );
        let text = AnalyzerText(&analyzer_view(&state)).to_string();
        assert!(text.contains("New York Post"));
        assert!(text.contains("analyzed in 350ms"));
        assert!(text.contains("ideological stance"));
        assert!(text.contains("Highly inflammatory language detected"));
        assert!(text.contains("Highlighted phrases"));
    }

    #[test]
    fn test_operations() {
        let text = OperationsText(&operations_view(&DashboardState::default())).to_string();
        assert!(text.contains("Articles Processed"));
        assert!(text.contains("156"));
        assert!(text.contains("340ms"));
        assert!(text.contains("TechCrunch"));
    }

    #[test]
    fn test_samples_and_presets() {
        let text = SamplesText(sample_articles()).to_string();
        assert!(text.contains("Axios"));
        assert_eq!(text.matches("source transparency").count(), 3);

        let presets = PresetsText.to_string();
        assert_eq!(presets.lines().count(), PRESET_LOCATORS.len());
        assert!(presets.starts_with("  [0] https://techcrunch.com"));
    }

    #[test]
    fn test_classification() {
        let insights: Vec<Insight> = INSIGHT_DIMENSIONS
            .iter()
            .filter_map(|&d| describe(d, 71))
            .collect();
        let text = ClassificationText {
            classification: &classify(71u8),
            insights: &insights,
        }
        .to_string();
        assert!(text.starts_with("71 "));
        assert!(text.contains("high"));
        assert!(text.contains("#ef4444"));
        assert!(text.contains("Heavy editorial framing detected"));
    }

    #[test]
    fn test_draw_progress_writes_line() {
        let mut buf = Vec::new();
        draw_progress(
            &mut buf,
            &ProgressView {
                message: AnalysisStage::ExtractContent.message(),
                percent: 20,
            },
        )
        .unwrap();
        let written = String::from_utf8(buf).unwrap();
        assert!(written.contains("Extracting article content..."));
    }
}
