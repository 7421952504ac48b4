use bl_core::{
    locator_host, AnalysisObserver, AnalysisOutcome, AnalysisStage, ArticleRecord, BiasModel, Clock,
    Locator, Scheduler,
};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

pub const LIVE_SOURCE: &str = "Live Analysis";

/// Walks the fixed stage table, then asks the bias model for a profile.
///
/// The simulator has no notion of a run in flight; callers that must not
/// overlap runs check the dashboard state before calling [`run`](Self::run).
pub struct AnalysisSimulator {
    model: Box<dyn BiasModel>,
    scheduler: Arc<dyn Scheduler>,
    clock: Arc<dyn Clock>,
    step_delay: Duration,
}

impl fmt::Debug for AnalysisSimulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisSimulator")
            .field("model", &self.model)
            .field("scheduler", &"<dyn Scheduler>")
            .field("step_delay", &self.step_delay)
            .finish()
    }
}

impl AnalysisSimulator {
    pub fn new(
        model: Box<dyn BiasModel>,
        scheduler: Arc<dyn Scheduler>,
        clock: Arc<dyn Clock>,
        step_delay: Duration,
    ) -> Self {
        Self {
            model,
            scheduler,
            clock,
            step_delay,
        }
    }

    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    /// Run one analysis. A blank locator is a silent no-op.
    pub async fn run<O>(&mut self, locator: &str, observer: &O) -> Option<AnalysisOutcome>
    where
        O: AnalysisObserver + ?Sized,
    {
        let locator = Locator::parse(locator)?;
        Some(self.run_locator(&locator, observer).await)
    }

    pub async fn run_locator<O>(&mut self, locator: &Locator, observer: &O) -> AnalysisOutcome
    where
        O: AnalysisObserver + ?Sized,
    {
        info!("📰 Analyzing article from {}", locator_host(locator.as_str()));

        for stage in AnalysisStage::ALL {
            observer.on_stage_started(stage);
            debug!("🔄 {}", stage.message());
            self.scheduler.pause(self.step_delay).await;
            observer.on_progress(stage.into());
        }

        let profile = self.model.score(locator.as_str());
        let record = ArticleRecord {
            source: LIVE_SOURCE.to_string(),
            title: profile.title,
            scores: profile.scores,
            highlighted_phrases: profile.highlighted_phrases,
            confidence: profile.confidence,
            published_at: self.clock.today(),
            url: locator.to_string(),
        };
        let outcome = AnalysisOutcome {
            record,
            response_time_ms: self.model.response_time_ms(),
        };

        observer.on_complete(&outcome);
        info!(
            "✅ Bias profile ready: {}% confidence, {}ms",
            outcome.record.confidence_pct(),
            outcome.response_time_ms
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MockBiasModel;
    use crate::scheduler::InstantScheduler;
    use bl_core::{Dimension, FixedClock, ProgressUpdate, SystemClock};
    use chrono::{NaiveDate, Utc};
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Started(AnalysisStage),
        Progress(ProgressUpdate),
        Complete,
    }

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<Event>>,
    }

    impl Recorder {
        fn events(&self) -> Vec<Event> {
            self.events.lock().unwrap().clone()
        }

        fn progress(&self) -> Vec<ProgressUpdate> {
            self.events()
                .into_iter()
                .filter_map(|e| match e {
                    Event::Progress(update) => Some(update),
                    _ => None,
                })
                .collect()
        }
    }

    impl AnalysisObserver for Recorder {
        fn on_stage_started(&self, stage: AnalysisStage) {
            self.events.lock().unwrap().push(Event::Started(stage));
        }

        fn on_progress(&self, update: ProgressUpdate) {
            self.events.lock().unwrap().push(Event::Progress(update));
        }

        fn on_complete(&self, _outcome: &AnalysisOutcome) {
            self.events.lock().unwrap().push(Event::Complete);
        }
    }

    fn simulator(seed: u64, scheduler: Arc<InstantScheduler>) -> AnalysisSimulator {
        AnalysisSimulator::new(
            Box::new(MockBiasModel::new(Some(seed))),
            scheduler,
            Arc::new(SystemClock),
            Duration::from_millis(800),
        )
    }

    #[tokio::test]
    async fn test_five_ordered_notifications() {
        let scheduler = Arc::new(InstantScheduler::new());
        let mut sim = simulator(1, scheduler.clone());
        let recorder = Recorder::default();

        let outcome = sim.run("https://example.com/a", &recorder).await;
        assert!(outcome.is_some());

        let progress = recorder.progress();
        let percents: Vec<u8> = progress.iter().map(|p| p.percent).collect();
        assert_eq!(percents, vec![20, 40, 60, 80, 100]);
        let stages: Vec<AnalysisStage> = progress.iter().map(|p| p.stage).collect();
        assert_eq!(stages, AnalysisStage::ALL.to_vec());
        let messages: Vec<&str> = stages.iter().map(|s| s.message()).collect();
        assert_eq!(
            messages,
            vec![
                "Extracting article content...",
                "Analyzing ideological stance...",
                "Evaluating factual grounding...",
                "Detecting framing patterns...",
                "Generating bias profile...",
            ]
        );

        assert_eq!(scheduler.pauses(), vec![Duration::from_millis(800); 5]);
    }

    #[tokio::test]
    async fn test_each_stage_starts_before_its_progress_and_record_comes_last() {
        let mut sim = simulator(2, Arc::new(InstantScheduler::new()));
        let recorder = Recorder::default();
        sim.run("https://example.com/a", &recorder).await;

        let mut expected = Vec::new();
        for stage in AnalysisStage::ALL {
            expected.push(Event::Started(stage));
            expected.push(Event::Progress(stage.into()));
        }
        expected.push(Event::Complete);
        assert_eq!(recorder.events(), expected);
    }

    #[tokio::test]
    async fn test_blank_locator_is_a_no_op() {
        let scheduler = Arc::new(InstantScheduler::new());
        let mut sim = simulator(3, scheduler.clone());
        let recorder = Recorder::default();

        for blank in ["", "   ", "\t\n"] {
            assert!(sim.run(blank, &recorder).await.is_none());
        }
        assert!(recorder.events().is_empty());
        assert!(scheduler.pauses().is_empty());
    }

    #[tokio::test]
    async fn test_live_record_contents() {
        let mut sim = simulator(4, Arc::new(InstantScheduler::new()));
        let outcome = sim.run("https://example.com/a", &Recorder::default()).await.unwrap();
        let record = &outcome.record;

        assert_eq!(record.source, "Live Analysis");
        assert_eq!(record.url, "https://example.com/a");
        assert_eq!(record.published_at, Utc::now().date_naive());
        assert!((0.85..1.0).contains(&record.confidence));
        assert!((320..420).contains(&outcome.response_time_ms));
        for dimension in [
            Dimension::EmotionalTone,
            Dimension::FramingChoices,
            Dimension::IdeologicalStance,
        ] {
            assert!(!record.phrases(dimension).is_empty());
        }
        record.validate().unwrap();
    }

    #[tokio::test]
    async fn test_locator_is_trimmed_and_date_comes_from_clock() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 9).unwrap();
        let mut sim = AnalysisSimulator::new(
            Box::new(MockBiasModel::new(Some(5))),
            Arc::new(InstantScheduler::new()),
            Arc::new(FixedClock(date)),
            Duration::ZERO,
        );
        let outcome = sim.run("  https://example.com/b  ", &Recorder::default()).await.unwrap();
        assert_eq!(outcome.record.url, "https://example.com/b");
        assert_eq!(outcome.record.published_at, date);
    }
}
