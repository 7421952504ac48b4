use async_trait::async_trait;
use bl_core::{Dimension, FixedClock, Scheduler};
use bl_inference::models::mock::{
    EMOTIONAL_TONE_RANGE, FACTUAL_GROUNDING_RANGE, FRAMING_CHOICES_RANGE, IDEOLOGICAL_STANCE_RANGE,
    RESPONSE_TIME_RANGE, SOURCE_TRANSPARENCY_RANGE,
};
use bl_inference::{
    create_simulator_with, AnalysisSession, IgnoredReason, InstantScheduler, SessionRun,
    SimulatorConfig, Submission,
};
use bl_store::{Action, AnalysisStatus, Store};
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio_test::assert_pending;

/// Blocks every stage until the test hands out a permit.
struct GatedScheduler {
    gate: Arc<Semaphore>,
}

#[async_trait]
impl Scheduler for GatedScheduler {
    async fn pause(&self, _delay: Duration) {
        if let Ok(permit) = self.gate.acquire().await {
            permit.forget();
        }
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn session_with(scheduler: Arc<dyn Scheduler>, seed: u64) -> AnalysisSession {
    let config = SimulatorConfig {
        step_delay: Duration::from_millis(800),
        seed: Some(seed),
    };
    let simulator = create_simulator_with(&config, scheduler, Arc::new(FixedClock(today())));
    AnalysisSession::new(Store::new(), simulator)
}

fn instant_session(seed: u64) -> AnalysisSession {
    session_with(Arc::new(InstantScheduler::new()), seed)
}

fn completed(run: SessionRun) -> bl_core::AnalysisOutcome {
    match run {
        SessionRun::Completed { outcome, .. } => outcome,
        SessionRun::Ignored(reason) => panic!("run was ignored: {:?}", reason),
    }
}

#[tokio::test]
async fn test_two_runs_bump_processed_count_by_two() {
    let session = instant_session(11);
    let before = session.store().snapshot().metrics.articles_processed;

    for _ in 0..2 {
        completed(session.analyze("https://example.com/a").await);
        let metrics = session.store().snapshot().metrics;
        assert!(RESPONSE_TIME_RANGE.contains(&metrics.avg_response_time_ms));
    }

    let state = session.store().snapshot();
    assert_eq!(state.metrics.articles_processed, before + 2);
    assert_eq!(state.status, AnalysisStatus::Complete);
    assert_eq!(state.progress, 100);
}

#[tokio::test]
async fn test_example_scenario() {
    let session = instant_session(12);
    let outcome = completed(session.analyze("https://example.com/a").await);

    let live = session.store().snapshot().live.unwrap();
    assert_eq!(live, outcome.record);
    assert_eq!(live.source, "Live Analysis");
    assert_eq!(live.published_at, today());

    let s = live.scores;
    assert!(IDEOLOGICAL_STANCE_RANGE.contains(&s.ideological_stance));
    assert!(FACTUAL_GROUNDING_RANGE.contains(&s.factual_grounding));
    assert!(FRAMING_CHOICES_RANGE.contains(&s.framing_choices));
    assert!(EMOTIONAL_TONE_RANGE.contains(&s.emotional_tone));
    assert!(SOURCE_TRANSPARENCY_RANGE.contains(&s.source_transparency));
    assert!((0.85..1.0).contains(&live.confidence));

    for dimension in [
        Dimension::EmotionalTone,
        Dimension::FramingChoices,
        Dimension::IdeologicalStance,
    ] {
        assert!(!live.phrases(dimension).is_empty(), "{} has no phrases", dimension);
    }
}

#[tokio::test]
async fn test_blank_input_leaves_state_untouched() {
    let session = instant_session(13);
    let before = session.store().snapshot();

    assert_eq!(session.analyze("   ").await, SessionRun::Ignored(IgnoredReason::EmptyInput));

    let after = session.store().snapshot();
    assert_eq!(after.metrics, before.metrics);
    assert_eq!(after.status, AnalysisStatus::Idle);
    assert!(after.live.is_none());
}

#[tokio::test]
async fn test_new_run_replaces_live_record() {
    let session = instant_session(14);
    completed(session.analyze("https://example.com/a").await);
    completed(session.analyze("https://example.com/b").await);

    let live = session.store().snapshot().live.unwrap();
    assert_eq!(live.url, "https://example.com/b");
}

#[tokio::test]
async fn test_same_seed_same_record() {
    let a = completed(instant_session(15).analyze("https://example.com/a").await);
    let b = completed(instant_session(15).analyze("https://example.com/a").await);
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_submission_while_running_is_ignored() {
    let gate = Arc::new(Semaphore::new(0));
    let session = session_with(Arc::new(GatedScheduler { gate: gate.clone() }), 16);
    session.store().dispatch(Action::SetInput("https://example.com/a".to_string()));

    let mut first = tokio_test::task::spawn(session.submit());
    assert_pending!(first.poll());

    let state = session.store().snapshot();
    assert!(state.is_analyzing());
    assert_eq!(state.progress, 0);

    assert_eq!(session.submit().await, SessionRun::Ignored(IgnoredReason::Busy));
    assert_eq!(
        session.store().snapshot().metrics.articles_processed,
        bl_store::state::INITIAL_ARTICLES_PROCESSED
    );

    gate.add_permits(5);
    completed(first.await);
    assert_eq!(
        session.store().snapshot().metrics.articles_processed,
        bl_store::state::INITIAL_ARTICLES_PROCESSED + 1
    );
}

#[tokio::test]
async fn test_spawned_runs_report_progress_to_subscribers() {
    let session = Arc::new(instant_session(17));
    let mut rx = session.store().subscribe();
    session.store().dispatch(Action::ChoosePreset(1));

    let run_id = match session.spawn_submit() {
        Submission::Accepted { run_id } => run_id,
        other => panic!("unexpected submission: {:?}", other),
    };

    let mut seen = Vec::new();
    let state = rx
        .wait_for(|state| {
            if state.is_analyzing() && seen.last() != Some(&state.progress) {
                seen.push(state.progress);
            }
            state.status == AnalysisStatus::Complete
        })
        .await
        .unwrap()
        .clone();

    assert_eq!(state.run_id, Some(run_id));
    assert_eq!(state.live.unwrap().url, bl_core::PRESET_LOCATORS[1]);
    assert!(seen.windows(2).all(|w| w[0] < w[1]), "progress went backwards: {:?}", seen);

    match session.spawn_submit() {
        Submission::Accepted { run_id: next } => assert_ne!(next, run_id),
        other => panic!("unexpected submission: {:?}", other),
    }
}

#[tokio::test]
async fn test_dropped_run_unlocks_the_dashboard() {
    let gate = Arc::new(Semaphore::new(0));
    let session = session_with(Arc::new(GatedScheduler { gate: gate.clone() }), 18);
    session.store().dispatch(Action::SetInput("https://example.com/a".to_string()));

    let timed_out = tokio::time::timeout(Duration::from_millis(10), session.submit()).await;
    assert!(timed_out.is_err());

    let state = session.store().snapshot();
    assert_eq!(state.status, AnalysisStatus::Idle);
    assert_eq!(state.stage, None);
    assert_eq!(state.run_id, None);
    assert!(state.live.is_none());
    assert_eq!(state.input, "https://example.com/a");

    gate.add_permits(5);
    completed(session.submit().await);
    assert_eq!(
        session.store().snapshot().metrics.articles_processed,
        bl_store::state::INITIAL_ARTICLES_PROCESSED + 1
    );
}
