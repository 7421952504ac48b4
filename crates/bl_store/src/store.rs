use bl_core::{AnalysisObserver, AnalysisOutcome, AnalysisStage, Locator, ProgressUpdate};
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;
use uuid::Uuid;

use crate::action::{reduce, Action};
use crate::state::DashboardState;

/// Owner of the dashboard state.
///
/// Writers dispatch [`Action`]s which are applied by [`reduce`]; readers take
/// snapshots or [`subscribe`](Store::subscribe) to be woken on every change.
/// Cloning is cheap and every clone sees the same state.
#[derive(Clone)]
pub struct Store {
    tx: Arc<watch::Sender<DashboardState>>,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &*self.tx.borrow())
            .field("subscribers", &self.tx.receiver_count())
            .finish()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(DashboardState::default())
    }

    pub fn with_state(state: DashboardState) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self { tx: Arc::new(tx) }
    }

    pub fn dispatch(&self, action: Action) {
        debug!("🗂️ dispatch {:?}", ActionKind(&action));
        self.tx.send_modify(|state| reduce(state, action));
    }

    pub fn snapshot(&self) -> DashboardState {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.tx.subscribe()
    }

    /// Marks a run as started and returns the locator to analyze.
    ///
    /// Returns `None`, leaving the state untouched, when a run is already in
    /// flight or the input is blank. The check and the transition happen
    /// under the same lock.
    pub fn try_begin(&self, run_id: Uuid) -> Option<Locator> {
        let mut locator = None;
        self.tx.send_if_modified(|state| {
            if state.is_analyzing() {
                return false;
            }
            locator = Locator::parse(&state.input);
            if locator.is_none() {
                return false;
            }
            reduce(state, Action::AnalysisStarted { run_id });
            true
        });
        locator
    }
}

impl AnalysisObserver for Store {
    fn on_stage_started(&self, stage: AnalysisStage) {
        self.dispatch(Action::StageStarted(stage));
    }

    fn on_progress(&self, update: ProgressUpdate) {
        self.dispatch(Action::Progress(update));
    }

    fn on_complete(&self, outcome: &AnalysisOutcome) {
        self.dispatch(Action::AnalysisCompleted {
            record: outcome.record.clone(),
            response_time_ms: outcome.response_time_ms,
        });
    }
}

/// Short form of an action for log lines.
struct ActionKind<'a>(&'a Action);

impl fmt::Debug for ActionKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Action::SelectTab(tab) => write!(f, "SelectTab({})", tab),
            Action::SetInput(_) => f.write_str("SetInput"),
            Action::ChoosePreset(i) => write!(f, "ChoosePreset({})", i),
            Action::AnalysisStarted { run_id } => write!(f, "AnalysisStarted({})", run_id),
            Action::StageStarted(stage) => write!(f, "StageStarted({:?})", stage),
            Action::Progress(update) => write!(f, "Progress({}%)", update.percent),
            Action::AnalysisCompleted { response_time_ms, .. } => {
                write!(f, "AnalysisCompleted({}ms)", response_time_ms)
            }
            Action::AnalysisAbandoned { run_id } => write!(f, "AnalysisAbandoned({})", run_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AnalysisStatus;

    #[test]
    fn test_try_begin_requires_input() {
        let store = Store::new();
        assert_eq!(store.try_begin(Uuid::new_v4()), None);

        store.dispatch(Action::SetInput("   ".to_string()));
        assert_eq!(store.try_begin(Uuid::new_v4()), None);
        assert_eq!(store.snapshot().status, AnalysisStatus::Idle);
    }

    #[test]
    fn test_try_begin_rejects_second_run() {
        let store = Store::new();
        store.dispatch(Action::SetInput("  https://example.com/a ".to_string()));

        let first = Uuid::new_v4();
        let locator = store.try_begin(first).unwrap();
        assert_eq!(locator.as_str(), "https://example.com/a");
        assert_eq!(store.try_begin(Uuid::new_v4()), None);

        let state = store.snapshot();
        assert!(state.is_analyzing());
        assert_eq!(state.run_id, Some(first));
    }

    #[tokio::test]
    async fn test_subscribers_see_dispatched_changes() {
        let store = Store::new();
        let mut rx = store.subscribe();
        store.dispatch(Action::SelectTab(crate::ActiveTab::Operations));

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().active_tab, crate::ActiveTab::Operations);
    }

    #[test]
    fn test_clones_share_state() {
        let store = Store::new();
        let other = store.clone();
        other.dispatch(Action::ChoosePreset(0));
        assert_eq!(store.snapshot().input, bl_core::PRESET_LOCATORS[0]);
    }
}
