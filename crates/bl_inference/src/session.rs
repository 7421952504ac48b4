use bl_core::{AnalysisOutcome, Locator};
use bl_store::{Action, Store};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::simulator::AnalysisSimulator;

/// Why a submission did not start a run. Neither case is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoredReason {
    EmptyInput,
    Busy,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionRun {
    Completed { run_id: Uuid, outcome: AnalysisOutcome },
    Ignored(IgnoredReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Submission {
    Accepted { run_id: Uuid },
    Ignored { reason: IgnoredReason },
}

/// Connects the dashboard state to the simulator.
///
/// This is where overlapping runs are refused: a submission only starts when
/// the store agrees to move from not-analyzing to analyzing.
#[derive(Debug)]
pub struct AnalysisSession {
    store: Store,
    simulator: Mutex<AnalysisSimulator>,
}

impl AnalysisSession {
    pub fn new(store: Store, simulator: AnalysisSimulator) -> Self {
        Self {
            store,
            simulator: Mutex::new(simulator),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Analyze whatever is in the input box and wait for the result.
    pub async fn submit(&self) -> SessionRun {
        match self.begin() {
            Ok((guard, locator)) => SessionRun::Completed {
                run_id: guard.run_id,
                outcome: self.execute(guard, locator).await,
            },
            Err(reason) => SessionRun::Ignored(reason),
        }
    }

    /// Put `locator` in the input box, then [`submit`](Self::submit).
    pub async fn analyze(&self, locator: &str) -> SessionRun {
        self.store.dispatch(Action::SetInput(locator.to_string()));
        self.submit().await
    }

    /// Start a run on the runtime and return without waiting for it.
    pub fn spawn_submit(self: &Arc<Self>) -> Submission {
        match self.begin() {
            Ok((guard, locator)) => {
                let run_id = guard.run_id;
                let session = Arc::clone(self);
                tokio::spawn(async move {
                    session.execute(guard, locator).await;
                });
                Submission::Accepted { run_id }
            }
            Err(reason) => Submission::Ignored { reason },
        }
    }

    fn begin(&self) -> Result<(RunGuard, Locator), IgnoredReason> {
        let run_id = Uuid::new_v4();
        match self.store.try_begin(run_id) {
            Some(locator) => Ok((RunGuard::new(self.store.clone(), run_id), locator)),
            None if self.store.snapshot().is_analyzing() => {
                info!("⏳ Analysis already in flight, ignoring submission");
                Err(IgnoredReason::Busy)
            }
            None => Err(IgnoredReason::EmptyInput),
        }
    }

    async fn execute(&self, guard: RunGuard, locator: Locator) -> AnalysisOutcome {
        let span = info_span!("analysis", run_id = %guard.run_id);
        let outcome = async {
            let mut simulator = self.simulator.lock().await;
            simulator.run_locator(&locator, &self.store).await
        }
        .instrument(span)
        .await;
        guard.finish();
        outcome
    }
}

/// Returns the dashboard to a submittable state if a run is dropped mid-flight.
struct RunGuard {
    store: Store,
    run_id: Uuid,
    finished: bool,
}

impl RunGuard {
    fn new(store: Store, run_id: Uuid) -> Self {
        Self {
            store,
            run_id,
            finished: false,
        }
    }

    fn finish(mut self) {
        self.finished = true;
    }
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        if !self.finished {
            warn!("🛑 Analysis {} dropped before completion", self.run_id);
            self.store.dispatch(Action::AnalysisAbandoned { run_id: self.run_id });
        }
    }
}
