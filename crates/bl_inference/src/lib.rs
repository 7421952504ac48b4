use bl_core::{Clock, Scheduler, SystemClock};
use bl_store::Store;
use std::sync::Arc;
use std::time::Duration;

pub mod models;
pub mod scheduler;
pub mod session;
pub mod simulator;

pub use scheduler::{InstantScheduler, TokioScheduler};
pub use session::{AnalysisSession, IgnoredReason, SessionRun, Submission};
pub use simulator::AnalysisSimulator;

pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Pause between stages, so progress is visible to a person
    pub step_delay: Duration,
    /// Fixed seed for the score generator; OS entropy when `None`
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            step_delay: DEFAULT_STEP_DELAY,
            seed: None,
        }
    }
}

/// Simulator on the tokio timer and the system clock.
pub fn create_simulator(config: &SimulatorConfig) -> AnalysisSimulator {
    create_simulator_with(config, Arc::new(TokioScheduler), Arc::new(SystemClock))
}

pub fn create_simulator_with(
    config: &SimulatorConfig,
    scheduler: Arc<dyn Scheduler>,
    clock: Arc<dyn Clock>,
) -> AnalysisSimulator {
    AnalysisSimulator::new(models::create_model(config), scheduler, clock, config.step_delay)
}

pub fn create_session(config: &SimulatorConfig, store: Store) -> Arc<AnalysisSession> {
    Arc::new(AnalysisSession::new(store, create_simulator(config)))
}

pub mod prelude {
    pub use super::{create_session, create_simulator, AnalysisSession, SessionRun, SimulatorConfig, Submission};
    pub use bl_core::{AnalysisOutcome, ArticleRecord, Result, Error};
}
