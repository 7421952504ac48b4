use crate::stages::{AnalysisStage, ProgressUpdate};
use crate::types::ArticleRecord;

/// Result of one completed simulated run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub record: ArticleRecord,
    pub response_time_ms: u32,
}

/// Receives the notifications of a simulated run, in order.
pub trait AnalysisObserver: Send + Sync {
    /// A stage is about to run
    fn on_stage_started(&self, _stage: AnalysisStage) {}

    /// A stage finished; `update.percent` is cumulative
    fn on_progress(&self, update: ProgressUpdate);

    /// Called once, after the last progress notification
    fn on_complete(&self, outcome: &AnalysisOutcome);
}

impl<T: AnalysisObserver + ?Sized> AnalysisObserver for &T {
    fn on_stage_started(&self, stage: AnalysisStage) {
        (**self).on_stage_started(stage)
    }

    fn on_progress(&self, update: ProgressUpdate) {
        (**self).on_progress(update)
    }

    fn on_complete(&self, outcome: &AnalysisOutcome) {
        (**self).on_complete(outcome)
    }
}
