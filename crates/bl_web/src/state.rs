use bl_inference::AnalysisSession;
use bl_store::Store;
use std::sync::Arc;

pub struct AppState {
    pub session: Arc<AnalysisSession>,
}

impl AppState {
    pub fn new(session: Arc<AnalysisSession>) -> Self {
        Self { session }
    }

    pub fn store(&self) -> &Store {
        self.session.store()
    }
}
