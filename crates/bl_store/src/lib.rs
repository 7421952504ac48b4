pub mod action;
pub mod state;
pub mod store;
pub mod view;

pub use action::{reduce, Action};
pub use state::{ActiveTab, AnalysisStatus, DashboardState, SystemMetrics};
pub use store::Store;
pub use view::{present, DashboardView};

pub mod prelude {
    pub use super::{present, Action, ActiveTab, AnalysisStatus, DashboardState, DashboardView, Store};
    pub use bl_core::{ArticleRecord, Error, Result};
}
