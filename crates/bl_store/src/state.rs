use bl_core::{AnalysisStage, ArticleRecord, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub const INITIAL_ARTICLES_PROCESSED: u64 = 156;
pub const INITIAL_AVG_RESPONSE_TIME_MS: u32 = 340;
pub const ACCURACY_PCT: u8 = 91;
pub const UPTIME_PCT: f64 = 99.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveTab {
    #[default]
    Analyzer,
    Operations,
}

impl ActiveTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveTab::Analyzer => "analyzer",
            ActiveTab::Operations => "operations",
        }
    }
}

impl fmt::Display for ActiveTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActiveTab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "analyzer" => Ok(ActiveTab::Analyzer),
            "operations" => Ok(ActiveTab::Operations),
            _ => Err(Error::InvalidInput(format!("Unknown tab: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    #[default]
    Idle,
    Analyzing,
    Complete,
}

/// Cosmetic operational metrics. Only the first two ever change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemMetrics {
    pub articles_processed: u64,
    pub avg_response_time_ms: u32,
    pub accuracy_pct: u8,
    pub uptime_pct: f64,
}

impl Default for SystemMetrics {
    fn default() -> Self {
        Self {
            articles_processed: INITIAL_ARTICLES_PROCESSED,
            avg_response_time_ms: INITIAL_AVG_RESPONSE_TIME_MS,
            accuracy_pct: ACCURACY_PCT,
            uptime_pct: UPTIME_PCT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardState {
    pub active_tab: ActiveTab,
    pub status: AnalysisStatus,
    pub input: String,
    /// Cumulative percent of the run in flight
    pub progress: u8,
    /// Stage currently running, shown next to the progress bar
    pub stage: Option<AnalysisStage>,
    pub run_id: Option<Uuid>,
    /// Result of the most recent completed run
    pub live: Option<ArticleRecord>,
    pub metrics: SystemMetrics,
}

impl DashboardState {
    pub fn is_analyzing(&self) -> bool {
        self.status == AnalysisStatus::Analyzing
    }

    /// Whether the analyze action is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_analyzing() && !self.input.trim().is_empty()
    }
}
