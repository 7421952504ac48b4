use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed steps of a simulated analysis run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStage {
    ExtractContent,
    IdeologicalStance,
    FactualGrounding,
    FramingPatterns,
    BiasProfile,
}

impl AnalysisStage {
    pub const ALL: [AnalysisStage; 5] = [
        AnalysisStage::ExtractContent,
        AnalysisStage::IdeologicalStance,
        AnalysisStage::FactualGrounding,
        AnalysisStage::FramingPatterns,
        AnalysisStage::BiasProfile,
    ];

    /// Cumulative completion once this stage is done.
    pub fn percent(&self) -> u8 {
        match self {
            AnalysisStage::ExtractContent => 20,
            AnalysisStage::IdeologicalStance => 40,
            AnalysisStage::FactualGrounding => 60,
            AnalysisStage::FramingPatterns => 80,
            AnalysisStage::BiasProfile => 100,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            AnalysisStage::ExtractContent => "Extracting article content...",
            AnalysisStage::IdeologicalStance => "Analyzing ideological stance...",
            AnalysisStage::FactualGrounding => "Evaluating factual grounding...",
            AnalysisStage::FramingPatterns => "Detecting framing patterns...",
            AnalysisStage::BiasProfile => "Generating bias profile...",
        }
    }

    pub fn is_last(&self) -> bool {
        matches!(self, AnalysisStage::BiasProfile)
    }
}

impl fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub stage: AnalysisStage,
    pub percent: u8,
}

impl From<AnalysisStage> for ProgressUpdate {
    fn from(stage: AnalysisStage) -> Self {
        Self {
            stage,
            percent: stage.percent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_table_is_strictly_ascending() {
        let percents: Vec<u8> = AnalysisStage::ALL.iter().map(|s| s.percent()).collect();
        assert_eq!(percents, vec![20, 40, 60, 80, 100]);
        assert!(AnalysisStage::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_only_profile_stage_is_last() {
        let last: Vec<_> = AnalysisStage::ALL.iter().filter(|s| s.is_last()).collect();
        assert_eq!(last, vec![&AnalysisStage::BiasProfile]);
    }
}
