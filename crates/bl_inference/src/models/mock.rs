use bl_core::{BiasModel, Dimension, HighlightedPhrases, ScoreProfile, Scores};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::ops::Range;

pub const IDEOLOGICAL_STANCE_RANGE: Range<u8> = 30..70;
pub const FACTUAL_GROUNDING_RANGE: Range<u8> = 60..90;
pub const FRAMING_CHOICES_RANGE: Range<u8> = 40..90;
pub const EMOTIONAL_TONE_RANGE: Range<u8> = 20..80;
pub const SOURCE_TRANSPARENCY_RANGE: Range<u8> = 50..90;
pub const CONFIDENCE_RANGE: Range<f64> = 0.85..1.0;
pub const RESPONSE_TIME_RANGE: Range<u32> = 320..420;

pub const LIVE_TITLE: &str = "Instagram's location feature sparks privacy debate";

/// Phrases attached to every live result. They do not depend on the locator.
pub fn live_phrases() -> HighlightedPhrases {
    [
        (Dimension::EmotionalTone, ["sparks debate", "privacy concerns"]),
        (Dimension::FramingChoices, ["controversial feature", "user backlash"]),
        (Dimension::IdeologicalStance, ["tech regulation", "user rights"]),
    ]
    .into_iter()
    .map(|(dimension, phrases)| (dimension, phrases.iter().map(|p| p.to_string()).collect()))
    .collect()
}

/// Scores drawn uniformly from fixed half-open ranges.
pub struct MockBiasModel<R = StdRng> {
    rng: R,
}

impl<R> fmt::Debug for MockBiasModel<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockBiasModel").finish()
    }
}

impl MockBiasModel<StdRng> {
    /// Seeded when `seed` is given, from OS entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_rng(StdRng::seed_from_u64(seed)),
            None => Self::with_rng(StdRng::from_entropy()),
        }
    }
}

impl<R: Rng> MockBiasModel<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    fn draw_scores(&mut self) -> Scores {
        Scores {
            ideological_stance: self.rng.gen_range(IDEOLOGICAL_STANCE_RANGE),
            factual_grounding: self.rng.gen_range(FACTUAL_GROUNDING_RANGE),
            framing_choices: self.rng.gen_range(FRAMING_CHOICES_RANGE),
            emotional_tone: self.rng.gen_range(EMOTIONAL_TONE_RANGE),
            source_transparency: self.rng.gen_range(SOURCE_TRANSPARENCY_RANGE),
        }
    }
}

impl<R: Rng + Send + Sync> BiasModel for MockBiasModel<R> {
    fn name(&self) -> &str {
        "mock"
    }

    fn score(&mut self, _locator: &str) -> ScoreProfile {
        let scores = self.draw_scores();
        ScoreProfile {
            title: LIVE_TITLE.to_string(),
            scores,
            highlighted_phrases: live_phrases(),
            confidence: self.rng.gen_range(CONFIDENCE_RANGE),
        }
    }

    fn response_time_ms(&mut self) -> u32 {
        self.rng.gen_range(RESPONSE_TIME_RANGE)
    }
}
