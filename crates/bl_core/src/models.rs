use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::fmt;
use std::time::Duration;

use crate::types::{HighlightedPhrases, Scores};

/// What a bias model produces for one locator, before the record is assembled.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreProfile {
    pub title: String,
    pub scores: Scores,
    pub highlighted_phrases: HighlightedPhrases,
    pub confidence: f64,
}

pub trait BiasModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Score the article behind a locator
    fn score(&mut self, locator: &str) -> ScoreProfile;

    /// Response time to report for the run that just finished
    fn response_time_ms(&mut self) -> u32;
}

/// Suspension point between analysis stages.
#[async_trait]
pub trait Scheduler: Send + Sync {
    async fn pause(&self, delay: Duration);
}

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
