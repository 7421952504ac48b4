use async_trait::async_trait;
use bl_core::Scheduler;
use std::sync::Mutex;
use std::time::Duration;

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

#[async_trait]
impl Scheduler for TokioScheduler {
    async fn pause(&self, delay: Duration) {
        if delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Records each requested delay and only yields. Used to drive runs without waiting.
#[derive(Debug, Default)]
pub struct InstantScheduler {
    pauses: Mutex<Vec<Duration>>,
}

impl InstantScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl Scheduler for InstantScheduler {
    async fn pause(&self, delay: Duration) {
        self.pauses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(delay);
        tokio::task::yield_now().await;
    }
}
