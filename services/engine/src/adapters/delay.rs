//! services/engine/src/adapters/delay.rs
//!
//! This module contains the adapters for the assistant's simulated thinking
//! pause. They implement the `ResponseDelayService` port from the `core`
//! crate.

use async_trait::async_trait;
use lecture_assistant_core::ports::ResponseDelayService;
use rand::Rng;
use std::time::Duration;

//=========================================================================================
// The Timer Delay (Production)
//=========================================================================================

/// An adapter that pauses for a randomized bounded window, base + uniform
/// jitter (0.8 s + up to 1.2 s with the default configuration).
#[derive(Clone)]
pub struct TimerDelayAdapter {
    base: Duration,
    jitter: Duration,
}

impl TimerDelayAdapter {
    /// Creates a new `TimerDelayAdapter`.
    pub fn new(base: Duration, jitter: Duration) -> Self {
        Self { base, jitter }
    }
}

#[async_trait]
impl ResponseDelayService for TimerDelayAdapter {
    async fn thinking_pause(&self) {
        // Sample the jitter before awaiting; the rng handle is not Send.
        let jitter_ms = if self.jitter.is_zero() {
            0
        } else {
            rand::thread_rng().gen_range(0..=self.jitter.as_millis() as u64)
        };
        tokio::time::sleep(self.base + Duration::from_millis(jitter_ms)).await;
    }
}

//=========================================================================================
// The Instant Delay (Tests)
//=========================================================================================

/// An adapter that completes immediately, keeping the classify/generate
/// cycle deterministic in tests.
#[derive(Clone, Default)]
pub struct InstantDelayAdapter;

#[async_trait]
impl ResponseDelayService for InstantDelayAdapter {
    async fn thinking_pause(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn timer_pause_stays_within_the_configured_window() {
        let adapter =
            TimerDelayAdapter::new(Duration::from_millis(800), Duration::from_millis(1200));
        let start = Instant::now();
        adapter.thinking_pause().await;
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(800));
        assert!(elapsed <= Duration::from_millis(2000));
    }

    #[tokio::test]
    async fn instant_pause_resolves_immediately() {
        InstantDelayAdapter.thinking_pause().await;
    }
}
