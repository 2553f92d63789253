//! Rotating feature highlight shown in the home hero.

use std::time::Duration;

use shared::domain::TimerId;

pub const FEATURE_COUNT: usize = crate::content::FEATURES.len();
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureHighlight {
    index: usize,
    len: usize,
}

impl Default for FeatureHighlight {
    fn default() -> Self {
        Self::new(FEATURE_COUNT)
    }
}

impl FeatureHighlight {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }
}

/// The highlight plus the timer currently driving it. A tick only counts when it
/// comes from the live timer, so a cancelled interval can never touch the index.
#[derive(Debug, Clone)]
pub struct HighlightTicker {
    highlight: FeatureHighlight,
    timer: Option<TimerId>,
    period: Duration,
}

impl HighlightTicker {
    pub fn new(period: Duration) -> Self {
        Self {
            highlight: FeatureHighlight::default(),
            timer: None,
            period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn index(&self) -> usize {
        self.highlight.index()
    }

    pub fn timer(&self) -> Option<TimerId> {
        self.timer
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Starts a fresh cycle at index 0 on `timer`.
    pub fn start(&mut self, timer: TimerId) {
        self.highlight = FeatureHighlight::default();
        self.timer = Some(timer);
    }

    /// Detaches the live timer and hands it back for cancellation.
    pub fn stop(&mut self) -> Option<TimerId> {
        self.timer.take()
    }

    pub fn tick(&mut self, timer: TimerId) -> Option<usize> {
        if self.timer != Some(timer) {
            return None;
        }
        Some(self.highlight.advance())
    }
}

#[cfg(test)]
#[path = "tests/highlight_tests.rs"]
mod tests;
