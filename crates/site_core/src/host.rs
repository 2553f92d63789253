//! The seam between the shell and whatever actually owns listeners, timers and
//! the viewport.

use std::{collections::BTreeMap, time::Duration};

use shared::{
    domain::{ListenerKind, SubscriptionId, TimerId},
    error::SiteError,
    protocol::HostEffect,
};

pub trait BrowserHost {
    fn listen(&mut self, id: SubscriptionId, kind: ListenerKind) -> Result<(), SiteError>;
    fn unlisten(&mut self, id: SubscriptionId) -> Result<(), SiteError>;
    fn start_interval(&mut self, id: TimerId, period: Duration) -> Result<(), SiteError>;
    fn cancel_interval(&mut self, id: TimerId) -> Result<(), SiteError>;
    fn scroll_to_top(&mut self) -> Result<(), SiteError>;
    fn scroll_to_anchor(&mut self, anchor: &str) -> Result<(), SiteError>;
}

/// Applies `effects` in order, stopping at the first failure.
pub fn apply_effects<H: BrowserHost + ?Sized>(
    host: &mut H,
    effects: &[HostEffect],
) -> Result<(), SiteError> {
    for effect in effects {
        tracing::debug!(effect = effect.name(), "applying host effect");
        match effect {
            HostEffect::Listen { id, kind } => host.listen(*id, *kind)?,
            HostEffect::Unlisten { id } => host.unlisten(*id)?,
            HostEffect::StartInterval { id, period_ms } => {
                host.start_interval(*id, Duration::from_millis(*period_ms))?
            }
            HostEffect::CancelInterval { id } => host.cancel_interval(*id)?,
            HostEffect::ScrollToTop => host.scroll_to_top()?,
            HostEffect::ScrollToAnchor { anchor } => host.scroll_to_anchor(anchor)?,
        }
    }
    Ok(())
}

/// In-memory host: tracks what is live and records every call.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    listeners: BTreeMap<SubscriptionId, ListenerKind>,
    intervals: BTreeMap<TimerId, Duration>,
    scroll_y: f64,
    last_anchor: Option<String>,
    log: Vec<HostEffect>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listener_count(&self, kind: ListenerKind) -> usize {
        self.listeners.values().filter(|k| **k == kind).count()
    }

    pub fn live_listeners(&self) -> usize {
        self.listeners.len()
    }

    pub fn live_intervals(&self) -> impl Iterator<Item = TimerId> + '_ {
        self.intervals.keys().copied()
    }

    pub fn is_idle(&self) -> bool {
        self.listeners.is_empty() && self.intervals.is_empty()
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Simulates the user scrolling; the shell still has to be told.
    pub fn set_scroll_y(&mut self, offset_y: f64) {
        self.scroll_y = offset_y;
    }

    pub fn last_anchor(&self) -> Option<&str> {
        self.last_anchor.as_deref()
    }

    pub fn log(&self) -> &[HostEffect] {
        &self.log
    }
}

impl BrowserHost for HeadlessHost {
    fn listen(&mut self, id: SubscriptionId, kind: ListenerKind) -> Result<(), SiteError> {
        if self.listeners.insert(id, kind).is_some() {
            return Err(SiteError::host(format!("subscription {} already live", id.0)));
        }
        self.log.push(HostEffect::Listen { id, kind });
        Ok(())
    }

    fn unlisten(&mut self, id: SubscriptionId) -> Result<(), SiteError> {
        if self.listeners.remove(&id).is_none() {
            return Err(SiteError::host(format!("subscription {} is not live", id.0)));
        }
        self.log.push(HostEffect::Unlisten { id });
        Ok(())
    }

    fn start_interval(&mut self, id: TimerId, period: Duration) -> Result<(), SiteError> {
        if self.intervals.insert(id, period).is_some() {
            return Err(SiteError::host(format!("timer {} already running", id.0)));
        }
        self.log.push(HostEffect::StartInterval {
            id,
            period_ms: period.as_millis() as u64,
        });
        Ok(())
    }

    fn cancel_interval(&mut self, id: TimerId) -> Result<(), SiteError> {
        if self.intervals.remove(&id).is_none() {
            return Err(SiteError::host(format!("timer {} is not running", id.0)));
        }
        self.log.push(HostEffect::CancelInterval { id });
        Ok(())
    }

    fn scroll_to_top(&mut self) -> Result<(), SiteError> {
        self.scroll_y = 0.0;
        self.log.push(HostEffect::ScrollToTop);
        Ok(())
    }

    fn scroll_to_anchor(&mut self, anchor: &str) -> Result<(), SiteError> {
        self.last_anchor = Some(anchor.to_string());
        self.log.push(HostEffect::ScrollToAnchor {
            anchor: anchor.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/host_tests.rs"]
mod tests;
