//! Bookkeeping for listeners and intervals a mounted shell holds on its host.

use std::collections::BTreeMap;

use shared::{
    domain::{ListenerKind, SubscriptionId, TimerId},
    protocol::HostEffect,
};

#[derive(Debug, Default)]
pub struct Subscriptions {
    next_id: u64,
    listeners: BTreeMap<ListenerKind, SubscriptionId>,
    timers: Vec<TimerId>,
}

impl Subscriptions {
    fn allocate(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Registers `kind` unless a listener of that kind is already live.
    pub fn listen(&mut self, kind: ListenerKind) -> Option<HostEffect> {
        if self.listeners.contains_key(&kind) {
            tracing::debug!(kind = kind.event_type(), "listener already registered");
            return None;
        }
        let id = SubscriptionId(self.allocate());
        self.listeners.insert(kind, id);
        Some(HostEffect::Listen { id, kind })
    }

    pub fn start_interval(&mut self, period_ms: u64) -> (TimerId, HostEffect) {
        let id = TimerId(self.allocate());
        self.timers.push(id);
        (id, HostEffect::StartInterval { id, period_ms })
    }

    pub fn cancel_interval(&mut self, id: TimerId) -> Option<HostEffect> {
        let before = self.timers.len();
        self.timers.retain(|timer| *timer != id);
        (self.timers.len() != before).then_some(HostEffect::CancelInterval { id })
    }

    /// Effects that tear down everything still live, timers first.
    pub fn release_all(&mut self) -> Vec<HostEffect> {
        let mut effects: Vec<HostEffect> = self
            .timers
            .drain(..)
            .map(|id| HostEffect::CancelInterval { id })
            .collect();
        effects.extend(
            std::mem::take(&mut self.listeners)
                .into_values()
                .map(|id| HostEffect::Unlisten { id }),
        );
        effects
    }

    pub fn listener(&self, kind: ListenerKind) -> Option<SubscriptionId> {
        self.listeners.get(&kind).copied()
    }

    pub fn live_listeners(&self) -> usize {
        self.listeners.len()
    }

    pub fn live_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty() && self.timers.is_empty()
    }
}
