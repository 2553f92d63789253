use serde::{Deserialize, Serialize};

use crate::domain::{ListenerKind, SubscriptionId, TimerId};

/// Discrete inputs fed to the site shell by a browser adapter or a replay script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum BrowserEvent {
    FragmentChanged { fragment: String },
    Scrolled { offset_y: f64 },
    MenuToggled,
    LinkSelected { href: String },
    IntervalElapsed { timer: TimerId },
}

impl BrowserEvent {
    pub fn name(&self) -> &'static str {
        match self {
            BrowserEvent::FragmentChanged { .. } => "fragment_changed",
            BrowserEvent::Scrolled { .. } => "scrolled",
            BrowserEvent::MenuToggled => "menu_toggled",
            BrowserEvent::LinkSelected { .. } => "link_selected",
            BrowserEvent::IntervalElapsed { .. } => "interval_elapsed",
        }
    }
}

/// Side effects the shell asks its host to perform, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum HostEffect {
    Listen {
        id: SubscriptionId,
        kind: ListenerKind,
    },
    Unlisten {
        id: SubscriptionId,
    },
    StartInterval {
        id: TimerId,
        period_ms: u64,
    },
    CancelInterval {
        id: TimerId,
    },
    ScrollToTop,
    ScrollToAnchor {
        anchor: String,
    },
}

impl HostEffect {
    pub fn name(&self) -> &'static str {
        match self {
            HostEffect::Listen { .. } => "listen",
            HostEffect::Unlisten { .. } => "unlisten",
            HostEffect::StartInterval { .. } => "start_interval",
            HostEffect::CancelInterval { .. } => "cancel_interval",
            HostEffect::ScrollToTop => "scroll_to_top",
            HostEffect::ScrollToAnchor { .. } => "scroll_to_anchor",
        }
    }
}
