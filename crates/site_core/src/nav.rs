//! Navigation bar state: scroll-reactive treatment and the collapsible mobile menu.

use serde::Serialize;
use shared::domain::NavLink;

/// Vertical offset, in CSS pixels, past which the bar turns opaque.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Home",
        href: "#/",
        call_to_action: false,
    },
    NavLink {
        label: "GUVI Platform",
        href: "#/guvi",
        call_to_action: false,
    },
    NavLink {
        label: "Programs",
        href: "#/programs",
        call_to_action: false,
    },
    NavLink {
        label: "Get Started",
        href: "#contact",
        call_to_action: true,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BarTreatment {
    Transparent,
    Solid,
}

impl BarTreatment {
    pub fn as_str(self) -> &'static str {
        match self {
            BarTreatment::Transparent => "transparent",
            BarTreatment::Solid => "solid",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
}

impl NavState {
    pub fn treatment(&self) -> BarTreatment {
        if self.scrolled {
            BarTreatment::Solid
        } else {
            BarTreatment::Transparent
        }
    }

    /// Returns `true` when the bar treatment flipped.
    pub fn apply_scroll(&mut self, offset_y: f64, threshold: f64) -> bool {
        let scrolled = offset_y > threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Any link selection collapses the mobile panel. Returns `true` if it was open.
    pub fn select_link(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }
}

#[cfg(test)]
#[path = "tests/nav_tests.rs"]
mod tests;
