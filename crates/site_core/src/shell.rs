//! The site shell: owns router, navigation and highlight state, turns browser
//! events into state transitions plus host effects.

use serde::Serialize;
use shared::{
    domain::{Fragment, ListenerKind, PageId, RouteMatch},
    protocol::{BrowserEvent, HostEffect},
};
use tracing::{debug, info, warn};

use crate::{
    config::SiteSettings,
    highlight::HighlightTicker,
    nav::NavState,
    router::{entry_fragment, fragment_from_href, parse_fragment, Router},
    subscriptions::Subscriptions,
    view::ViewModel,
};

/// Which parts of the frame an update invalidated. `nav` and `page` replace a
/// whole slot; `bar` and `highlight` are in-place patches that a full slot
/// redraw already covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Redraw {
    nav: bool,
    bar: bool,
    page: bool,
    highlight: bool,
}

impl Redraw {
    pub const NONE: Redraw = Redraw {
        nav: false,
        bar: false,
        page: false,
        highlight: false,
    };
    pub const NAV: Redraw = Redraw {
        nav: true,
        ..Redraw::NONE
    };
    /// Only the bar treatment attribute and class changed.
    pub const BAR: Redraw = Redraw {
        bar: true,
        ..Redraw::NONE
    };
    pub const PAGE: Redraw = Redraw {
        page: true,
        ..Redraw::NONE
    };
    /// Only the active feature pill moved.
    pub const HIGHLIGHT: Redraw = Redraw {
        highlight: true,
        ..Redraw::NONE
    };
    pub const ALL: Redraw = Redraw {
        nav: true,
        page: true,
        ..Redraw::NONE
    };

    pub fn merge(self, other: Redraw) -> Redraw {
        Redraw {
            nav: self.nav || other.nav,
            bar: self.bar || other.bar,
            page: self.page || other.page,
            highlight: self.highlight || other.highlight,
        }
    }

    pub fn is_none(self) -> bool {
        self == Redraw::NONE
    }

    pub fn nav(self) -> bool {
        self.nav
    }

    pub fn bar(self) -> bool {
        self.bar && !self.nav
    }

    pub fn page(self) -> bool {
        self.page
    }

    pub fn highlight(self) -> bool {
        self.highlight && !self.page
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Update {
    pub effects: Vec<HostEffect>,
    pub redraw: Redraw,
}

impl Update {
    pub fn is_noop(&self) -> bool {
        self.effects.is_empty() && self.redraw.is_none()
    }

    /// Appends `next`'s effects and widens the redraw to cover both.
    pub fn then(mut self, next: Update) -> Update {
        self.effects.extend(next.effects);
        self.redraw = self.redraw.merge(next.redraw);
        self
    }
}

#[derive(Debug)]
pub struct SiteShell {
    settings: SiteSettings,
    router: Router,
    nav: NavState,
    ticker: HighlightTicker,
    subscriptions: Subscriptions,
    mounted: bool,
}

impl SiteShell {
    pub fn new(settings: SiteSettings, initial_fragment: &str) -> Self {
        let router = Router::new(entry_fragment(initial_fragment, &settings.default_path));
        let ticker = HighlightTicker::new(settings.highlight_interval());
        Self {
            settings,
            router,
            nav: NavState::default(),
            ticker,
            subscriptions: Subscriptions::default(),
            mounted: false,
        }
    }

    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn current_path(&self) -> &str {
        self.router.current_path()
    }

    pub fn active_route(&self) -> RouteMatch {
        self.router.active()
    }

    pub fn nav(&self) -> NavState {
        self.nav
    }

    pub fn highlight_index(&self) -> usize {
        self.ticker.index()
    }

    pub fn subscriptions(&self) -> &Subscriptions {
        &self.subscriptions
    }

    pub fn view(&self) -> ViewModel {
        ViewModel {
            route: self.router.active(),
            nav: self.nav,
            highlight: self.ticker.index(),
            site_title: self.settings.site_title.clone(),
        }
    }

    /// Registers one listener per kind and, on the home page, the highlight
    /// interval. A mounted shell registers nothing further.
    pub fn mount(&mut self) -> Update {
        if self.mounted {
            debug!("shell already mounted");
            return Update::default();
        }
        self.mounted = true;

        let mut effects: Vec<HostEffect> = ListenerKind::ALL
            .into_iter()
            .filter_map(|kind| self.subscriptions.listen(kind))
            .collect();
        if self.router.active_page() == Some(PageId::Home) {
            self.start_highlight(&mut effects);
        }
        self.log_unmatched();
        info!(path = self.router.current_path(), "site shell mounted");

        Update {
            effects,
            redraw: Redraw::ALL,
        }
    }

    /// Releases every listener and timer. Unmounting twice is a no-op.
    pub fn unmount(&mut self) -> Update {
        if !self.mounted {
            return Update::default();
        }
        self.mounted = false;
        self.ticker.stop();
        let effects = self.subscriptions.release_all();
        info!(released = effects.len(), "site shell unmounted");
        Update {
            effects,
            redraw: Redraw::NONE,
        }
    }

    pub fn handle(&mut self, event: BrowserEvent) -> Update {
        if !self.mounted {
            debug!(event = event.name(), "ignoring event on unmounted shell");
            return Update::default();
        }

        match event {
            BrowserEvent::FragmentChanged { fragment } => self.on_fragment(&fragment),
            BrowserEvent::Scrolled { offset_y } => {
                let changed = self
                    .nav
                    .apply_scroll(offset_y, self.settings.scroll_threshold_px);
                Update {
                    effects: Vec::new(),
                    redraw: if changed { Redraw::BAR } else { Redraw::NONE },
                }
            }
            BrowserEvent::MenuToggled => {
                self.nav.toggle_menu();
                debug!(menu_open = self.nav.menu_open, "menu toggled");
                Update {
                    effects: Vec::new(),
                    redraw: Redraw::NAV,
                }
            }
            BrowserEvent::LinkSelected { href } => self.on_link(&href),
            BrowserEvent::IntervalElapsed { timer } => match self.ticker.tick(timer) {
                Some(index) => {
                    debug!(index, "feature highlight advanced");
                    Update {
                        effects: Vec::new(),
                        redraw: Redraw::HIGHLIGHT,
                    }
                }
                None => {
                    warn!(timer = timer.0, "tick from inactive timer ignored");
                    Update::default()
                }
            },
        }
    }

    /// Collapses the menu. A link to the route already shown triggers no
    /// `hashchange`, so the scroll reset is emitted here instead.
    fn on_link(&mut self, href: &str) -> Update {
        let collapsed = self.nav.select_link();
        let mut update = Update {
            effects: Vec::new(),
            redraw: if collapsed { Redraw::NAV } else { Redraw::NONE },
        };
        match fragment_from_href(href) {
            Ok(Fragment::Path(path)) if path == self.router.current_path() => {
                debug!(%path, "link to current route selected");
                update.effects.push(HostEffect::ScrollToTop);
            }
            Ok(target) => debug!(?target, "nav link selected"),
            Err(err) => warn!(%err, "nav link with unreadable target"),
        }
        update
    }

    fn on_fragment(&mut self, raw: &str) -> Update {
        let fragment = parse_fragment(raw);
        if let Fragment::Anchor(anchor) = &fragment {
            return Update {
                effects: vec![HostEffect::ScrollToAnchor {
                    anchor: anchor.clone(),
                }],
                redraw: Redraw::NONE,
            };
        }

        let was_home = self.router.active_page() == Some(PageId::Home);
        if !self.router.navigate(&fragment) {
            return Update::default();
        }
        info!(path = self.router.current_path(), "route changed");
        self.log_unmatched();

        let mut effects = vec![HostEffect::ScrollToTop];
        let is_home = self.router.active_page() == Some(PageId::Home);
        if was_home && !is_home {
            self.stop_highlight(&mut effects);
        } else if !was_home && is_home {
            self.start_highlight(&mut effects);
        }

        Update {
            effects,
            redraw: Redraw::PAGE,
        }
    }

    fn start_highlight(&mut self, effects: &mut Vec<HostEffect>) {
        let period_ms = self.ticker.period().as_millis() as u64;
        let (timer, effect) = self.subscriptions.start_interval(period_ms);
        self.ticker.start(timer);
        effects.push(effect);
    }

    fn stop_highlight(&mut self, effects: &mut Vec<HostEffect>) {
        if let Some(timer) = self.ticker.stop() {
            effects.extend(self.subscriptions.cancel_interval(timer));
        }
    }

    fn log_unmatched(&self) {
        if let RouteMatch::Unmatched(path) = self.router.active() {
            warn!(%path, "no route matches path; rendering no page");
        }
    }
}

#[cfg(test)]
#[path = "tests/shell_tests.rs"]
mod tests;
