//! `BrowserHost` backed by the real window: DOM listeners, `setInterval` and
//! viewport scrolling.

use std::{cell::RefCell, collections::HashMap, rc::Weak, time::Duration};

use shared::{
    domain::{ListenerKind, SubscriptionId, TimerId},
    error::SiteError,
    protocol::BrowserEvent,
};
use site_core::{
    nav::BarTreatment,
    view::{self, ACTIVE_ATTR, FEATURE_ATTR, TREATMENT_ATTR},
    BrowserHost,
};
use wasm_bindgen::{closure::Closure, prelude::wasm_bindgen, JsCast, JsValue};
use web_sys::{Element, Event, Window};

use crate::App;

pub(crate) fn js_error(value: JsValue) -> SiteError {
    SiteError::host(format!("{value:?}"))
}

pub(crate) struct WebHost {
    window: Window,
    app: Weak<RefCell<App>>,
    listeners: HashMap<SubscriptionId, (ListenerKind, Closure<dyn FnMut(Event)>)>,
    intervals: HashMap<TimerId, (i32, Closure<dyn FnMut()>)>,
}

impl WebHost {
    pub(crate) fn new(window: Window, app: Weak<RefCell<App>>) -> Self {
        Self {
            window,
            app,
            listeners: HashMap::new(),
            intervals: HashMap::new(),
        }
    }

    pub(crate) fn window(&self) -> &Window {
        &self.window
    }

    fn slot(&self, slot_id: &str) -> Result<Element, SiteError> {
        self.window
            .document()
            .ok_or_else(|| SiteError::host("window has no document"))?
            .get_element_by_id(slot_id)
            .ok_or_else(|| SiteError::host(format!("missing mount point #{slot_id}")))
    }

    pub(crate) fn set_slot(&self, slot_id: &str, html: &str) -> Result<(), SiteError> {
        self.slot(slot_id)?.set_inner_html(html);
        Ok(())
    }

    /// Swaps the bar treatment on the live `<nav>` so its CSS transition runs.
    pub(crate) fn patch_bar(&self, treatment: BarTreatment) -> Result<(), SiteError> {
        let selector = format!("nav[{TREATMENT_ATTR}]");
        let Some(bar) = self
            .slot(view::NAV_SLOT_ID)?
            .query_selector(&selector)
            .map_err(js_error)?
        else {
            return Err(SiteError::host("nav bar is not rendered"));
        };
        bar.set_attribute(TREATMENT_ATTR, treatment.as_str()).map_err(js_error)?;
        bar.set_attribute("class", &view::bar_class(treatment)).map_err(js_error)?;
        Ok(())
    }

    /// Moves the active marker between the rendered feature pills.
    pub(crate) fn mark_active_feature(&self, active: usize) -> Result<(), SiteError> {
        let pills = self
            .slot(view::PAGE_SLOT_ID)?
            .query_selector_all(&format!("[{FEATURE_ATTR}]"))
            .map_err(js_error)?;
        for idx in 0..pills.length() {
            let Some(pill) = pills
                .item(idx)
                .and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };
            if pill_is_active(pill.get_attribute(FEATURE_ATTR).as_deref(), active) {
                pill.set_attribute(ACTIVE_ATTR, "").map_err(js_error)?;
            } else {
                pill.remove_attribute(ACTIVE_ATTR).map_err(js_error)?;
            }
        }
        Ok(())
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = lucide, js_name = createIcons)]
    fn create_icons() -> Result<(), JsValue>;
}

/// Turns freshly inserted `<i data-lucide>` placeholders into SVG icons.
pub(crate) fn refresh_icons() {
    if let Err(err) = create_icons() {
        tracing::warn!(error = ?err, "lucide icons unavailable");
    }
}

pub(crate) fn pill_is_active(feature_attr: Option<&str>, active: usize) -> bool {
    feature_attr.and_then(|raw| raw.parse::<usize>().ok()) == Some(active)
}

/// Maps a click to a shell event: the menu toggle, a nav link, or nothing.
pub(crate) fn classify_click(on_toggle: bool, nav_link_href: Option<String>) -> Option<BrowserEvent> {
    if on_toggle {
        return Some(BrowserEvent::MenuToggled);
    }
    nav_link_href.map(|href| BrowserEvent::LinkSelected { href })
}

fn translate(kind: ListenerKind, window: &Window, event: &Event) -> Option<BrowserEvent> {
    match kind {
        ListenerKind::HashChange => Some(BrowserEvent::FragmentChanged {
            fragment: window.location().hash().unwrap_or_default(),
        }),
        ListenerKind::Scroll => Some(BrowserEvent::Scrolled {
            offset_y: window.scroll_y().unwrap_or_default(),
        }),
        ListenerKind::Click => {
            let target = event.target()?.dyn_into::<Element>().ok()?;
            let on_toggle = matches!(target.closest("[data-action=\"toggle-menu\"]"), Ok(Some(_)));
            let href = match target.closest("a[data-nav-link]") {
                Ok(Some(link)) => link.get_attribute("href"),
                _ => None,
            };
            classify_click(on_toggle, href)
        }
    }
}

impl BrowserHost for WebHost {
    fn listen(&mut self, id: SubscriptionId, kind: ListenerKind) -> Result<(), SiteError> {
        if self.listeners.contains_key(&id) {
            return Err(SiteError::host(format!("subscription {} already live", id.0)));
        }
        let app = self.app.clone();
        let window = self.window.clone();
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(browser_event) = translate(kind, &window, &event) {
                crate::dispatch(&app, browser_event);
            }
        });
        self.window
            .add_event_listener_with_callback(kind.event_type(), callback.as_ref().unchecked_ref())
            .map_err(js_error)?;
        self.listeners.insert(id, (kind, callback));
        tracing::debug!(id = id.0, kind = kind.event_type(), "dom listener added");
        Ok(())
    }

    fn unlisten(&mut self, id: SubscriptionId) -> Result<(), SiteError> {
        let (kind, callback) = self
            .listeners
            .remove(&id)
            .ok_or_else(|| SiteError::host(format!("subscription {} is not live", id.0)))?;
        self.window
            .remove_event_listener_with_callback(kind.event_type(), callback.as_ref().unchecked_ref())
            .map_err(js_error)?;
        tracing::debug!(id = id.0, kind = kind.event_type(), "dom listener removed");
        Ok(())
    }

    fn start_interval(&mut self, id: TimerId, period: Duration) -> Result<(), SiteError> {
        if self.intervals.contains_key(&id) {
            return Err(SiteError::host(format!("timer {} already running", id.0)));
        }
        let app = self.app.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            crate::dispatch(&app, BrowserEvent::IntervalElapsed { timer: id });
        });
        let millis = i32::try_from(period.as_millis()).unwrap_or(i32::MAX);
        let handle = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis,
            )
            .map_err(js_error)?;
        self.intervals.insert(id, (handle, callback));
        Ok(())
    }

    fn cancel_interval(&mut self, id: TimerId) -> Result<(), SiteError> {
        let (handle, _callback) = self
            .intervals
            .remove(&id)
            .ok_or_else(|| SiteError::host(format!("timer {} is not running", id.0)))?;
        self.window.clear_interval_with_handle(handle);
        Ok(())
    }

    fn scroll_to_top(&mut self) -> Result<(), SiteError> {
        self.window.scroll_to_with_x_and_y(0.0, 0.0);
        Ok(())
    }

    fn scroll_to_anchor(&mut self, anchor: &str) -> Result<(), SiteError> {
        let target = self
            .window
            .document()
            .and_then(|document| document.get_element_by_id(anchor));
        match target {
            Some(element) => element.scroll_into_view(),
            None => tracing::debug!(anchor, "anchor not on the current page"),
        }
        Ok(())
    }
}
