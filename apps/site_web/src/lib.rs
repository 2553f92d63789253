//! Browser adapter for the site shell. Subscribes to real DOM events, feeds
//! them to [`SiteShell`], applies the resulting host effects and patches the
//! nav and page mount points.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use shared::{error::SiteError, protocol::BrowserEvent};
use site_core::{
    apply_effects,
    view::{self, styles::GLOBAL_STYLES, NAV_SLOT_ID, PAGE_SLOT_ID},
    Redraw, SiteSettings, SiteShell, Update,
};
use wasm_bindgen::prelude::*;

mod console;
mod host;

use host::{js_error, WebHost};

thread_local! {
    static APP: RefCell<Option<Rc<RefCell<App>>>> = const { RefCell::new(None) };
}

pub(crate) struct App {
    shell: SiteShell,
    host: WebHost,
}

impl App {
    fn apply(&mut self, update: Update) {
        if let Err(err) = apply_effects(&mut self.host, &update.effects) {
            tracing::error!(%err, "failed to apply host effects");
        }
        if let Err(err) = self.redraw(update.redraw) {
            tracing::error!(%err, "failed to redraw");
        }
    }

    fn redraw(&self, redraw: Redraw) -> Result<(), SiteError> {
        let view = self.shell.view();
        if redraw.nav() {
            self.host.set_slot(NAV_SLOT_ID, &view::render_nav(&view)?)?;
        }
        if redraw.bar() {
            self.host.patch_bar(view.nav.treatment())?;
        }
        if redraw.page() {
            self.host.set_slot(PAGE_SLOT_ID, &view::render_page(&view)?)?;
        }
        if redraw.highlight() {
            self.host.mark_active_feature(view.highlight)?;
        }
        if redraw.nav() || redraw.page() {
            host::refresh_icons();
        }
        Ok(())
    }
}

/// Runs one browser event through the shell. Events arriving while another is
/// being processed are dropped.
pub(crate) fn dispatch(app: &Weak<RefCell<App>>, event: BrowserEvent) {
    let Some(app) = app.upgrade() else {
        return;
    };
    let Ok(mut app) = app.try_borrow_mut() else {
        tracing::warn!(event = event.name(), "re-entrant browser event dropped");
        return;
    };
    let update = app.shell.handle(event);
    app.apply(update);
}

fn install_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(console::ConsoleMakeWriter)
        .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
        .without_time()
        .with_ansi(false)
        .try_init();
}

fn inject_global_styles(window: &web_sys::Window) -> Result<(), SiteError> {
    let document = window
        .document()
        .ok_or_else(|| SiteError::host("window has no document"))?;
    let style = document.create_element("style").map_err(js_error)?;
    style.set_text_content(Some(GLOBAL_STYLES));
    document
        .head()
        .ok_or_else(|| SiteError::host("document has no <head>"))?
        .append_child(&style)
        .map_err(js_error)?;
    Ok(())
}

fn mount() -> Result<(), SiteError> {
    let window = web_sys::window().ok_or_else(|| SiteError::host("no global window"))?;
    inject_global_styles(&window)?;

    let fragment = window.location().hash().map_err(js_error)?;
    let shell = SiteShell::new(SiteSettings::default(), &fragment);
    let app = Rc::new_cyclic(|weak: &Weak<RefCell<App>>| {
        RefCell::new(App {
            shell,
            host: WebHost::new(window.clone(), weak.clone()),
        })
    });

    {
        let mut state = app.borrow_mut();
        let offset_y = state.host.window().scroll_y().unwrap_or_default();
        let mount = state.shell.mount();
        let update = mount.then(state.shell.handle(BrowserEvent::Scrolled { offset_y }));
        state.apply(update);
    }

    APP.with(|slot| *slot.borrow_mut() = Some(app));
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    install_tracing();
    mount().map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Unmounts the shell, removing every listener and interval it registered.
#[wasm_bindgen]
pub fn teardown() {
    let Some(app) = APP.with(|slot| slot.borrow_mut().take()) else {
        return;
    };
    let mut state = app.borrow_mut();
    let update = state.shell.unmount();
    state.apply(update);
}
