//! Replays a scripted sequence of browser events against a headless host.

use anyhow::{Context, Result};
use serde::Serialize;
use shared::{
    domain::RouteMatch,
    error::SiteError,
    protocol::{BrowserEvent, HostEffect},
};
use site_core::{apply_effects, nav::NavState, HeadlessHost, Redraw, SiteSettings, SiteShell};

#[derive(Debug, Serialize)]
pub struct ReplayStep {
    pub event: &'static str,
    pub effects: Vec<HostEffect>,
    pub redraw: Redraw,
}

#[derive(Debug, Serialize)]
pub struct ReplaySummary {
    pub path: String,
    pub route: RouteMatch,
    pub nav: NavState,
    pub highlight: usize,
    pub host_idle_after_unmount: bool,
}

#[derive(Debug)]
pub struct ReplayReport {
    pub steps: Vec<ReplayStep>,
    pub summary: ReplaySummary,
}

/// A script is a JSON array of tagged browser events.
pub fn parse_script(raw: &str) -> Result<Vec<BrowserEvent>, SiteError> {
    Ok(serde_json::from_str(raw)?)
}

pub fn run(
    settings: SiteSettings,
    initial_fragment: &str,
    events: Vec<BrowserEvent>,
) -> Result<ReplayReport> {
    let mut shell = SiteShell::new(settings, initial_fragment);
    let mut host = HeadlessHost::new();

    let mount = shell.mount();
    apply_effects(&mut host, &mount.effects).context("mount effects failed")?;

    let mut steps = Vec::with_capacity(events.len());
    for event in events {
        let name = event.name();
        if let BrowserEvent::Scrolled { offset_y } = &event {
            host.set_scroll_y(*offset_y);
        }
        let update = shell.handle(event);
        apply_effects(&mut host, &update.effects)
            .with_context(|| format!("effects for '{name}' failed"))?;
        steps.push(ReplayStep {
            event: name,
            effects: update.effects,
            redraw: update.redraw,
        });
    }

    let path = shell.current_path().to_string();
    let route = shell.active_route();
    let nav = shell.nav();
    let highlight = shell.highlight_index();

    let unmount = shell.unmount();
    apply_effects(&mut host, &unmount.effects).context("unmount effects failed")?;

    Ok(ReplayReport {
        steps,
        summary: ReplaySummary {
            path,
            route,
            nav,
            highlight,
            host_idle_after_unmount: host.is_idle(),
        },
    })
}
