use shared::{
    domain::{ListenerKind, PageId, RouteMatch, TimerId},
    protocol::{BrowserEvent, HostEffect},
};
use site_core::{
    apply_effects,
    nav::BarTreatment,
    view::{render_nav, render_page},
    HeadlessHost, SiteSettings, SiteShell, Update,
};

struct Harness {
    shell: SiteShell,
    host: HeadlessHost,
}

impl Harness {
    fn load(fragment: &str) -> Self {
        let mut shell = SiteShell::new(SiteSettings::default(), fragment);
        let mut host = HeadlessHost::new();
        let update = shell.mount();
        apply_effects(&mut host, &update.effects).expect("mount effects");
        Self { shell, host }
    }

    fn send(&mut self, event: BrowserEvent) -> Update {
        let update = self.shell.handle(event);
        apply_effects(&mut self.host, &update.effects).expect("event effects");
        update
    }

    fn navigate(&mut self, fragment: &str) -> Update {
        self.send(BrowserEvent::FragmentChanged {
            fragment: fragment.to_string(),
        })
    }

    fn scroll(&mut self, offset_y: f64) -> Update {
        self.host.set_scroll_y(offset_y);
        self.send(BrowserEvent::Scrolled { offset_y })
    }

    fn tick_all(&mut self) {
        let live: Vec<TimerId> = self.host.live_intervals().collect();
        for timer in live {
            self.send(BrowserEvent::IntervalElapsed { timer });
        }
    }

    fn unmount(&mut self) {
        let update = self.shell.unmount();
        apply_effects(&mut self.host, &update.effects).expect("unmount effects");
    }

    fn page_html(&self) -> String {
        render_page(&self.shell.view()).expect("page renders")
    }

    fn nav_html(&self) -> String {
        render_nav(&self.shell.view()).expect("nav renders")
    }

    fn rendered_pages(&self) -> usize {
        self.page_html().matches("data-page=").count()
    }
}

#[test]
fn initial_load_with_empty_fragment_renders_home() {
    let harness = Harness::load("");
    assert_eq!(harness.shell.active_route(), RouteMatch::Page(PageId::Home));
    assert_eq!(harness.rendered_pages(), 1);
    assert!(harness.page_html().contains("data-page=\"home\""));
}

#[test]
fn every_declared_path_renders_exactly_one_page() {
    let mut harness = Harness::load("");
    for (fragment, slug) in [("#/guvi", "platform"), ("#/programs", "programs"), ("#/", "home")] {
        harness.navigate(fragment);
        let html = harness.page_html();
        assert_eq!(html.matches("data-page=").count(), 1, "{fragment}");
        assert!(html.contains(&format!("data-page=\"{slug}\"")), "{fragment}");
    }
}

#[test]
fn undeclared_path_renders_nothing() {
    let mut harness = Harness::load("");
    harness.navigate("#/alumni");
    assert_eq!(harness.rendered_pages(), 0);
    assert!(harness.shell.is_mounted());
}

#[test]
fn guvi_fragment_renders_platform_and_resets_scroll() {
    let mut harness = Harness::load("");
    harness.scroll(900.0);

    let update = harness.navigate("#/guvi");

    assert!(update.effects.contains(&HostEffect::ScrollToTop));
    assert_eq!(harness.host.scroll_y(), 0.0);
    assert_eq!(
        harness.shell.active_route(),
        RouteMatch::Page(PageId::Platform)
    );
}

#[test]
fn crossing_scroll_threshold_switches_and_reverts_bar() {
    let mut harness = Harness::load("#/programs");
    assert_eq!(harness.shell.nav().treatment(), BarTreatment::Transparent);

    harness.scroll(50.0);
    assert_eq!(harness.shell.nav().treatment(), BarTreatment::Transparent);

    harness.scroll(51.0);
    assert_eq!(harness.shell.nav().treatment(), BarTreatment::Solid);
    assert!(harness.nav_html().contains("data-treatment=\"solid\""));

    harness.scroll(12.0);
    assert_eq!(harness.shell.nav().treatment(), BarTreatment::Transparent);
}

#[test]
fn toggling_menu_twice_returns_to_collapsed() {
    let mut harness = Harness::load("");
    harness.send(BrowserEvent::MenuToggled);
    assert!(harness.nav_html().contains("data-menu-panel"));
    harness.send(BrowserEvent::MenuToggled);
    assert!(!harness.shell.nav().menu_open);
    assert!(!harness.nav_html().contains("data-menu-panel"));
}

#[test]
fn highlight_cycles_and_stops_after_removal() {
    let mut harness = Harness::load("");
    let mut seen = vec![harness.shell.highlight_index()];
    for _ in 0..3 {
        harness.tick_all();
        seen.push(harness.shell.highlight_index());
    }
    assert_eq!(seen, vec![0, 1, 2, 0]);

    let stale: Vec<TimerId> = harness.host.live_intervals().collect();
    harness.navigate("#/guvi");
    assert_eq!(harness.host.live_intervals().count(), 0);

    for timer in stale {
        assert!(harness
            .send(BrowserEvent::IntervalElapsed { timer })
            .is_noop());
    }
    assert_eq!(harness.shell.highlight_index(), 0);
}

#[test]
fn remounts_never_duplicate_or_leak_listeners() {
    let mut harness = Harness::load("");
    for _ in 0..3 {
        for kind in ListenerKind::ALL {
            assert_eq!(harness.host.listener_count(kind), 1);
        }
        harness.unmount();
        assert!(harness.host.is_idle());

        let update = harness.shell.mount();
        apply_effects(&mut harness.host, &update.effects).expect("remount");
    }
    harness.unmount();
    assert!(harness.host.is_idle());
}

#[test]
fn contact_anchor_keeps_current_page() {
    let mut harness = Harness::load("#/");
    harness.send(BrowserEvent::MenuToggled);
    harness.send(BrowserEvent::LinkSelected {
        href: "#contact".into(),
    });
    harness.navigate("#contact");

    assert_eq!(harness.host.last_anchor(), Some("contact"));
    assert_eq!(harness.shell.active_route(), RouteMatch::Page(PageId::Home));
    assert!(!harness.shell.nav().menu_open);
}

#[test]
fn highlight_ticks_patch_pills_without_replacing_the_page() {
    let mut harness = Harness::load("");
    for expected in [1, 2, 0] {
        let timer = harness.host.live_intervals().next().expect("live timer");
        let update = harness.send(BrowserEvent::IntervalElapsed { timer });
        assert!(update.redraw.highlight());
        assert!(!update.redraw.page());
        assert!(harness.page_html().contains(&format!("data-feature=\"{expected}\" data-active")));
    }
}
