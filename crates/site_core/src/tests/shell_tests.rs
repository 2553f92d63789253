use super::*;

use shared::domain::TimerId;

fn mounted(fragment: &str) -> (SiteShell, Update) {
    let mut shell = SiteShell::new(SiteSettings::default(), fragment);
    let update = shell.mount();
    (shell, update)
}

fn highlight_timer(update: &Update) -> Option<TimerId> {
    update.effects.iter().find_map(|effect| match effect {
        HostEffect::StartInterval { id, .. } => Some(*id),
        _ => None,
    })
}

#[test]
fn mount_registers_one_listener_per_kind() {
    let (shell, update) = mounted("#/guvi");
    let kinds: Vec<ListenerKind> = update
        .effects
        .iter()
        .filter_map(|effect| match effect {
            HostEffect::Listen { kind, .. } => Some(*kind),
            _ => None,
        })
        .collect();
    assert_eq!(kinds, ListenerKind::ALL.to_vec());
    assert_eq!(highlight_timer(&update), None);
    assert_eq!(update.redraw, Redraw::ALL);
    assert_eq!(shell.subscriptions().live_listeners(), 3);
}

#[test]
fn mounting_home_starts_highlight_interval() {
    let (_shell, update) = mounted("");
    assert!(update.effects.contains(&HostEffect::StartInterval {
        id: highlight_timer(&update).expect("timer"),
        period_ms: 3000,
    }));
}

#[test]
fn second_mount_registers_nothing() {
    let (mut shell, _) = mounted("#/");
    assert!(shell.mount().is_noop());
    assert_eq!(shell.subscriptions().live_listeners(), 3);
    assert_eq!(shell.subscriptions().live_timers(), 1);
}

#[test]
fn unmount_releases_everything_once() {
    let (mut shell, _) = mounted("#/");
    let update = shell.unmount();
    assert_eq!(update.effects.len(), 4);
    assert!(matches!(update.effects[0], HostEffect::CancelInterval { .. }));
    assert!(shell.subscriptions().is_empty());
    assert!(shell.unmount().is_noop());
}

#[test]
fn events_before_mount_are_ignored() {
    let mut shell = SiteShell::new(SiteSettings::default(), "#/");
    let update = shell.handle(BrowserEvent::MenuToggled);
    assert!(update.is_noop());
    assert!(!shell.nav().menu_open);
}

#[test]
fn route_change_scrolls_to_top_and_redraws_page() {
    let (mut shell, _) = mounted("#/programs");
    let update = shell.handle(BrowserEvent::FragmentChanged {
        fragment: "#/guvi".into(),
    });
    assert_eq!(update.effects, vec![HostEffect::ScrollToTop]);
    assert_eq!(update.redraw, Redraw::PAGE);
    assert_eq!(shell.active_route(), RouteMatch::Page(PageId::Platform));
}

#[test]
fn leaving_home_cancels_the_highlight_timer() {
    let (mut shell, mount) = mounted("#/");
    let timer = highlight_timer(&mount).expect("timer");

    let update = shell.handle(BrowserEvent::FragmentChanged {
        fragment: "#/programs".into(),
    });
    assert_eq!(
        update.effects,
        vec![HostEffect::ScrollToTop, HostEffect::CancelInterval { id: timer }]
    );
    assert!(shell
        .handle(BrowserEvent::IntervalElapsed { timer })
        .is_noop());
}

#[test]
fn returning_home_restarts_highlight_from_zero() {
    let (mut shell, mount) = mounted("#/");
    let first = highlight_timer(&mount).expect("timer");
    shell.handle(BrowserEvent::IntervalElapsed { timer: first });
    assert_eq!(shell.highlight_index(), 1);

    shell.handle(BrowserEvent::FragmentChanged {
        fragment: "#/guvi".into(),
    });
    let back = shell.handle(BrowserEvent::FragmentChanged {
        fragment: "#/".into(),
    });
    let second = highlight_timer(&back).expect("new timer");
    assert_ne!(first, second);
    assert_eq!(shell.highlight_index(), 0);
}

#[test]
fn anchors_scroll_without_changing_route() {
    let (mut shell, _) = mounted("#/");
    let update = shell.handle(BrowserEvent::FragmentChanged {
        fragment: "#contact".into(),
    });
    assert_eq!(
        update.effects,
        vec![HostEffect::ScrollToAnchor {
            anchor: "contact".into()
        }]
    );
    assert_eq!(update.redraw, Redraw::NONE);
    assert_eq!(shell.current_path(), "/");
}

#[test]
fn scroll_patches_bar_only_on_threshold_crossing() {
    let (mut shell, _) = mounted("#/");
    let cross = shell.handle(BrowserEvent::Scrolled { offset_y: 80.0 });
    assert_eq!(cross.redraw, Redraw::BAR);
    assert!(cross.redraw.bar() && !cross.redraw.nav());
    let further = shell.handle(BrowserEvent::Scrolled { offset_y: 500.0 });
    assert!(further.is_noop());
    let back = shell.handle(BrowserEvent::Scrolled { offset_y: 0.0 });
    assert_eq!(back.redraw, Redraw::BAR);
    assert!(!shell.nav().scrolled);
}

#[test]
fn link_selection_collapses_menu() {
    let (mut shell, _) = mounted("#/");
    shell.handle(BrowserEvent::MenuToggled);
    assert!(shell.nav().menu_open);

    let update = shell.handle(BrowserEvent::LinkSelected {
        href: "#/programs".into(),
    });
    assert_eq!(update.redraw, Redraw::NAV);
    assert!(update.effects.is_empty());
    assert!(!shell.nav().menu_open);

    let closed = shell.handle(BrowserEvent::LinkSelected {
        href: "#contact".into(),
    });
    assert!(closed.is_noop());
}

#[test]
fn unmatched_route_keeps_shell_alive() {
    let (mut shell, _) = mounted("#/guvi");
    let update = shell.handle(BrowserEvent::FragmentChanged {
        fragment: "#/nowhere".into(),
    });
    assert_eq!(update.redraw, Redraw::PAGE);
    assert_eq!(shell.active_route(), RouteMatch::Unmatched("/nowhere".into()));
    assert_eq!(shell.view().route.page(), None);
}

#[test]
fn redraw_merge_combines_parts() {
    assert_eq!(Redraw::NONE.merge(Redraw::NAV), Redraw::NAV);
    assert_eq!(Redraw::PAGE.merge(Redraw::PAGE), Redraw::PAGE);
    assert_eq!(Redraw::NAV.merge(Redraw::PAGE), Redraw::ALL);
    assert!(Redraw::ALL.nav() && Redraw::ALL.page());

    let patches = Redraw::BAR.merge(Redraw::HIGHLIGHT);
    assert!(patches.bar() && patches.highlight());
    assert!(!patches.nav() && !patches.page());
}

#[test]
fn slot_redraw_covers_in_place_patches() {
    let full = Redraw::ALL.merge(Redraw::BAR).merge(Redraw::HIGHLIGHT);
    assert!(full.nav() && full.page());
    assert!(!full.bar());
    assert!(!full.highlight());
}

#[test]
fn highlight_tick_patches_pills_not_page() {
    let (mut shell, mount) = mounted("#/");
    let timer = highlight_timer(&mount).expect("timer");
    let update = shell.handle(BrowserEvent::IntervalElapsed { timer });
    assert_eq!(update.redraw, Redraw::HIGHLIGHT);
    assert!(!update.redraw.page());
    assert!(update.effects.is_empty());
}

#[test]
fn link_to_current_route_scrolls_to_top() {
    let (mut shell, _) = mounted("#/guvi");
    shell.handle(BrowserEvent::MenuToggled);

    let update = shell.handle(BrowserEvent::LinkSelected {
        href: "#/guvi".into(),
    });
    assert_eq!(update.effects, vec![HostEffect::ScrollToTop]);
    assert_eq!(update.redraw, Redraw::NAV);

    let absolute = shell.handle(BrowserEvent::LinkSelected {
        href: "https://kongu.example/#/guvi".into(),
    });
    assert_eq!(absolute.effects, vec![HostEffect::ScrollToTop]);
    assert_eq!(absolute.redraw, Redraw::NONE);
}

#[test]
fn link_elsewhere_leaves_scrolling_to_the_fragment_change() {
    let (mut shell, _) = mounted("#/guvi");
    let update = shell.handle(BrowserEvent::LinkSelected {
        href: "#/programs".into(),
    });
    assert!(update.is_noop());

    let unreadable = shell.handle(BrowserEvent::LinkSelected {
        href: "not a url".into(),
    });
    assert!(unreadable.is_noop());
}

#[test]
fn update_then_concatenates_effects() {
    let first = Update {
        effects: vec![HostEffect::ScrollToTop],
        redraw: Redraw::ALL,
    };
    let second = Update {
        effects: vec![HostEffect::ScrollToAnchor {
            anchor: "about".into(),
        }],
        redraw: Redraw::BAR,
    };
    let combined = first.then(second);
    assert_eq!(combined.effects.len(), 2);
    assert!(combined.redraw.nav() && !combined.redraw.bar());
}

#[test]
fn default_path_setting_applies_to_empty_fragment() {
    let settings = SiteSettings {
        default_path: "/programs".into(),
        ..SiteSettings::default()
    };
    let shell = SiteShell::new(settings, "");
    assert_eq!(shell.active_route(), RouteMatch::Page(PageId::Programs));
}

#[test]
fn shell_and_rendered_frame_agree_on_default_path() {
    let settings = SiteSettings {
        default_path: "/guvi".into(),
        ..SiteSettings::default()
    };
    let shell = SiteShell::new(settings.clone(), "");
    let rendered = ViewModel::from_inputs("", 0.0, false, 0, &settings);
    assert_eq!(rendered.route, RouteMatch::Page(PageId::Platform));
    assert_eq!(shell.view().route, rendered.route);
}
