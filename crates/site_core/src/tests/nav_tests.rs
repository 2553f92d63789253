use super::*;

#[test]
fn defaults_are_collapsed_and_transparent() {
    let state = NavState::default();
    assert!(!state.menu_open);
    assert!(!state.scrolled);
    assert_eq!(state.treatment(), BarTreatment::Transparent);
}

#[test]
fn threshold_is_strictly_greater_than() {
    let mut state = NavState::default();
    assert!(!state.apply_scroll(SCROLL_THRESHOLD_PX, SCROLL_THRESHOLD_PX));
    assert!(!state.scrolled);
    assert!(state.apply_scroll(SCROLL_THRESHOLD_PX + 0.5, SCROLL_THRESHOLD_PX));
    assert_eq!(state.treatment(), BarTreatment::Solid);
}

#[test]
fn crossing_back_reverses_treatment() {
    let mut state = NavState::default();
    state.apply_scroll(400.0, SCROLL_THRESHOLD_PX);
    assert!(!state.apply_scroll(120.0, SCROLL_THRESHOLD_PX));
    assert!(state.apply_scroll(10.0, SCROLL_THRESHOLD_PX));
    assert_eq!(state.treatment(), BarTreatment::Transparent);
}

#[test]
fn toggling_twice_collapses_menu() {
    let mut state = NavState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.toggle_menu();
    assert!(!state.menu_open);
}

#[test]
fn selecting_a_link_collapses_open_menu() {
    let mut state = NavState::default();
    assert!(!state.select_link());
    state.toggle_menu();
    assert!(state.select_link());
    assert!(!state.menu_open);
}

#[test]
fn link_table_has_three_routes_and_one_call_to_action() {
    let routes: Vec<_> = NAV_LINKS.iter().filter(|l| l.href.starts_with("#/")).collect();
    assert_eq!(routes.len(), 3);
    let ctas: Vec<_> = NAV_LINKS.iter().filter(|l| l.call_to_action).collect();
    assert_eq!(ctas.len(), 1);
    assert_eq!(ctas[0].href, "#contact");
}

#[test]
fn treatment_names_match_rendered_attribute() {
    assert_eq!(BarTreatment::Solid.as_str(), "solid");
    assert_eq!(BarTreatment::Transparent.as_str(), "transparent");
}
