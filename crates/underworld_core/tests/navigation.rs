mod common;

use common::Harness;
use pretty_assertions::assert_eq;
use underworld_core::{Key, KeyPress, Msg, PageId, Severity, SiteConfig};

fn nav(page: &str) -> Msg {
    Msg::NavClicked {
        page: page.to_string(),
    }
}

fn ctrl(key: &str) -> Msg {
    Msg::KeyPressed(KeyPress::ctrl(Key::from_name(key)))
}

#[test]
fn every_page_has_exactly_one_active_control_and_panel() {
    let mut harness = Harness::new();
    for page in PageId::ALL {
        harness.dispatch(nav(page.as_str()));
        let view = harness.view();

        assert_eq!(view.active_page, page);
        assert_eq!(view.active_controls().collect::<Vec<_>>(), vec![page]);
        assert_eq!(view.active_panels().collect::<Vec<_>>(), vec![page]);
        assert_eq!(view.breadcrumb, page.title());

        let toast = view.notification.expect("navigation toast");
        assert_eq!(toast.message, format!("Navigated to {}", page.title()));
        assert_eq!(toast.severity, Severity::Info);
    }
}

#[test]
fn unknown_target_changes_nothing() {
    let mut harness = Harness::new();
    harness.dispatch(nav("about"));
    let mut before = harness.state().clone();
    before.consume_dirty();

    for msg in [
        nav("blog"),
        nav(""),
        Msg::QuickActionClicked {
            page: String::new(),
        },
    ] {
        let mut state = harness.state().clone();
        state.consume_dirty();
        let (mut next, effects) = underworld_core::update(state, msg);

        assert!(effects.is_empty());
        assert!(!next.consume_dirty());
        assert_eq!(next, before);
    }
}

#[test]
fn quick_actions_use_the_same_router() {
    let mut harness = Harness::new();
    harness.dispatch(Msg::QuickActionClicked {
        page: "stories".to_string(),
    });

    let view = harness.view();
    assert_eq!(view.active_page, PageId::Stories);
    assert_eq!(
        harness.notification_message().as_deref(),
        Some("Navigated to 📚 Stories")
    );
}

#[test]
fn navigating_to_the_active_page_still_notifies() {
    let mut harness = Harness::new();
    let effects = harness.dispatch(nav("home"));

    assert_eq!(harness.view().active_page, PageId::Home);
    assert_eq!(effects.len(), 1);
    assert!(harness.view().notification.is_some());
}

#[test]
fn digit_shortcuts_pick_controls_by_position() {
    let mut harness = Harness::new();
    harness.dispatch(ctrl("4"));
    assert_eq!(harness.view().active_page, PageId::Contact);
    harness.dispatch(ctrl("2"));
    assert_eq!(harness.view().active_page, PageId::About);
}

#[test]
fn arrow_right_wraps_from_last_to_first() {
    let mut harness = Harness::new();
    harness.dispatch(nav("contact"));
    harness.dispatch(ctrl("ArrowRight"));
    assert_eq!(harness.view().active_page, PageId::Home);
}

#[test]
fn arrow_left_wraps_from_first_to_last() {
    let mut harness = Harness::new();
    harness.dispatch(ctrl("ArrowLeft"));
    assert_eq!(harness.view().active_page, PageId::Contact);
    harness.dispatch(ctrl("ArrowLeft"));
    assert_eq!(harness.view().active_page, PageId::Stories);
}

#[test]
fn shortcuts_need_ctrl() {
    let mut harness = Harness::new();
    let effects = harness.dispatch(Msg::KeyPressed(KeyPress::new(Key::Digit(3), false)));
    assert!(effects.is_empty());
    assert_eq!(harness.view().active_page, PageId::Home);
}

#[test]
fn arrow_left_without_active_control_lands_on_last() {
    // Home is active but has no control, so the scan finds nothing.
    let config = SiteConfig {
        controls: vec![PageId::About, PageId::Stories, PageId::Contact],
        ..SiteConfig::default()
    };
    let mut harness = Harness::with_config(config);
    assert!(harness.view().active_controls().next().is_none());

    harness.dispatch(ctrl("ArrowLeft"));
    assert_eq!(harness.view().active_page, PageId::Contact);
}

#[test]
fn digit_past_the_control_list_is_ignored() {
    let config = SiteConfig {
        controls: vec![PageId::Home, PageId::About, PageId::Stories],
        ..SiteConfig::default()
    };
    let mut harness = Harness::with_config(config);

    let effects = harness.dispatch(ctrl("4"));

    assert!(effects.is_empty());
    assert_eq!(harness.view().active_page, PageId::Home);
}
