//! Page navigation through the app: transitions, guards, chrome and
//! entrance timing.

mod common;

use anniversary::deck::{PageNumber, TOTAL_PAGES};
use anniversary::ui::chrome::NextAffordance;
use anniversary::ui::input::handle_key;
use anniversary::ui::navigation::TransitionPhase;
use common::*;
use crossterm::event::KeyCode;

#[test]
fn every_other_page_is_reachable_with_one_visible_page() {
    for target in PageNumber::all().filter(|p| !p.is_first()) {
        let mut h = Harness::new();
        assert!(h.app.go_to_page(target));
        h.settle();

        let state = h.app.controller().state();
        assert_eq!(state.current(), target);
        assert_eq!(state.visible(), Some(target));
        assert_eq!(
            PageNumber::all().filter(|p| state.is_visible(*p)).count(),
            1
        );
        assert!(!state.is_transitioning());
    }
}

#[test]
fn requests_during_a_transition_never_change_the_page() {
    let mut h = Harness::new();
    assert!(h.app.go_to_page(page(4)));

    for step in 0..8 {
        assert!(!h.app.go_to_page(page(2)));
        assert!(!h.app.next_page());
        assert!(!h.app.prev_page());
        h.advance_ms(50);
        if step < 1 {
            assert_eq!(h.app.current_page(), page(1));
        }
    }
    h.settle();
    assert_eq!(h.app.current_page(), page(4));
}

#[test]
fn going_to_the_current_page_is_a_no_op() {
    let mut h = Harness::new();
    assert!(!h.app.go_to_page(page(1)));
    assert!(!h.app.controller().is_transitioning());

    assert!(h.app.go_to_page(page(2)));
    h.advance_ms(150);
    // Mid-transition, current is already the target.
    assert!(!h.app.go_to_page(page(2)));
    h.settle();
    assert!(!h.app.go_to_page(page(2)));
}

#[test]
fn edges_do_not_move() {
    let mut h = Harness::new();
    assert!(!h.app.prev_page());
    assert_eq!(h.app.controller().state().phase(), TransitionPhase::Idle);

    h.app.go_to_page(PageNumber::last());
    h.settle();
    assert!(!h.app.next_page());
    assert_eq!(h.app.current_page(), PageNumber::last());
}

#[test]
fn four_next_presses_reach_the_last_page() {
    let mut h = Harness::new();
    for _ in 0..4 {
        handle_key(&mut h.app, key(KeyCode::Right));
        h.settle();
    }

    assert_eq!(h.app.current_page().get(), TOTAL_PAGES);
    let chrome = h.app.controller().chrome();
    assert_eq!(chrome.next, NextAffordance::Complete);
    assert!(chrome.prev_enabled);
    assert_eq!(chrome.progress_percent(), 100);
}

#[test]
fn progress_grows_and_one_dot_is_active() {
    let mut h = Harness::new();
    let mut last = 0.0;
    for n in 1..=TOTAL_PAGES {
        if n > 1 {
            h.app.next_page();
            h.settle();
        }
        let chrome = h.app.controller().chrome();
        assert!(chrome.progress >= last);
        last = chrome.progress;
        assert_eq!(chrome.dots.iter().filter(|active| **active).count(), 1);
        assert_eq!(chrome.active_dot(), Some(usize::from(n) - 1));
    }
    assert!((last - 1.0).abs() < f64::EPSILON);
}

#[test]
fn third_card_enters_four_hundred_ms_after_the_page_shows() {
    let mut h = Harness::new();
    h.app.go_to_page(page(3));

    h.advance_ms(100);
    let styles = |h: &Harness| h.app.controller().styles(page(3)).cloned().expect("styles");
    assert!(h.app.controller().state().is_visible(page(3)));
    assert!(styles(&h).card_shown(0));
    assert!(!styles(&h).card_shown(2));

    h.advance_ms(399);
    assert!(styles(&h).card_shown(1));
    assert!(!styles(&h).card_shown(2));

    h.advance_ms(1);
    assert!(styles(&h).card_shown(2));
}

#[test]
fn dropped_request_leaves_the_timeline_alone() {
    let mut h = Harness::new();
    h.app.go_to_page(page(2));
    h.settle();
    let pending = h.app.pending_cues();

    assert!(!h.app.go_to_page(page(2)));
    assert_eq!(h.app.pending_cues(), pending);
    assert_eq!(h.app.controller().state().phase(), TransitionPhase::Idle);

    assert!(h.app.go_to_page(page(3)));
    let in_flight = h.app.pending_cues();
    assert!(!h.app.next_page());
    assert!(!h.app.go_to_page(page(5)));
    assert_eq!(h.app.pending_cues(), in_flight);
}

#[test]
fn digit_keys_jump_to_dots() {
    let mut h = Harness::new();
    handle_key(&mut h.app, key(KeyCode::Char('5')));
    h.settle();
    assert_eq!(h.app.current_page(), page(5));

    handle_key(&mut h.app, key(KeyCode::Left));
    h.settle();
    assert_eq!(h.app.current_page(), page(4));
}
