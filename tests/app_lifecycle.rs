//! App-level behaviour: audio toggle, overlays and pointer input.

mod common;

use anniversary::audio::DisabledPlayback;
use anniversary::config::Config;
use anniversary::error::PlaybackError;
use anniversary::ui::audio::{AudioState, ToggleOutcome};
use anniversary::ui::input::{handle_key, handle_mouse};
use anniversary::ui::layout::Control;
use common::*;
use crossterm::event::{KeyCode, KeyModifiers, KeyEvent};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

// -- Audio toggle --------------------------------------------------------------

#[test]
fn audio_plays_only_after_the_backend_confirms() {
    let mut h = Harness::new();
    assert_eq!(h.app.toggle_audio(), ToggleOutcome::StartRequested);
    assert_eq!(h.app.audio_state(), AudioState::Starting);
    assert!(!h.app.audio_state().is_playing());

    assert!(h.probe.complete(Ok(())));
    // Still pending until the loop delivers the event.
    assert_eq!(h.app.audio_state(), AudioState::Starting);
    h.deliver_playback();
    assert!(h.app.audio_state().is_playing());
    assert_eq!(h.app.audio_state().presentation().label, "Now Playing");

    handle_key(&mut h.app, key(KeyCode::Char('p')));
    assert_eq!(h.app.audio_state(), AudioState::Paused);
    assert_eq!(h.probe.pauses(), 1);
}

#[test]
fn toggling_while_starting_is_dropped() {
    let mut h = Harness::new();
    h.app.toggle_audio();
    assert_eq!(h.app.toggle_audio(), ToggleOutcome::Ignored);
    assert_eq!(h.probe.starts(), 1);
    assert_eq!(h.probe.pending(), 1);
}

#[test]
fn failed_start_posts_a_notice_for_its_lifetime() {
    let mut h = Harness::new();
    h.app.toggle_audio();
    h.probe.complete(Err(PlaybackError::NoOutputDevice));
    h.deliver_playback();

    assert!(!h.app.audio_state().is_playing());
    assert_eq!(h.app.overlays().notices().len(), 1);
    assert_eq!(
        h.app.overlays().notices()[0].message,
        PlaybackError::NoOutputDevice.user_message()
    );

    h.advance_ms(2_999);
    assert_eq!(h.app.overlays().notices().len(), 1);
    h.advance_ms(1);
    assert!(h.app.overlays().notices().is_empty());
}

#[test]
fn disabled_backend_rejects_and_allows_retry() {
    let config = Config::default();
    let inbox: PlaybackInbox = Arc::new(Mutex::new(Vec::new()));
    let mut app = make_app_with(
        &config,
        Box::new(DisabledPlayback::no_track()),
        Arc::clone(&inbox),
    );

    assert_eq!(app.toggle_audio(), ToggleOutcome::StartRequested);
    let results: Vec<_> = inbox.lock().drain(..).collect();
    assert_eq!(results.len(), 1);
    for result in results {
        app.on_playback_result(result);
    }
    assert_eq!(app.audio_state(), AudioState::Paused);
    assert_eq!(app.overlays().notices().len(), 1);

    assert_eq!(app.toggle_audio(), ToggleOutcome::StartRequested);
}

// -- Overlays ------------------------------------------------------------------

#[test]
fn swipe_hint_hides_after_its_delay() {
    let mut h = Harness::new();
    assert!(h.app.overlays().swipe_hint_visible());
    h.advance_ms(4_999);
    assert!(h.app.overlays().swipe_hint_visible());
    h.advance_ms(1);
    assert!(!h.app.overlays().swipe_hint_visible());
}

#[test]
fn next_cue_tracks_the_earliest_pending_delay() {
    let mut h = Harness::new();
    assert_eq!(h.app.next_cue_in(), Some(Duration::from_millis(5_000)));

    h.advance_ms(1_000);
    assert_eq!(h.app.next_cue_in(), Some(Duration::from_millis(4_000)));
    h.app.next_page();
    assert_eq!(h.app.next_cue_in(), Some(Duration::from_millis(100)));
}

#[test]
fn swipe_hint_can_be_disabled() {
    let mut config = Config::default();
    config.ui.show_swipe_hint = false;
    let h = Harness::with_config(config);
    assert!(!h.app.overlays().swipe_hint_visible());
    assert_eq!(h.app.pending_cues(), 0);
}

#[test]
fn button_press_ripples_then_navigates() {
    let mut h = Harness::new();
    let (_, next_rect) = h
        .app
        .controls()
        .hit(COLS - 2, ROWS - 2)
        .expect("next button");
    handle_mouse(&mut h.app, left_down(COLS - 2, ROWS - 2));

    let ripple = h.app.overlays().ripples()[0];
    assert_eq!(ripple.size, next_rect.width.max(next_rect.height));
    assert_eq!(ripple.center(), (i32::from(COLS - 2), i32::from(ROWS - 2)));
    assert!(h.app.controller().is_transitioning());

    h.advance_ms(599);
    assert_eq!(h.app.overlays().ripples().len(), 1);
    h.advance_ms(1);
    assert!(h.app.overlays().ripples().is_empty());
    assert_eq!(h.app.current_page(), page(2));
}

#[test]
fn dot_press_goes_to_that_page() {
    let mut h = Harness::new();
    let (dot_page, rect) = h.app.controls().dots[3];
    assert_eq!(
        h.app.controls().hit(rect.x, rect.y).map(|(c, _)| c),
        Some(Control::Dot(dot_page))
    );
    handle_mouse(&mut h.app, left_down(rect.x, rect.y));
    assert!(h.app.overlays().ripples().is_empty());
    h.settle();
    assert_eq!(h.app.current_page(), page(4));
}

// -- Pointer gestures ----------------------------------------------------------

#[test]
fn drag_left_goes_forward_and_right_goes_back() {
    let mut h = Harness::new();
    handle_mouse(&mut h.app, left_down(60, 10));
    handle_mouse(&mut h.app, left_drag(50, 10));
    handle_mouse(&mut h.app, left_up(40, 10));
    h.settle();
    assert_eq!(h.app.current_page(), page(2));

    handle_mouse(&mut h.app, left_down(20, 10));
    handle_mouse(&mut h.app, left_up(40, 10));
    h.settle();
    assert_eq!(h.app.current_page(), page(1));
}

#[test]
fn short_drag_does_nothing() {
    let mut h = Harness::new();
    handle_mouse(&mut h.app, left_down(40, 10));
    handle_mouse(&mut h.app, left_drag(42, 10));
    // 6 columns at 8px is 48px, under the threshold.
    handle_mouse(&mut h.app, left_up(34, 10));
    assert!(!h.app.controller().is_transitioning());
}

#[test]
fn drag_leaving_the_surface_is_cancelled() {
    let mut h = Harness::new();
    handle_mouse(&mut h.app, left_down(60, 10));
    handle_mouse(&mut h.app, left_drag(30, 1));
    handle_mouse(&mut h.app, left_up(10, 10));
    h.settle();
    assert_eq!(h.app.current_page(), page(1));
}

#[test]
fn release_off_the_surface_is_cancelled() {
    let mut h = Harness::new();
    handle_mouse(&mut h.app, left_down(60, 10));
    handle_mouse(&mut h.app, left_up(10, 1));
    h.settle();
    assert_eq!(h.app.current_page(), page(1));
}

#[test]
fn release_on_the_footer_after_an_inside_drag_is_cancelled() {
    let mut h = Harness::new();
    handle_mouse(&mut h.app, left_down(60, 10));
    handle_mouse(&mut h.app, left_drag(55, 10));
    handle_mouse(&mut h.app, left_up(10, ROWS - 2));
    h.settle();
    assert_eq!(h.app.current_page(), page(1));

    // The cancelled drag leaves nothing behind for the next release.
    handle_mouse(&mut h.app, left_up(10, 10));
    h.settle();
    assert_eq!(h.app.current_page(), page(1));
}

// -- Quit ----------------------------------------------------------------------

#[test]
fn quit_keys() {
    for quit in [
        key(KeyCode::Char('q')),
        key(KeyCode::Esc),
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ] {
        let mut h = Harness::new();
        assert!(!h.app.should_quit());
        handle_key(&mut h.app, quit);
        assert!(h.app.should_quit());
    }
}
