//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_playback;

use anniversary::config::Config;
use anniversary::deck::PageNumber;
use anniversary::error::PlaybackError;
use anniversary::ui::app::{App, PlaybackNotifier};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

pub use mock_playback::{MockPlayback, PlaybackProbe};

pub const COLS: u16 = 80;
pub const ROWS: u16 = 24;

pub type PlaybackInbox = Arc<Mutex<Vec<Result<(), PlaybackError>>>>;

/// An app wired to a scripted playback backend. Playback outcomes land in
/// `inbox` the way the runtime's channel would carry them.
pub struct Harness {
    pub app: App,
    pub probe: PlaybackProbe,
    pub inbox: PlaybackInbox,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let (backend, probe) = MockPlayback::new();
        let inbox: PlaybackInbox = Arc::new(Mutex::new(Vec::new()));
        let app = make_app_with(&config, Box::new(backend), Arc::clone(&inbox));
        Self { app, probe, inbox }
    }

    /// Hand every pending playback outcome to the app.
    pub fn deliver_playback(&mut self) {
        let results: Vec<_> = self.inbox.lock().drain(..).collect();
        for result in results {
            self.app.on_playback_result(result);
        }
    }

    pub fn advance_ms(&mut self, ms: u64) {
        self.app.advance_by(Duration::from_millis(ms));
    }

    /// Advance far enough for any page transition to settle.
    pub fn settle(&mut self) {
        self.advance_ms(1_000);
    }
}

pub fn make_app_with(
    config: &Config,
    backend: Box<dyn anniversary::audio::PlaybackBackend>,
    inbox: PlaybackInbox,
) -> App {
    let notifier: PlaybackNotifier = Arc::new(move |result| inbox.lock().push(result));
    let mut app = App::new(config, backend, notifier);
    app.on_resize(COLS, ROWS);
    app.start();
    app
}

pub fn page(n: u8) -> PageNumber {
    PageNumber::new(n).expect("page in range")
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

pub fn left_down(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

pub fn left_drag(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Drag(MouseButton::Left), column, row)
}

pub fn left_up(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Up(MouseButton::Left), column, row)
}
