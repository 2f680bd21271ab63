//! Scripted playback backend.

#![allow(dead_code)]

use anniversary::audio::{PlaybackBackend, PlaybackCallback};
use anniversary::error::PlaybackError;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct Shared {
    pending: Mutex<VecDeque<PlaybackCallback>>,
    starts: AtomicUsize,
    pauses: AtomicUsize,
}

/// Holds start callbacks until the test completes them through the probe.
pub struct MockPlayback {
    shared: Arc<Shared>,
}

#[derive(Clone)]
pub struct PlaybackProbe {
    shared: Arc<Shared>,
}

impl MockPlayback {
    pub fn new() -> (Self, PlaybackProbe) {
        let shared = Arc::new(Shared::default());
        (
            Self {
                shared: Arc::clone(&shared),
            },
            PlaybackProbe { shared },
        )
    }
}

impl PlaybackBackend for MockPlayback {
    fn start(&mut self, done: PlaybackCallback) {
        self.shared.starts.fetch_add(1, Ordering::SeqCst);
        self.shared.pending.lock().push_back(done);
    }

    fn pause(&mut self) {
        self.shared.pauses.fetch_add(1, Ordering::SeqCst);
    }
}

impl PlaybackProbe {
    /// Resolve the oldest pending start. Returns `false` if none is pending.
    pub fn complete(&self, result: Result<(), PlaybackError>) -> bool {
        let done = self.shared.pending.lock().pop_front();
        match done {
            Some(done) => {
                done(result);
                true
            }
            None => false,
        }
    }

    pub fn pending(&self) -> usize {
        self.shared.pending.lock().len()
    }

    pub fn starts(&self) -> usize {
        self.shared.starts.load(Ordering::SeqCst)
    }

    pub fn pauses(&self) -> usize {
        self.shared.pauses.load(Ordering::SeqCst)
    }
}
