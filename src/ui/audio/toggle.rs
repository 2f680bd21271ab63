use crate::audio::{PlaybackBackend, PlaybackCallback};
use crate::error::PlaybackError;
use crate::ui::audio::intent::AudioIntent;
use crate::ui::audio::reducer::AudioReducer;
use crate::ui::audio::state::AudioState;
use crate::ui::mvi::Reducer;

/// What a toggle request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Paused,
    /// A start was requested; the outcome arrives through the callback.
    StartRequested,
    /// A start is already pending.
    Ignored,
}

pub struct AudioToggle {
    state: AudioState,
    backend: Box<dyn PlaybackBackend>,
}

impl AudioToggle {
    pub fn new(backend: Box<dyn PlaybackBackend>) -> Self {
        Self {
            state: AudioState::default(),
            backend,
        }
    }

    pub fn state(&self) -> AudioState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    /// Pause when playing, otherwise ask the backend to start. `done` is
    /// handed to the backend and must route the outcome back to
    /// [`AudioToggle::resolve`] on the event loop.
    pub fn toggle(&mut self, done: PlaybackCallback) -> ToggleOutcome {
        match self.state {
            AudioState::Playing => {
                self.backend.pause();
                self.dispatch(AudioIntent::Pause);
                tracing::info!("Audio paused");
                ToggleOutcome::Paused
            }
            AudioState::Starting => {
                tracing::debug!("Audio start already pending, toggle ignored");
                ToggleOutcome::Ignored
            }
            AudioState::Paused => {
                self.dispatch(AudioIntent::RequestStart);
                self.backend.start(done);
                ToggleOutcome::StartRequested
            }
        }
    }

    /// Apply the outcome of a start request. The result is handed back so
    /// the caller can surface a rejection.
    pub fn resolve(&mut self, result: Result<(), PlaybackError>) -> Result<(), PlaybackError> {
        match &result {
            Ok(()) => {
                self.dispatch(AudioIntent::Started);
                tracing::info!("Audio playing");
            }
            Err(err) => {
                self.dispatch(AudioIntent::Rejected);
                tracing::warn!(%err, "Audio playback could not start");
            }
        }
        result
    }

    fn dispatch(&mut self, intent: AudioIntent) {
        self.state = AudioReducer::reduce(self.state, intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Backend that parks start callbacks and counts pauses.
    struct Parked {
        pending: Vec<PlaybackCallback>,
        pauses: Arc<AtomicUsize>,
    }

    impl PlaybackBackend for Parked {
        fn start(&mut self, done: PlaybackCallback) {
            self.pending.push(done);
        }

        fn pause(&mut self) {
            self.pauses.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn toggle_with_parked() -> (AudioToggle, Arc<AtomicUsize>) {
        let pauses = Arc::new(AtomicUsize::new(0));
        let backend = Parked {
            pending: Vec::new(),
            pauses: Arc::clone(&pauses),
        };
        (AudioToggle::new(Box::new(backend)), pauses)
    }

    fn noop() -> PlaybackCallback {
        Box::new(|_| {})
    }

    #[test]
    fn start_does_not_play_until_resolved() {
        let (mut toggle, _) = toggle_with_parked();
        assert_eq!(toggle.toggle(noop()), ToggleOutcome::StartRequested);
        assert!(!toggle.is_playing());
        assert_eq!(toggle.toggle(noop()), ToggleOutcome::Ignored);

        assert!(toggle.resolve(Ok(())).is_ok());
        assert!(toggle.is_playing());
    }

    #[test]
    fn pause_is_synchronous() {
        let (mut toggle, pauses) = toggle_with_parked();
        toggle.toggle(noop());
        let _ = toggle.resolve(Ok(()));

        assert_eq!(toggle.toggle(noop()), ToggleOutcome::Paused);
        assert_eq!(toggle.state(), AudioState::Paused);
        assert_eq!(pauses.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn rejection_keeps_it_paused() {
        let (mut toggle, _) = toggle_with_parked();
        toggle.toggle(noop());
        let result = toggle.resolve(Err(PlaybackError::NoOutputDevice));
        assert!(matches!(result, Err(PlaybackError::NoOutputDevice)));
        assert_eq!(toggle.state(), AudioState::Paused);
        assert_eq!(toggle.toggle(noop()), ToggleOutcome::StartRequested);
    }
}
