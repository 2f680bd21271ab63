use crate::error::PlaybackError;

/// Completion of a start request. Invoked exactly once, possibly from
/// another thread.
pub type PlaybackCallback = Box<dyn FnOnce(Result<(), PlaybackError>) + Send + 'static>;

/// One background track that can be started and paused.
pub trait PlaybackBackend: Send {
    /// Begin starting playback. The outcome is reported through `done`,
    /// never by the return of this call.
    fn start(&mut self, done: PlaybackCallback);

    /// Pause playback synchronously.
    fn pause(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DisabledReason {
    NoTrack,
    OutputUnavailable,
}

/// Backend that refuses every start request.
#[derive(Debug)]
pub struct DisabledPlayback {
    reason: DisabledReason,
}

impl DisabledPlayback {
    pub fn no_track() -> Self {
        Self {
            reason: DisabledReason::NoTrack,
        }
    }

    pub fn output_unavailable() -> Self {
        Self {
            reason: DisabledReason::OutputUnavailable,
        }
    }
}

impl PlaybackBackend for DisabledPlayback {
    fn start(&mut self, done: PlaybackCallback) {
        done(Err(match self.reason {
            DisabledReason::NoTrack => PlaybackError::NoTrack,
            DisabledReason::OutputUnavailable => PlaybackError::OutputUnavailable,
        }));
    }

    fn pause(&mut self) {}
}
