use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioIntent {
    /// User asked for playback; the backend is starting.
    RequestStart,
    /// The backend reported that playback started.
    Started,
    /// The backend refused to start.
    Rejected,
    /// User paused playback.
    Pause,
}

impl Intent for AudioIntent {}
