use std::path::PathBuf;
use thiserror::Error;

/// Reasons the playback backend refused to start the track.
///
/// None of these are fatal: the toggle stays paused, a notice is shown and
/// the user can try again.
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("No audio track configured")]
    NoTrack,

    #[error("Audio output is not available in this build")]
    OutputUnavailable,

    #[error("Failed to read audio track '{path}': {source}")]
    TrackLoad {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    #[error("Audio track '{path}' contains no samples")]
    EmptyTrack { path: PathBuf },

    #[error("No audio output device found")]
    NoOutputDevice,

    #[error("Audio stream failed: {message}")]
    Stream { message: String },

    #[error("Audio worker is not running")]
    WorkerGone,
}

impl PlaybackError {
    /// Short text for the on-screen notice.
    pub fn user_message(&self) -> &'static str {
        match self {
            PlaybackError::NoTrack => "No song configured 🎵",
            PlaybackError::OutputUnavailable => "Audio output not built in 🎵",
            PlaybackError::NoOutputDevice
            | PlaybackError::Stream { .. }
            | PlaybackError::WorkerGone => "Press P to enable audio! 🎵",
            PlaybackError::TrackLoad { .. } | PlaybackError::EmptyTrack { .. } => {
                "Our song could not be loaded 🎵"
            }
        }
    }
}
