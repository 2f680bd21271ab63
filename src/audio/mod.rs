//! Background track playback.
//!
//! The toggle state machine only sees [`PlaybackBackend`]. Decoding is
//! always available through [`Track`]; device output needs the
//! `native-audio` feature.

mod backend;
#[cfg(feature = "native-audio")]
mod output;
mod track;

pub use backend::{DisabledPlayback, PlaybackBackend, PlaybackCallback};
#[cfg(feature = "native-audio")]
pub use output::CpalPlayback;
pub use track::Track;

use std::path::Path;

/// Pick the backend for an optional track path.
pub fn backend_for(track: Option<&Path>) -> Box<dyn PlaybackBackend> {
    let Some(path) = track else {
        tracing::info!("No audio track configured, playback disabled");
        return Box::new(DisabledPlayback::no_track());
    };

    #[cfg(feature = "native-audio")]
    {
        tracing::info!(path = %path.display(), "Audio output enabled");
        Box::new(CpalPlayback::new(path.to_path_buf()))
    }

    #[cfg(not(feature = "native-audio"))]
    {
        tracing::info!(
            path = %path.display(),
            "Built without native-audio, playback disabled"
        );
        Box::new(DisabledPlayback::output_unavailable())
    }
}
