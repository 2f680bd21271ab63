//! Audio toggle: a play/pause state machine over one playback backend.

mod intent;
mod reducer;
mod state;
mod toggle;

pub use intent::AudioIntent;
pub use reducer::AudioReducer;
pub use state::{AudioPresentation, AudioState};
pub use toggle::{AudioToggle, ToggleOutcome};
