//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are user requests (next page, toggle audio) or loop events
/// (a timeline cue came due, playback finished starting).
pub trait Intent: Send + 'static {}
