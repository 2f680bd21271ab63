//! Base trait for state values.

/// Marker trait for state objects.
///
/// States are plain values: cloned to snapshot, compared to detect
/// whether an intent was accepted.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
