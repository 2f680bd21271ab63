//! Model-View-Intent (MVI) primitives.
//!
//! Every state machine in the presentation (page navigation, audio toggle)
//! is a pure reducer over a state value. Side effects such as scheduling a
//! reveal or starting playback live in the owner that dispatches intents.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
