//! Page navigation: the transition state machine and its owner.

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::{PageController, TransitionTiming};
pub use intent::NavigationIntent;
pub use reducer::NavigationReducer;
pub use state::{NavigationState, TransitionPhase};
