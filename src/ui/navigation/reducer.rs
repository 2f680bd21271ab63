use crate::ui::mvi::Reducer;
use crate::ui::navigation::intent::NavigationIntent;
use crate::ui::navigation::state::{NavigationState, TransitionPhase};

pub struct NavigationReducer;

impl Reducer for NavigationReducer {
    type State = NavigationState;
    type Intent = NavigationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavigationIntent::Show(page) => NavigationState {
                current: page,
                visible: Some(page),
                phase: state.phase,
            },
            NavigationIntent::Begin(target) => match state.phase {
                TransitionPhase::Idle if target != state.current => NavigationState {
                    current: state.current,
                    visible: None,
                    phase: TransitionPhase::Hiding { target },
                },
                _ => state,
            },
            NavigationIntent::Reveal => match state.phase {
                TransitionPhase::Hiding { target } => NavigationState {
                    current: target,
                    visible: Some(target),
                    phase: TransitionPhase::Settling,
                },
                _ => state,
            },
            NavigationIntent::RevealMissing => match state.phase {
                TransitionPhase::Hiding { .. } => NavigationState {
                    phase: TransitionPhase::Settling,
                    ..state
                },
                _ => state,
            },
            NavigationIntent::Settle => match state.phase {
                TransitionPhase::Settling => NavigationState {
                    phase: TransitionPhase::Idle,
                    ..state
                },
                _ => state,
            },
        }
    }
}
