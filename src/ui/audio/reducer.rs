use crate::ui::audio::intent::AudioIntent;
use crate::ui::audio::state::AudioState;
use crate::ui::mvi::Reducer;

pub struct AudioReducer;

impl Reducer for AudioReducer {
    type State = AudioState;
    type Intent = AudioIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (AudioState::Paused, AudioIntent::RequestStart) => AudioState::Starting,
            (AudioState::Starting, AudioIntent::Started) => AudioState::Playing,
            (AudioState::Starting, AudioIntent::Rejected) => AudioState::Paused,
            (AudioState::Playing, AudioIntent::Pause) => AudioState::Paused,
            (state, _) => state,
        }
    }
}
