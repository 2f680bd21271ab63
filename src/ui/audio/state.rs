use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioState {
    #[default]
    Paused,
    /// A start request is pending; nothing plays yet.
    Starting,
    Playing,
}

impl UiState for AudioState {}

impl AudioState {
    pub fn is_playing(self) -> bool {
        self == AudioState::Playing
    }

    pub fn presentation(self) -> AudioPresentation {
        if self.is_playing() {
            AudioPresentation {
                icon: "⏸",
                label: "Now Playing",
                highlighted: true,
                equalizer_active: true,
            }
        } else {
            AudioPresentation {
                icon: "▶",
                label: "Play Our Song",
                highlighted: false,
                equalizer_active: false,
            }
        }
    }
}

/// How the audio control is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioPresentation {
    pub icon: &'static str,
    pub label: &'static str,
    pub highlighted: bool,
    pub equalizer_active: bool,
}
