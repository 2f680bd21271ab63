use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::deck::PageContent;
use crate::ui::navigation::TransitionTiming;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub audio: AudioConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Replacement deck. Empty means the built-in pages.
    #[serde(default)]
    pub pages: Vec<PageContent>,
}

/// Delays of transitions and transient overlays, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Hide-to-show delay of a page transition (default: 100).
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: u64,
    /// Show-to-idle delay of a page transition (default: 300).
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    /// Lifetime of a press ripple (default: 600).
    #[serde(default = "default_ripple_lifetime_ms")]
    pub ripple_lifetime_ms: u64,
    /// Lifetime of a notice (default: 3000).
    #[serde(default = "default_notice_lifetime_ms")]
    pub notice_lifetime_ms: u64,
    /// Delay before the swipe hint hides (default: 5000).
    #[serde(default = "default_swipe_hint_delay_ms")]
    pub swipe_hint_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Minimum horizontal travel for a swipe, in pixels (default: 50).
    #[serde(default = "default_threshold_px")]
    pub threshold_px: f32,
    /// Pixels per terminal column when converting mouse drags (default: 8).
    #[serde(default = "default_cell_width_px")]
    pub cell_width_px: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AudioConfig {
    /// WAV file played by the audio toggle.
    #[serde(default)]
    pub track: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 50).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_true")]
    pub show_swipe_hint: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `ANNIVERSARY_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Defaults to the platform data directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_reveal_delay_ms() -> u64 {
    100
}

fn default_settle_delay_ms() -> u64 {
    300
}

fn default_ripple_lifetime_ms() -> u64 {
    600
}

fn default_notice_lifetime_ms() -> u64 {
    3000
}

fn default_swipe_hint_delay_ms() -> u64 {
    5000
}

fn default_threshold_px() -> f32 {
    crate::ui::gesture::DEFAULT_SWIPE_THRESHOLD
}

fn default_cell_width_px() -> f32 {
    8.0
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TimingConfig {
    pub fn transition(&self) -> TransitionTiming {
        TransitionTiming {
            reveal_delay: Duration::from_millis(self.reveal_delay_ms),
            settle_delay: Duration::from_millis(self.settle_delay_ms),
        }
    }

    pub fn ripple_lifetime(&self) -> Duration {
        Duration::from_millis(self.ripple_lifetime_ms)
    }

    pub fn notice_lifetime(&self) -> Duration {
        Duration::from_millis(self.notice_lifetime_ms)
    }

    pub fn swipe_hint_delay(&self) -> Duration {
        Duration::from_millis(self.swipe_hint_delay_ms)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: default_reveal_delay_ms(),
            settle_delay_ms: default_settle_delay_ms(),
            ripple_lifetime_ms: default_ripple_lifetime_ms(),
            notice_lifetime_ms: default_notice_lifetime_ms(),
            swipe_hint_delay_ms: default_swipe_hint_delay_ms(),
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            threshold_px: default_threshold_px(),
            cell_width_px: default_cell_width_px(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            show_swipe_hint: default_true(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
