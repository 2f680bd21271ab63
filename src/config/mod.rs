pub mod loader;
pub mod types;

pub use loader::ConfigError;
pub use types::{
    AudioConfig, Config, GestureConfig, LoggingConfig, TimingConfig, UiConfig,
};
