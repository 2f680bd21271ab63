//! A five-page anniversary slideshow for the terminal.
//!
//! [`ui::app::App`] owns everything: the page navigation state machine,
//! the gesture recognizer, the audio toggle, overlays and the [`schedule`]
//! timeline that carries every delay. [`ui::runtime::run`] drives it from
//! terminal events.

pub mod audio;
pub mod config;
pub mod deck;
pub mod error;
pub mod logging;
pub mod schedule;
pub mod ui;
