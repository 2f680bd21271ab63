use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use anniversary::config::Config;
use anniversary::logging;
use anniversary::ui::runtime;

/// A five-page anniversary slideshow for the terminal.
#[derive(Debug, Parser)]
#[command(name = "anniversary", version, about)]
struct Cli {
    /// Config file (defaults to the platform config directory).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// WAV track for the audio toggle; overrides `[audio].track`.
    #[arg(long, value_name = "WAV")]
    audio: Option<PathBuf>,

    /// Log file; overrides `[logging].file`.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Do not show the swipe hint.
    #[arg(long)]
    no_hint: bool,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(track) = &self.audio {
            config.audio.track = Some(track.clone());
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
        if self.no_hint {
            config.ui.show_swipe_hint = false;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config().context("Failed to load configuration")?;

    let log_path = config
        .logging
        .file
        .clone()
        .unwrap_or_else(logging::default_log_path);
    logging::init_tracing(&log_path, &config.logging.level);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting anniversary");

    runtime::run(&config).context("Terminal session failed")?;
    Ok(())
}
