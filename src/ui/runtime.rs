use crate::audio;
use crate::config::Config;
use crate::ui::app::{App, PlaybackNotifier};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Instant;

pub fn run(config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);

    let playback_tx = events.sender();
    let notifier: PlaybackNotifier = Arc::new(move |result| {
        let _ = playback_tx.send(AppEvent::Playback(result));
    });
    let backend = audio::backend_for(config.audio.track.as_deref());
    let mut app = App::new(config, backend, notifier);

    let (cols, rows) = crossterm::terminal::size()?;
    app.on_resize(cols, rows);
    let clock = Instant::now();
    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        // Wake for the next cue rather than the next tick.
        let lag = clock.elapsed().saturating_sub(app.now());
        let wait = app
            .next_cue_in()
            .map_or(tick_rate, |due| due.saturating_sub(lag).min(tick_rate));
        let event = events.next(wait);
        app.advance_to(clock.elapsed());
        match event {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Playback(result)) => app.on_playback_result(result),
            Ok(AppEvent::Shutdown) => {
                tracing::info!("Shutdown signal received");
                app.request_quit();
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!(page = app.current_page().get(), "Presentation closed");
    drop(guard);
    Ok(())
}
