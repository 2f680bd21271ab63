use std::sync::Arc;
use std::time::Duration;

use ratatui::layout::Rect;

use crate::audio::PlaybackBackend;
use crate::config::{Config, TimingConfig};
use crate::deck::PageNumber;
use crate::error::PlaybackError;
use crate::schedule::{Cue, Timeline};
use crate::ui::audio::{AudioState, AudioToggle, ToggleOutcome};
use crate::ui::gesture::{GestureRecognizer, InputSource, Swipe};
use crate::ui::layout::{self, Control, Controls};
use crate::ui::navigation::PageController;
use crate::ui::overlay::{OverlayId, Overlays};

/// Routes a playback start outcome back to the event loop.
pub type PlaybackNotifier = Arc<dyn Fn(Result<(), PlaybackError>) + Send + Sync>;

/// The whole presentation: every component lives here and is only touched
/// from the event loop thread.
pub struct App {
    should_quit: bool,
    area: Rect,
    controls: Controls,
    controller: PageController,
    timeline: Timeline<Cue>,
    gesture: GestureRecognizer,
    audio: AudioToggle,
    notifier: PlaybackNotifier,
    overlays: Overlays,
    timing: TimingConfig,
    cell_width_px: f32,
}

impl App {
    pub fn new(
        config: &Config,
        backend: Box<dyn PlaybackBackend>,
        notifier: PlaybackNotifier,
    ) -> Self {
        let area = Rect::default();
        Self {
            should_quit: false,
            area,
            controls: Controls::for_area(area),
            controller: PageController::new(config.deck(), config.timing.transition()),
            timeline: Timeline::new(),
            gesture: GestureRecognizer::new(config.gesture.threshold_px),
            audio: AudioToggle::new(backend),
            notifier,
            overlays: Overlays::new(config.ui.show_swipe_hint),
            timing: config.timing.clone(),
            cell_width_px: config.gesture.cell_width_px,
        }
    }

    /// Show the first page and arm the swipe hint.
    pub fn start(&mut self) {
        self.controller.show_page(PageNumber::first());
        if self.overlays.swipe_hint_visible() {
            self.timeline
                .schedule(self.timing.swipe_hint_delay(), Cue::HideSwipeHint);
        }
        tracing::info!(pages = self.controller.deck().len(), "Presentation started");
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn controller(&self) -> &PageController {
        &self.controller
    }

    pub fn current_page(&self) -> PageNumber {
        self.controller.current_page()
    }

    pub fn overlays(&self) -> &Overlays {
        &self.overlays
    }

    pub fn audio_state(&self) -> AudioState {
        self.audio.state()
    }

    /// Position of the timeline since startup.
    pub fn now(&self) -> Duration {
        self.timeline.now()
    }

    /// Time from the timeline's current instant to the next cue.
    pub fn next_cue_in(&self) -> Option<Duration> {
        self.timeline.next_due_in()
    }

    /// Number of cues waiting on the timeline.
    pub fn pending_cues(&self) -> usize {
        self.timeline.len()
    }

    /// Run every cue due up to `now`, in due order.
    pub fn advance_to(&mut self, now: Duration) {
        while let Some(cue) = self.timeline.pop_due(now) {
            self.handle_cue(cue);
        }
    }

    pub fn advance_by(&mut self, delta: Duration) {
        let now = self.timeline.now() + delta;
        self.advance_to(now);
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.area = Rect {
            x: 0,
            y: 0,
            width: cols,
            height: rows,
        };
        self.controls = Controls::for_area(self.area);
    }

    pub fn next_page(&mut self) -> bool {
        self.controller.next_page(&mut self.timeline)
    }

    pub fn prev_page(&mut self) -> bool {
        self.controller.prev_page(&mut self.timeline)
    }

    pub fn go_to_page(&mut self, page: PageNumber) -> bool {
        self.controller.go_to_page(page, &mut self.timeline)
    }

    pub fn toggle_audio(&mut self) -> ToggleOutcome {
        let notifier = Arc::clone(&self.notifier);
        self.audio.toggle(Box::new(move |result| notifier(result)))
    }

    /// A start request finished on the playback side.
    pub fn on_playback_result(&mut self, result: Result<(), PlaybackError>) {
        if let Err(err) = self.audio.resolve(result) {
            self.post_notice(err.user_message());
        }
    }

    pub fn post_notice(&mut self, message: &str) -> OverlayId {
        let id = self.overlays.post_notice(message);
        self.timeline
            .schedule(self.timing.notice_lifetime(), Cue::ExpireNotice(id));
        id
    }

    /// Press a control at `(column, row)`: ripple feedback on buttons,
    /// then the control's action. Dots have no ripple.
    pub fn press_control(&mut self, control: Control, rect: Rect, column: u16, row: u16) {
        if !matches!(control, Control::Dot(_)) {
            let ripple = self
                .overlays
                .spawn_ripple(layout::bounds(rect), column, row);
            self.timeline
                .schedule(self.timing.ripple_lifetime(), Cue::ExpireRipple(ripple));
        }

        match control {
            Control::Prev => {
                self.prev_page();
            }
            Control::Next => {
                self.next_page();
            }
            Control::Dot(page) => {
                self.go_to_page(page);
            }
            Control::Audio => {
                self.toggle_audio();
            }
        }
    }

    /// Left button pressed at `(column, row)`.
    pub fn on_pointer_down(&mut self, column: u16, row: u16) {
        if let Some((control, rect)) = self.controls.hit(column, row) {
            self.press_control(control, rect, column, row);
        } else if self.on_surface(column, row) {
            self.gesture.press(InputSource::Pointer, self.to_px(column));
        }
    }

    /// Pointer moved with the left button held. Leaving the page surface
    /// cancels the drag.
    pub fn on_pointer_drag(&mut self, column: u16, row: u16) {
        if !self.gesture.is_dragging(InputSource::Pointer) {
            return;
        }
        if self.on_surface(column, row) {
            let feedback = self.gesture.drag(InputSource::Pointer, self.to_px(column));
            tracing::trace!(?feedback, "Pointer drag");
        } else {
            self.gesture.cancel(InputSource::Pointer);
        }
    }

    /// Left button released. A release off the page surface cancels the
    /// drag instead of resolving it.
    pub fn on_pointer_up(&mut self, column: u16, row: u16) {
        if !self.gesture.is_dragging(InputSource::Pointer) {
            return;
        }
        if !self.on_surface(column, row) {
            self.gesture.cancel(InputSource::Pointer);
            return;
        }
        match self.gesture.release(InputSource::Pointer, self.to_px(column)) {
            Swipe::Forward => {
                self.next_page();
            }
            Swipe::Back => {
                self.prev_page();
            }
            Swipe::None => {}
        }
    }

    fn on_surface(&self, column: u16, row: u16) -> bool {
        layout::contains(layout::body_rect(self.area), column, row)
    }

    fn to_px(&self, column: u16) -> f32 {
        f32::from(column) * self.cell_width_px
    }

    fn handle_cue(&mut self, cue: Cue) {
        match cue {
            Cue::RevealPage(target) => self.controller.on_reveal(target, &mut self.timeline),
            Cue::Settle => self.controller.on_settle(),
            Cue::Entrance { page, effect } => self.controller.on_entrance(page, effect),
            Cue::ExpireRipple(id) => self.overlays.expire_ripple(id),
            Cue::ExpireNotice(id) => self.overlays.expire_notice(id),
            Cue::HideSwipeHint => self.overlays.hide_swipe_hint(),
        }
    }
}
