//! Owner of the navigation state machine.
//!
//! `PageController` turns navigation requests into reducer intents and
//! schedules the delayed halves of a transition on the shared timeline:
//!
//! ```text
//! go_to_page ─→ Hiding ──(reveal delay)──→ Settling ──(settle delay)──→ Idle
//!              all hidden              target shown,
//!                                      entrance steps scheduled
//! ```

use std::time::Duration;

use crate::deck::{Deck, PageNumber};
use crate::schedule::{Cue, Timeline};
use crate::ui::chrome::ChromeView;
use crate::ui::entrance::{self, EntranceEffect, EntranceStyles};
use crate::ui::mvi::Reducer;
use crate::ui::navigation::intent::NavigationIntent;
use crate::ui::navigation::reducer::NavigationReducer;
use crate::ui::navigation::state::{NavigationState, TransitionPhase};

/// Delays of the two-phase page transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTiming {
    /// From accepting a request to showing the target page.
    pub reveal_delay: Duration,
    /// From showing the target page to accepting requests again.
    pub settle_delay: Duration,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            reveal_delay: Duration::from_millis(100),
            settle_delay: Duration::from_millis(300),
        }
    }
}

pub struct PageController {
    state: NavigationState,
    deck: Deck,
    /// Entrance styles per page, indexed by `PageNumber::index`.
    styles: Vec<EntranceStyles>,
    timing: TransitionTiming,
}

impl PageController {
    pub fn new(deck: Deck, timing: TransitionTiming) -> Self {
        let styles = PageNumber::all()
            .map(|page| EntranceStyles::for_content(deck.get(page)))
            .collect();
        Self {
            state: NavigationState::default(),
            deck,
            styles,
            timing,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_page(&self) -> PageNumber {
        self.state.current()
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn styles(&self, page: PageNumber) -> Option<&EntranceStyles> {
        self.styles.get(page.index())
    }

    pub fn chrome(&self) -> ChromeView {
        ChromeView::project(&self.state)
    }

    /// Show `page` right away. Used once at startup: no delays and no
    /// entrance animation.
    pub fn show_page(&mut self, page: PageNumber) {
        self.dispatch(NavigationIntent::Show(page));
        tracing::debug!(page = page.get(), "Initial page shown");
    }

    /// Start a transition to `target`.
    ///
    /// Returns `false` and leaves everything untouched when a transition is
    /// already in flight or `target` is the current page.
    pub fn go_to_page(&mut self, target: PageNumber, timeline: &mut Timeline<Cue>) -> bool {
        let before = self.state.clone();
        self.dispatch(NavigationIntent::Begin(target));
        if self.state == before {
            tracing::debug!(
                target = target.get(),
                current = before.current().get(),
                transitioning = before.is_transitioning(),
                "Navigation request dropped"
            );
            return false;
        }

        tracing::debug!(
            from = before.current().get(),
            to = target.get(),
            "Page transition started"
        );
        timeline.schedule(self.timing.reveal_delay, Cue::RevealPage(target));
        true
    }

    pub fn next_page(&mut self, timeline: &mut Timeline<Cue>) -> bool {
        if self.is_transitioning() {
            return false;
        }
        match self.current_page().next() {
            Some(target) => self.go_to_page(target, timeline),
            None => false,
        }
    }

    pub fn prev_page(&mut self, timeline: &mut Timeline<Cue>) -> bool {
        if self.is_transitioning() {
            return false;
        }
        match self.current_page().prev() {
            Some(target) => self.go_to_page(target, timeline),
            None => false,
        }
    }

    /// The reveal delay for `target` elapsed.
    pub fn on_reveal(&mut self, target: PageNumber, timeline: &mut Timeline<Cue>) {
        if self.state.phase() != (TransitionPhase::Hiding { target }) {
            tracing::trace!(target = target.get(), "Stale reveal cue ignored");
            return;
        }

        match self.deck.get(target) {
            Some(content) => {
                let steps = entrance::plan(target, Some(content));
                self.dispatch(NavigationIntent::Reveal);
                for step in steps {
                    timeline.schedule(
                        step.offset,
                        Cue::Entrance {
                            page: target,
                            effect: step.effect,
                        },
                    );
                }
            }
            None => {
                tracing::warn!(target = target.get(), "Page missing from deck, nothing shown");
                self.dispatch(NavigationIntent::RevealMissing);
            }
        }

        timeline.schedule(self.timing.settle_delay, Cue::Settle);
    }

    /// The settle delay elapsed.
    pub fn on_settle(&mut self) {
        self.dispatch(NavigationIntent::Settle);
    }

    /// An entrance step for `page` came due.
    pub fn on_entrance(&mut self, page: PageNumber, effect: EntranceEffect) {
        let applied = self
            .styles
            .get_mut(page.index())
            .is_some_and(|styles| styles.apply(effect));
        if !applied {
            tracing::trace!(page = page.get(), ?effect, "Entrance target missing, skipped");
        }
    }

    fn dispatch(&mut self, intent: NavigationIntent) {
        self.state = NavigationReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}
