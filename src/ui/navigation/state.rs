//! State for page navigation.

use crate::deck::PageNumber;
use crate::ui::mvi::UiState;

/// Where the navigation state machine is within a page transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    /// No transition in flight; requests are accepted.
    #[default]
    Idle,
    /// Every page is hidden; `target` is revealed when the reveal delay ends.
    Hiding { target: PageNumber },
    /// The new page is shown; requests stay blocked until the settle delay ends.
    Settling,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub(super) current: PageNumber,
    pub(super) visible: Option<PageNumber>,
    pub(super) phase: TransitionPhase,
}

impl UiState for NavigationState {}

impl NavigationState {
    /// Settled state showing `page`.
    pub fn at(page: PageNumber) -> Self {
        Self {
            current: page,
            visible: Some(page),
            phase: TransitionPhase::Idle,
        }
    }

    pub fn current(&self) -> PageNumber {
        self.current
    }

    /// The page currently marked visible. `None` while every page is hidden.
    pub fn visible(&self) -> Option<PageNumber> {
        self.visible
    }

    pub fn is_visible(&self, page: PageNumber) -> bool {
        self.visible == Some(page)
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase != TransitionPhase::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle_on_first_page_with_nothing_shown() {
        let state = NavigationState::default();
        assert_eq!(state.current(), PageNumber::first());
        assert_eq!(state.visible(), None);
        assert!(!state.is_transitioning());
    }

    #[test]
    fn at_marks_exactly_that_page_visible() {
        let state = NavigationState::at(PageNumber::last());
        assert!(state.is_visible(PageNumber::last()));
        assert_eq!(
            PageNumber::all().filter(|p| state.is_visible(*p)).count(),
            1
        );
    }
}
