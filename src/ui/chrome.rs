//! Navigation chrome derived from the navigation state.
//!
//! [`ChromeView::project`] is a pure function of [`NavigationState`]: the
//! progress bar, page counter, previous/next controls and position dots
//! never hold state of their own.

use crate::deck::{PageNumber, TOTAL_PAGES};
use crate::ui::navigation::NavigationState;

/// Presentation of the "next" control.
///
/// On the last page it switches to a completion affordance but stays
/// clickable; pressing it there is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAffordance {
    Advance,
    Complete,
}

impl NextAffordance {
    pub fn icon(self) -> &'static str {
        match self {
            NextAffordance::Advance => "→",
            NextAffordance::Complete => "✓",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NextAffordance::Advance => "Next",
            NextAffordance::Complete => "Finish",
        }
    }

    /// Whether the control uses the highlight styling.
    pub fn is_highlighted(self) -> bool {
        self == NextAffordance::Complete
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChromeView {
    /// Fraction of the presentation reached, in `(0.0, 1.0]`.
    pub progress: f64,
    /// Page counter text.
    pub counter: String,
    pub total: u8,
    pub prev_enabled: bool,
    /// One entry per page; `true` for the active position.
    pub dots: Vec<bool>,
    pub next: NextAffordance,
}

impl ChromeView {
    pub fn project(state: &NavigationState) -> Self {
        let current = state.current();
        Self {
            progress: f64::from(current.get()) / f64::from(TOTAL_PAGES),
            counter: current.to_string(),
            total: TOTAL_PAGES,
            prev_enabled: !current.is_first(),
            dots: PageNumber::all().map(|page| page == current).collect(),
            next: if current.is_last() {
                NextAffordance::Complete
            } else {
                NextAffordance::Advance
            },
        }
    }

    /// Progress as a whole percentage, for gauges.
    pub fn progress_percent(&self) -> u16 {
        (self.progress * 100.0).round() as u16
    }

    /// Zero-based index of the active dot.
    pub fn active_dot(&self) -> Option<usize> {
        self.dots.iter().position(|active| *active)
    }
}
