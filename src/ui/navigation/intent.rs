//! Intents for the navigation state machine.

use crate::deck::PageNumber;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationIntent {
    /// Startup display: show `page` immediately, no transition.
    Show(PageNumber),
    /// Accept a navigation request and hide every page.
    Begin(PageNumber),
    /// The reveal delay elapsed and the target page exists.
    Reveal,
    /// The reveal delay elapsed but the target page could not be found.
    /// Nothing becomes visible; the transition still settles.
    RevealMissing,
    /// The settle delay elapsed.
    Settle,
}

impl Intent for NavigationIntent {}
