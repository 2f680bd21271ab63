//! Pages of the presentation.
//!
//! [`PageNumber`] is the only way to name a page; it is always inside
//! `1..=TOTAL_PAGES`. [`Deck`] maps each page number to the content drawn
//! for it.

mod content;

pub use content::{Deck, MessageCard, PageContent};

use std::fmt;

/// Number of pages in the presentation.
pub const TOTAL_PAGES: u8 = 5;

/// 1-based page number, guaranteed to be within `1..=TOTAL_PAGES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(u8);

impl PageNumber {
    /// Returns `None` when `value` is outside `1..=TOTAL_PAGES`.
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (1..=TOTAL_PAGES).contains(&value).then_some(Self(value))
    }

    #[must_use]
    pub const fn first() -> Self {
        Self(1)
    }

    #[must_use]
    pub const fn last() -> Self {
        Self(TOTAL_PAGES)
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based position of the page.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    #[must_use]
    pub fn is_first(self) -> bool {
        self == Self::first()
    }

    #[must_use]
    pub fn is_last(self) -> bool {
        self == Self::last()
    }

    /// The following page, or `None` on the last page.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    /// The preceding page, or `None` on the first page.
    #[must_use]
    pub fn prev(self) -> Option<Self> {
        self.0.checked_sub(1).and_then(Self::new)
    }

    /// Every page in order.
    pub fn all() -> impl Iterator<Item = PageNumber> {
        (1..=TOTAL_PAGES).map(Self)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::first()
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
