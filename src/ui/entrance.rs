//! Staggered entrance animations.
//!
//! When a page becomes visible through a transition, [`plan`] lists the
//! style changes to apply and when, relative to the instant the page was
//! shown. The table is closed: only pages 2, 3 and 4 animate.
//! [`EntranceStyles`] holds the result of those changes for one page.

use std::time::Duration;

use crate::deck::{PageContent, PageNumber};

/// Emphasis on the photo of page 2.
pub const PHOTO_EMPHASIS_OFFSET: Duration = Duration::from_millis(400);
/// Caption overlay of page 2.
pub const CAPTION_OFFSET: Duration = Duration::from_millis(600);
/// Gap between two message cards on page 3.
pub const CARD_STAGGER: Duration = Duration::from_millis(200);
/// Gap between two memory items on page 4.
pub const MEMORY_STAGGER: Duration = Duration::from_millis(150);

/// A single style change on a page element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntranceEffect {
    /// Scale and brighten the photo.
    EmphasizePhoto,
    /// Fade and slide the caption overlay in.
    RevealCaption,
    /// Bring the message card at this zero-based position to rest.
    RevealCard(usize),
    /// Slide the memory item at this zero-based position in.
    RevealMemory(usize),
}

/// An effect together with its offset from page-visible time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntranceStep {
    pub offset: Duration,
    pub effect: EntranceEffect,
}

/// Entrance steps for `page`, given the content it currently shows.
///
/// Card and item counts are read from `content`; a page without content
/// still gets its fixed photo steps, which later land on nothing.
pub fn plan(page: PageNumber, content: Option<&PageContent>) -> Vec<EntranceStep> {
    match page.get() {
        2 => vec![
            EntranceStep {
                offset: PHOTO_EMPHASIS_OFFSET,
                effect: EntranceEffect::EmphasizePhoto,
            },
            EntranceStep {
                offset: CAPTION_OFFSET,
                effect: EntranceEffect::RevealCaption,
            },
        ],
        3 => staggered(
            content.map_or(0, PageContent::card_count),
            CARD_STAGGER,
            EntranceEffect::RevealCard,
        ),
        4 => staggered(
            content.map_or(0, PageContent::memory_count),
            MEMORY_STAGGER,
            EntranceEffect::RevealMemory,
        ),
        _ => Vec::new(),
    }
}

fn staggered(
    count: usize,
    stagger: Duration,
    effect: impl Fn(usize) -> EntranceEffect,
) -> Vec<EntranceStep> {
    (0..count)
        .map(|index| EntranceStep {
            offset: stagger * index as u32,
            effect: effect(index),
        })
        .collect()
}

/// Applied entrance styles of one page.
///
/// Styles stay applied once set; revisiting a page replays the same
/// effects over an already revealed page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntranceStyles {
    has_photo: bool,
    photo_emphasized: bool,
    caption_shown: bool,
    cards_shown: Vec<bool>,
    memories_shown: Vec<bool>,
}

impl EntranceStyles {
    /// Resting styles for the elements `content` contains.
    pub fn for_content(content: Option<&PageContent>) -> Self {
        Self {
            has_photo: content.is_some_and(PageContent::has_photo),
            photo_emphasized: false,
            caption_shown: false,
            cards_shown: vec![false; content.map_or(0, PageContent::card_count)],
            memories_shown: vec![false; content.map_or(0, PageContent::memory_count)],
        }
    }

    /// Apply `effect`. Returns `false` when the page has no such element.
    pub fn apply(&mut self, effect: EntranceEffect) -> bool {
        match effect {
            EntranceEffect::EmphasizePhoto if self.has_photo => {
                self.photo_emphasized = true;
                true
            }
            EntranceEffect::RevealCaption if self.has_photo => {
                self.caption_shown = true;
                true
            }
            EntranceEffect::EmphasizePhoto | EntranceEffect::RevealCaption => false,
            EntranceEffect::RevealCard(index) => reveal(&mut self.cards_shown, index),
            EntranceEffect::RevealMemory(index) => reveal(&mut self.memories_shown, index),
        }
    }

    pub fn photo_emphasized(&self) -> bool {
        self.photo_emphasized
    }

    pub fn caption_shown(&self) -> bool {
        self.caption_shown
    }

    pub fn card_shown(&self, index: usize) -> bool {
        self.cards_shown.get(index).copied().unwrap_or(false)
    }

    pub fn memory_shown(&self, index: usize) -> bool {
        self.memories_shown.get(index).copied().unwrap_or(false)
    }
}

fn reveal(flags: &mut [bool], index: usize) -> bool {
    match flags.get_mut(index) {
        Some(flag) => {
            *flag = true;
            true
        }
        None => false,
    }
}
