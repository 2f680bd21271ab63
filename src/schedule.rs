//! Delayed work for the event loop.
//!
//! Every delay in the presentation (page reveal, settle, entrance effects,
//! overlay lifetimes) is a [`Cue`] stored on a [`Timeline`]. The timeline
//! keeps its own notion of "now"; the event loop advances it from the wall
//! clock while tests advance it by hand, so ordering can be checked without
//! sleeping.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

use crate::deck::PageNumber;
use crate::ui::entrance::EntranceEffect;
use crate::ui::overlay::OverlayId;

/// Work scheduled on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Second half of a page transition: show the target page.
    RevealPage(PageNumber),
    /// End of a page transition: accept navigation again.
    Settle,
    /// One step of a page's entrance animation.
    Entrance {
        page: PageNumber,
        effect: EntranceEffect,
    },
    ExpireRipple(OverlayId),
    ExpireNotice(OverlayId),
    HideSwipeHint,
}

#[derive(Debug)]
struct Entry<A> {
    due: Duration,
    /// Insertion order; breaks ties between entries due at the same instant.
    seq: u64,
    action: A,
}

impl<A> PartialEq for Entry<A> {
    fn eq(&self, other: &Self) -> bool {
        (self.due, self.seq) == (other.due, other.seq)
    }
}

impl<A> Eq for Entry<A> {}

impl<A> PartialOrd for Entry<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A> Ord for Entry<A> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due, self.seq).cmp(&(other.due, other.seq))
    }
}

/// Ordered queue of actions due at offsets from the timeline start.
#[derive(Debug)]
pub struct Timeline<A> {
    now: Duration,
    next_seq: u64,
    pending: BinaryHeap<Reverse<Entry<A>>>,
}

impl<A> Default for Timeline<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Timeline<A> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            pending: BinaryHeap::new(),
        }
    }

    /// Current position of the timeline.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `action` to become due `delay` after the current instant.
    pub fn schedule(&mut self, delay: Duration, action: A) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Reverse(Entry {
            due: self.now + delay,
            seq,
            action,
        }));
    }

    /// Pop the earliest action due at or before `until`, moving "now" to its
    /// due instant. Returns `None` and moves "now" to `until` once nothing
    /// else is due.
    ///
    /// Callers loop on this so that actions scheduled while handling a due
    /// action are still picked up in order within the same advance.
    pub fn pop_due(&mut self, until: Duration) -> Option<A> {
        let is_due = self
            .pending
            .peek()
            .is_some_and(|Reverse(entry)| entry.due <= until);
        if !is_due {
            self.now = self.now.max(until);
            return None;
        }
        let Reverse(entry) = self.pending.pop()?;
        self.now = self.now.max(entry.due);
        Some(entry.action)
    }

    /// Offset from now until the next pending action, if any.
    pub fn next_due_in(&self) -> Option<Duration> {
        self.pending
            .peek()
            .map(|Reverse(entry)| entry.due.saturating_sub(self.now))
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
