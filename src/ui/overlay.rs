//! Transient elements drawn over the page: tap ripples, notices and the
//! swipe hint. Their lifetimes are timeline cues scheduled by the owner.

use std::fmt;

/// Identifier of a ripple or notice, unique for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OverlayId(u64);

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Screen rectangle of a pressed control, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlBounds {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// Press feedback anchored at the interaction point.
///
/// `left`/`top` are relative to the control and may be negative: the
/// ripple is a square of the control's larger side centred on the press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ripple {
    pub id: OverlayId,
    pub control: ControlBounds,
    pub size: u16,
    pub left: i32,
    pub top: i32,
}

impl Ripple {
    /// Absolute cell at the centre of the ripple.
    pub fn center(&self) -> (i32, i32) {
        let half = i32::from(self.size) / 2;
        (
            i32::from(self.control.x) + self.left + half,
            i32::from(self.control.y) + self.top + half,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: OverlayId,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlays {
    next_id: u64,
    ripples: Vec<Ripple>,
    notices: Vec<Notice>,
    swipe_hint_visible: bool,
}

impl Default for Overlays {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Overlays {
    pub fn new(swipe_hint_visible: bool) -> Self {
        Self {
            next_id: 0,
            ripples: Vec::new(),
            notices: Vec::new(),
            swipe_hint_visible,
        }
    }

    /// Add a ripple for a press at `(column, row)` on `control`.
    pub fn spawn_ripple(&mut self, control: ControlBounds, column: u16, row: u16) -> OverlayId {
        let id = self.allocate();
        let size = control.width.max(control.height);
        let half = i32::from(size) / 2;
        self.ripples.push(Ripple {
            id,
            control,
            size,
            left: i32::from(column) - i32::from(control.x) - half,
            top: i32::from(row) - i32::from(control.y) - half,
        });
        id
    }

    pub fn expire_ripple(&mut self, id: OverlayId) {
        self.ripples.retain(|ripple| ripple.id != id);
    }

    pub fn post_notice(&mut self, message: impl Into<String>) -> OverlayId {
        let id = self.allocate();
        self.notices.push(Notice {
            id,
            message: message.into(),
        });
        id
    }

    pub fn expire_notice(&mut self, id: OverlayId) {
        self.notices.retain(|notice| notice.id != id);
    }

    pub fn hide_swipe_hint(&mut self) {
        self.swipe_hint_visible = false;
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn swipe_hint_visible(&self) -> bool {
        self.swipe_hint_visible
    }

    fn allocate(&mut self) -> OverlayId {
        let id = OverlayId(self.next_id);
        self.next_id += 1;
        id
    }
}
