//! Screen regions and the hit areas of the clickable controls.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::deck::PageNumber;
use crate::ui::overlay::ControlBounds;

const PREV_WIDTH: u16 = 12;
const NEXT_WIDTH: u16 = 14;
const AUDIO_WIDTH: u16 = 22;
const DOT_WIDTH: u16 = 3;

/// Header, page body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// A clickable control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Prev,
    Next,
    Dot(PageNumber),
    Audio,
}

/// Where each control sits for a given screen size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controls {
    pub progress: Rect,
    pub audio: Rect,
    pub prev: Rect,
    pub dots: Vec<(PageNumber, Rect)>,
    pub next: Rect,
}

impl Controls {
    pub fn for_area(area: Rect) -> Self {
        let (header, _, footer) = layout_regions(area);

        let header_split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(AUDIO_WIDTH)])
            .split(header);

        let footer_split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(PREV_WIDTH),
                Constraint::Min(0),
                Constraint::Length(NEXT_WIDTH),
            ])
            .split(footer);

        let dots_area = footer_split[1];
        let dots_width = DOT_WIDTH * u16::from(crate::deck::TOTAL_PAGES);
        let dots_x = dots_area.x + dots_area.width.saturating_sub(dots_width) / 2;
        let dots_y = dots_area.y + dots_area.height / 2;
        let dots = PageNumber::all()
            .map(|page| {
                let offset = DOT_WIDTH * u16::try_from(page.index()).unwrap_or(0);
                let rect = Rect {
                    x: dots_x + offset,
                    y: dots_y,
                    width: DOT_WIDTH,
                    height: dots_area.height.min(1),
                }
                .intersection(dots_area);
                (page, rect)
            })
            .collect();

        Self {
            progress: header_split[0],
            audio: header_split[1],
            prev: footer_split[0],
            dots,
            next: footer_split[2],
        }
    }

    /// The control under `(column, row)` and its rectangle.
    pub fn hit(&self, column: u16, row: u16) -> Option<(Control, Rect)> {
        let fixed = [
            (Control::Prev, self.prev),
            (Control::Next, self.next),
            (Control::Audio, self.audio),
        ];
        fixed
            .into_iter()
            .chain(self.dots.iter().map(|(page, rect)| (Control::Dot(*page), *rect)))
            .find(|(_, rect)| contains(*rect, column, row))
    }
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && row >= rect.y
        && u32::from(column) < u32::from(rect.x) + u32::from(rect.width)
        && u32::from(row) < u32::from(rect.y) + u32::from(rect.height)
}

pub fn bounds(rect: Rect) -> ControlBounds {
    ControlBounds {
        x: rect.x,
        y: rect.y,
        width: rect.width,
        height: rect.height,
    }
}

pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
