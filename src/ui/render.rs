use crate::ui::app::App;
use crate::ui::footer::{dot_widget, next_widget, prev_widget};
use crate::ui::header::{audio_widget, progress_widget};
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::overlay::Ripple;
use crate::ui::page::page_widget;
use crate::ui::theme::{MUTED_TEXT, NOTICE_BORDER, RIPPLE, TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const SWIPE_HINT: &str = "← swipe or use the arrow keys →";
const NOTICE_WIDTH: u16 = 36;
/// Width of the content column inside the page body.
const PAGE_WIDTH: u16 = 64;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (_, body, _) = layout_regions(area);
    let controls = app.controls();
    let chrome = app.controller().chrome();

    frame.render_widget(progress_widget(&chrome), controls.progress);
    let equalizer_frame = (app.now().as_millis() / 150) as u64;
    frame.render_widget(
        audio_widget(app.audio_state().presentation(), equalizer_frame),
        controls.audio,
    );

    draw_ripples(frame, app.overlays().ripples(), area);

    frame.render_widget(Clear, body);
    let state = app.controller().state();
    if let Some(page) = state.visible() {
        let content = app.controller().deck().get(page);
        let styles = app.controller().styles(page);
        if let (Some(content), Some(styles)) = (content, styles) {
            let height = body.height.saturating_sub(2);
            let page_area = centered_rect_by_size(body, PAGE_WIDTH, height);
            frame.render_widget(page_widget(content, styles), page_area);
        }
    }

    if app.overlays().swipe_hint_visible() && body.height > 0 {
        let hint = Rect {
            y: body.y + body.height - 1,
            height: 1,
            ..body
        };
        frame.render_widget(
            Paragraph::new(Span::styled(SWIPE_HINT, Style::default().fg(MUTED_TEXT)))
                .alignment(Alignment::Center),
            hint,
        );
    }

    frame.render_widget(prev_widget(&chrome), controls.prev);
    frame.render_widget(next_widget(&chrome), controls.next);
    for ((_, rect), active) in controls.dots.iter().zip(chrome.dots.iter()) {
        frame.render_widget(dot_widget(*active), *rect);
    }

    draw_notices(frame, app, body);
}

/// Ripples tint the cells they cover before the controls draw over them.
fn draw_ripples(frame: &mut Frame<'_>, ripples: &[Ripple], area: Rect) {
    for ripple in ripples {
        let control = Rect {
            x: ripple.control.x,
            y: ripple.control.y,
            width: ripple.control.width,
            height: ripple.control.height,
        };
        let left = i32::from(ripple.control.x) + ripple.left;
        let top = i32::from(ripple.control.y) + ripple.top;
        let x = left.max(0) as u16;
        let y = top.max(0) as u16;
        let right = (left + i32::from(ripple.size)).max(0) as u16;
        let bottom = (top + i32::from(ripple.size)).max(0) as u16;
        let tinted = Rect {
            x,
            y,
            width: right.saturating_sub(x),
            height: bottom.saturating_sub(y),
        }
        .intersection(control)
        .intersection(area);
        if tinted.width > 0 && tinted.height > 0 {
            frame.render_widget(Block::default().style(Style::default().bg(RIPPLE)), tinted);
        }
    }
}

/// Notices stack from the top-right corner of the body, newest last.
fn draw_notices(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let width = NOTICE_WIDTH.min(body.width);
    let mut y = body.y;
    for notice in app.overlays().notices() {
        if y + 3 > body.y + body.height {
            break;
        }
        let rect = Rect {
            x: body.x + body.width - width,
            y,
            width,
            height: 3,
        };
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                notice.message.clone(),
                Style::default().fg(TEXT),
            )))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(NOTICE_BORDER)),
            ),
            rect,
        );
        y += 3;
    }
}
