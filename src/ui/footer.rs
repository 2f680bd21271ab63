use crate::ui::chrome::ChromeView;
use crate::ui::theme::{DISABLED, GLOBAL_BORDER, GOLD, MUTED_TEXT, TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

fn button<'a>(text: String, text_style: Style, border_style: Style) -> Paragraph<'a> {
    Paragraph::new(Line::from(Span::styled(text, text_style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        )
}

pub fn prev_widget(chrome: &ChromeView) -> Paragraph<'static> {
    let color = if chrome.prev_enabled { TEXT } else { DISABLED };
    button(
        "← Prev".to_string(),
        Style::default().fg(color),
        Style::default().fg(if chrome.prev_enabled { GLOBAL_BORDER } else { DISABLED }),
    )
}

pub fn next_widget(chrome: &ChromeView) -> Paragraph<'static> {
    let next = chrome.next;
    let (text_style, border_style) = if next.is_highlighted() {
        (
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            Style::default().fg(GOLD),
        )
    } else {
        (Style::default().fg(TEXT), Style::default().fg(GLOBAL_BORDER))
    };
    button(
        format!("{} {}", next.label(), next.icon()),
        text_style,
        border_style,
    )
}

/// One dot, filled when it marks the current page.
pub fn dot_widget(active: bool) -> Paragraph<'static> {
    let (symbol, style) = if active {
        ("●", Style::default().fg(GOLD))
    } else {
        ("○", Style::default().fg(MUTED_TEXT))
    };
    Paragraph::new(Span::styled(symbol, style)).alignment(Alignment::Center)
}
