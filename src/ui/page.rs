//! Page bodies. Elements that have not made their entrance yet are drawn
//! dim, so staggered reveals read as a fade-in.

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::deck::PageContent;
use crate::ui::entrance::EntranceStyles;
use crate::ui::theme::{DISABLED, GOLD, MUTED_TEXT, ROSE, TEXT};

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
    ))
}

fn revealed(shown: bool) -> Style {
    if shown {
        Style::default().fg(TEXT)
    } else {
        Style::default().fg(DISABLED)
    }
}

pub fn page_lines(content: &PageContent, styles: &EntranceStyles) -> Vec<Line<'static>> {
    match content {
        PageContent::Cover { title, subtitle } => vec![
            Line::from(Span::styled("♥", Style::default().fg(ROSE))),
            Line::from(""),
            heading(title),
            Line::from(""),
            Line::from(Span::styled(subtitle.clone(), Style::default().fg(MUTED_TEXT))),
        ],
        PageContent::Photo { art, caption } => {
            let art_style = if styles.photo_emphasized() {
                Style::default().fg(ROSE).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED_TEXT)
            };
            let mut lines: Vec<Line<'static>> = art
                .iter()
                .map(|row| Line::from(Span::styled(row.clone(), art_style)))
                .collect();
            lines.push(Line::from(""));
            let caption_style = if styles.caption_shown() {
                Style::default().fg(TEXT).add_modifier(Modifier::ITALIC)
            } else {
                Style::default().fg(DISABLED)
            };
            lines.push(Line::from(Span::styled(caption.clone(), caption_style)));
            lines
        }
        PageContent::Messages { heading: title, cards } => {
            let mut lines = vec![heading(title), Line::from("")];
            for (index, card) in cards.iter().enumerate() {
                let style = revealed(styles.card_shown(index));
                lines.push(Line::from(Span::styled(
                    card.title.clone(),
                    style.add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(Span::styled(card.body.clone(), style)));
                lines.push(Line::from(""));
            }
            lines
        }
        PageContent::Memories { heading: title, items } => {
            let mut lines = vec![heading(title), Line::from("")];
            lines.extend(items.iter().enumerate().map(|(index, item)| {
                Line::from(Span::styled(
                    format!("✦ {item}"),
                    revealed(styles.memory_shown(index)),
                ))
            }));
            lines
        }
        PageContent::Closing { title, message } => vec![
            heading(title),
            Line::from(""),
            Line::from(Span::styled(message.clone(), Style::default().fg(TEXT))),
            Line::from(""),
            Line::from(Span::styled("♥ ♥ ♥", Style::default().fg(ROSE))),
        ],
    }
}

pub fn page_widget(content: &PageContent, styles: &EntranceStyles) -> Paragraph<'static> {
    Paragraph::new(page_lines(content, styles))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
}
