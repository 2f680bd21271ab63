use crate::ui::audio::AudioPresentation;
use crate::ui::chrome::ChromeView;
use crate::ui::theme::{GLOBAL_BORDER, GOLD, MUTED_TEXT, TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

/// Progress gauge with the page counter as its label.
pub fn progress_widget(chrome: &ChromeView) -> Gauge<'static> {
    Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .gauge_style(Style::default().fg(GOLD))
        .ratio(chrome.progress.clamp(0.0, 1.0))
        .label(Span::styled(
            format!("{} / {}", chrome.counter, chrome.total),
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        ))
}

/// The audio toggle button. Bars next to the label stand in for the
/// equalizer and only light up while playing.
pub fn audio_widget(presentation: AudioPresentation, frame_count: u64) -> Paragraph<'static> {
    let (text_style, border_style) = if presentation.highlighted {
        (
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            Style::default().fg(GOLD),
        )
    } else {
        (Style::default().fg(TEXT), Style::default().fg(GLOBAL_BORDER))
    };

    let mut spans = vec![
        Span::styled(format!(" {} ", presentation.icon), text_style),
        Span::styled(presentation.label, text_style),
    ];
    if presentation.equalizer_active {
        spans.push(Span::styled(
            format!(" {}", equalizer_bars(frame_count)),
            Style::default().fg(GOLD),
        ));
    } else {
        spans.push(Span::styled(" ▁▁▁", Style::default().fg(MUTED_TEXT)));
    }

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    )
}

fn equalizer_bars(frame_count: u64) -> String {
    const LEVELS: [char; 6] = ['▁', '▃', '▅', '▇', '▅', '▃'];
    (0..3u64)
        .map(|bar| LEVELS[((frame_count + bar * 2) % LEVELS.len() as u64) as usize])
        .collect()
}
