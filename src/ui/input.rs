use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::deck::PageNumber;
use crate::ui::app::App;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Next,
    Prev,
    GoTo(PageNumber),
    ToggleAudio,
    Quit,
}

pub fn key_action(key: KeyEvent) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if is_ctrl_char(key, 'c') {
        return Some(KeyAction::Quit);
    }

    match key.code {
        KeyCode::Right | KeyCode::Char(' ') => Some(KeyAction::Next),
        KeyCode::Left => Some(KeyAction::Prev),
        KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'q') => Some(KeyAction::Quit),
        KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'p') => Some(KeyAction::ToggleAudio),
        KeyCode::Char(ch) => ch
            .to_digit(10)
            .and_then(|digit| u8::try_from(digit).ok())
            .and_then(PageNumber::new)
            .map(KeyAction::GoTo),
        _ => None,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    let Some(action) = key_action(key) else {
        return;
    };
    tracing::trace!(?action, "Key action");

    match action {
        KeyAction::Next => {
            app.next_page();
        }
        KeyAction::Prev => {
            app.prev_page();
        }
        KeyAction::GoTo(page) => {
            app.go_to_page(page);
        }
        KeyAction::ToggleAudio => {
            app.toggle_audio();
        }
        KeyAction::Quit => app.request_quit(),
    }
}

/// Mouse input drives both the controls and the pointer gesture stream.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.on_pointer_down(mouse.column, mouse.row),
        MouseEventKind::Drag(MouseButton::Left) => app.on_pointer_drag(mouse.column, mouse.row),
        MouseEventKind::Up(MouseButton::Left) => app.on_pointer_up(mouse.column, mouse.row),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(key_action(press(KeyCode::Right)), Some(KeyAction::Next));
        assert_eq!(key_action(press(KeyCode::Char(' '))), Some(KeyAction::Next));
        assert_eq!(key_action(press(KeyCode::Left)), Some(KeyAction::Prev));
        assert_eq!(
            key_action(press(KeyCode::Char('4'))),
            PageNumber::new(4).map(KeyAction::GoTo)
        );
    }

    #[test]
    fn digits_outside_the_deck_are_ignored() {
        assert_eq!(key_action(press(KeyCode::Char('0'))), None);
        assert_eq!(key_action(press(KeyCode::Char('9'))), None);
        assert_eq!(key_action(press(KeyCode::Up)), None);
    }

    #[test]
    fn quit_and_audio_keys() {
        assert_eq!(key_action(press(KeyCode::Char('P'))), Some(KeyAction::ToggleAudio));
        assert_eq!(key_action(press(KeyCode::Esc)), Some(KeyAction::Quit));
        assert_eq!(
            key_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
        assert_eq!(key_action(press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut key = press(KeyCode::Right);
        key.kind = KeyEventKind::Release;
        assert_eq!(key_action(key), None);
    }
}
