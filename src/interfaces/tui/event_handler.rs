//! Event handling for TUI
//!
//! Presenter keys (quit, help) are handled here. Everything else is turned
//! into a `NavKey` and given to the navigator, which ignores what it does
//! not recognise.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, CurrentScreen};
use crate::navigator::NavKey;

/// Handle keyboard input based on current screen
///
/// Returns whether the presenter should exit.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    // Windows 会额外上报按键释放事件
    if key.kind != KeyEventKind::Press {
        return false;
    }

    match app.current_screen {
        CurrentScreen::Help => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                app.toggle_help();
            }
            false
        }
        CurrentScreen::Presenting => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
            KeyCode::Char('?') => {
                app.toggle_help();
                false
            }
            code => {
                app.press(&nav_key_from(code));
                false
            }
        },
    }
}

/// Name a terminal key the way a browser's `KeyboardEvent.code` would
pub fn nav_key_from(code: KeyCode) -> NavKey {
    match code {
        KeyCode::Char(' ') => NavKey::Space,
        KeyCode::Right => NavKey::ArrowRight,
        KeyCode::Left => NavKey::ArrowLeft,
        KeyCode::Up => NavKey::Other("ArrowUp".to_string()),
        KeyCode::Down => NavKey::Other("ArrowDown".to_string()),
        KeyCode::Enter => NavKey::Other("Enter".to_string()),
        KeyCode::Backspace => NavKey::Other("Backspace".to_string()),
        KeyCode::Tab => NavKey::Other("Tab".to_string()),
        KeyCode::Home => NavKey::Other("Home".to_string()),
        KeyCode::End => NavKey::Other("End".to_string()),
        KeyCode::PageUp => NavKey::Other("PageUp".to_string()),
        KeyCode::PageDown => NavKey::Other("PageDown".to_string()),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
            NavKey::Other(format!("Key{}", c.to_ascii_uppercase()))
        }
        KeyCode::Char(c) if c.is_ascii_digit() => NavKey::Other(format!("Digit{}", c)),
        other => NavKey::Other(format!("{:?}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_keys_map_to_dom_codes() {
        assert_eq!(nav_key_from(KeyCode::Char(' ')), NavKey::Space);
        assert_eq!(nav_key_from(KeyCode::Right), NavKey::ArrowRight);
        assert_eq!(nav_key_from(KeyCode::Left), NavKey::ArrowLeft);
    }

    #[test]
    fn test_other_keys_are_not_navigation() {
        for code in [
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::Enter,
            KeyCode::Char('n'),
            KeyCode::Char('7'),
            KeyCode::F(5),
        ] {
            let key = nav_key_from(code);
            assert!(matches!(key, NavKey::Other(_)), "{:?} -> {:?}", code, key);
        }
        assert_eq!(nav_key_from(KeyCode::Char('n')).code(), "KeyN");
        assert_eq!(nav_key_from(KeyCode::Char('7')).code(), "Digit7");
    }
}
