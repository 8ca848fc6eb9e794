//! TUI event handling.
//!
//! This module converts terminal events (key presses, mouse clicks) into
//! actions.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use lumiq_core::PickerKey;

use super::action::Action;

/// Map a key event to an action based on current state.
pub fn map_key_event(key: KeyEvent, help_visible: bool, picker_open: bool) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    if help_visible {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') | KeyCode::F(1) => Action::ToggleHelp,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Char('q' | 'Q') => Action::Quit,
        KeyCode::Char('?') | KeyCode::F(1) => Action::ToggleHelp,

        // esc closes the list first, then leaves
        KeyCode::Esc if picker_open => Action::Picker(PickerKey::Escape),
        KeyCode::Esc => Action::Quit,

        KeyCode::Enter => Action::Picker(PickerKey::Enter),
        KeyCode::Up | KeyCode::Char('k') => Action::Picker(PickerKey::Up),
        KeyCode::Down | KeyCode::Char('j') => Action::Picker(PickerKey::Down),
        KeyCode::Left => Action::Picker(PickerKey::Left),
        KeyCode::Right => Action::Picker(PickerKey::Right),
        KeyCode::Home => Action::Picker(PickerKey::Home),
        KeyCode::End => Action::Picker(PickerKey::End),

        KeyCode::Char(c) if picker_open && c.is_ascii_digit() => {
            digit_index(c).map_or(Action::None, Action::SelectIndex)
        }

        KeyCode::Char(c) => PickerKey::from_char(c).map_or(Action::None, Action::Picker),

        _ => Action::None,
    }
}

/// Map a mouse event to an action.
pub fn map_mouse_event(mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Action::Click {
            column: mouse.column,
            row: mouse.row,
        },
        MouseEventKind::ScrollUp => Action::Picker(PickerKey::Up),
        MouseEventKind::ScrollDown => Action::Picker(PickerKey::Down),
        _ => Action::None,
    }
}

/// `1`..`9` pick the first nine themes, `0` the tenth.
fn digit_index(c: char) -> Option<usize> {
    let digit = c.to_digit(10)? as usize;
    Some(if digit == 0 { 9 } else { digit - 1 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_and_space_reach_picker() {
        assert_eq!(
            map_key_event(press(KeyCode::Enter), false, false),
            Action::Picker(PickerKey::Enter)
        );
        assert_eq!(
            map_key_event(press(KeyCode::Char(' ')), false, true),
            Action::Picker(PickerKey::Space)
        );
    }

    #[test]
    fn test_escape_closes_before_quitting() {
        assert_eq!(
            map_key_event(press(KeyCode::Esc), false, true),
            Action::Picker(PickerKey::Escape)
        );
        assert_eq!(map_key_event(press(KeyCode::Esc), false, false), Action::Quit);
    }

    #[test]
    fn test_help_swallows_keys() {
        assert_eq!(map_key_event(press(KeyCode::Enter), true, false), Action::None);
        assert_eq!(
            map_key_event(press(KeyCode::Esc), true, true),
            Action::ToggleHelp
        );
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key_event(key, true, true), Action::Quit);
    }

    #[test]
    fn test_digits_only_while_open() {
        assert_eq!(
            map_key_event(press(KeyCode::Char('3')), false, true),
            Action::SelectIndex(2)
        );
        assert_eq!(
            map_key_event(press(KeyCode::Char('0')), false, true),
            Action::SelectIndex(9)
        );
        assert_eq!(
            map_key_event(press(KeyCode::Char('3')), false, false),
            Action::None
        );
    }

    #[test]
    fn test_dark_shortcut() {
        assert_eq!(
            map_key_event(press(KeyCode::Char('d')), false, false),
            Action::Picker(PickerKey::DarkModeShortcut)
        );
    }

    #[test]
    fn test_left_click() {
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 7,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(map_mouse_event(mouse), Action::Click { column: 4, row: 7 });
    }
}
