//! Terminal event handling
//!
//! Calculator input is button-only: a left click over a keypad button
//! presses it. The keyboard is used solely to quit.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::keypad::{ButtonAction, Keypad};

/// What a terminal event asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Press a keypad button
    Press(ButtonAction),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Maps terminal events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps one event, hit testing clicks against the keypad drawn in `keypad_area`
    #[must_use]
    pub fn handle_event(&self, event: &Event, keypad: &Keypad, keypad_area: Rect) -> InputAction {
        match event {
            Event::Key(key) => Self::handle_key(key),
            Event::Mouse(mouse) => Self::handle_mouse(mouse, keypad, keypad_area),
            _ => InputAction::None,
        }
    }

    fn handle_key(key: &KeyEvent) -> InputAction {
        if key.kind != KeyEventKind::Press {
            return InputAction::None;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                InputAction::Quit
            }
            KeyCode::Char('q') | KeyCode::Esc => InputAction::Quit,
            _ => InputAction::None,
        }
    }

    fn handle_mouse(mouse: &MouseEvent, keypad: &Keypad, keypad_area: Rect) -> InputAction {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return InputAction::None;
        }
        keypad
            .hit_test(keypad_area, mouse.column, mouse.row)
            .and_then(|idx| keypad.get_button(idx))
            .map_or(InputAction::None, |btn| InputAction::Press(btn.action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Digit, Operator};

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 14,
        height: 12,
    };

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn click(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn handle(event: &Event) -> InputAction {
        InputHandler::new().handle_event(event, &Keypad::new(), AREA)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(handle(&key(KeyCode::Char('q'), KeyModifiers::NONE)), InputAction::Quit);
        assert_eq!(handle(&key(KeyCode::Esc, KeyModifiers::NONE)), InputAction::Quit);
        assert_eq!(
            handle(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            InputAction::Quit
        );
    }

    #[test]
    fn test_calculator_keys_are_ignored() {
        for code in [
            KeyCode::Char('5'),
            KeyCode::Char('+'),
            KeyCode::Char('c'),
            KeyCode::Enter,
            KeyCode::Backspace,
        ] {
            assert_eq!(handle(&key(code, KeyModifiers::NONE)), InputAction::None);
        }
    }

    #[test]
    fn test_key_release_ignored() {
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(handle(&Event::Key(release)), InputAction::None);
    }

    #[test]
    fn test_left_click_presses_button() {
        // Inner area starts at (1, 1); cells are 3x2
        let event = click(MouseEventKind::Down(MouseButton::Left), 1, 3);
        assert_eq!(
            handle(&event),
            InputAction::Press(ButtonAction::Digit(Digit::new(7).unwrap()))
        );

        let event = click(MouseEventKind::Down(MouseButton::Left), 10, 1);
        assert_eq!(
            handle(&event),
            InputAction::Press(ButtonAction::Operator(Operator::Multiply))
        );
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        for kind in [
            MouseEventKind::Down(MouseButton::Right),
            MouseEventKind::Up(MouseButton::Left),
            MouseEventKind::Moved,
            MouseEventKind::ScrollDown,
        ] {
            assert_eq!(handle(&click(kind, 1, 3)), InputAction::None);
        }
    }

    #[test]
    fn test_click_outside_keypad_ignored() {
        let event = click(MouseEventKind::Down(MouseButton::Left), 0, 0);
        assert_eq!(handle(&event), InputAction::None);
    }

    #[test]
    fn test_resize_ignored() {
        assert_eq!(handle(&Event::Resize(80, 24)), InputAction::None);
    }
}
