use crossterm::event::{KeyCode, KeyEventKind};

use crate::input::direction::Movement;

/// What the terminal front-end should do with a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Move(&'static str),
    Restart,
    Quit,
    Ignore,
}

/// Accepted console controls: A, S, D, W and space.
pub fn is_valid_control_input(input: &str) -> bool {
    matches!(input, "A" | "S" | "D" | "W" | " ")
}

/// Maps a key to its move token. Space and Enter drop the piece one row.
pub fn key_to_token(code: KeyCode) -> Option<&'static str> {
    let movement = match code {
        KeyCode::Left => Movement::Left,
        KeyCode::Right => Movement::Right,
        KeyCode::Down | KeyCode::Enter => Movement::Down,
        KeyCode::Up => Movement::Rotate,
        KeyCode::Char(' ') => Movement::Down,
        KeyCode::Char(c) => Movement::from_token(c.encode_utf8(&mut [0; 4]))?,
        _ => return None,
    };
    Some(movement.token())
}

pub fn handle_key(code: KeyCode, kind: KeyEventKind) -> KeyAction {
    if kind == KeyEventKind::Release {
        return KeyAction::Ignore;
    }

    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,
        _ => key_to_token(code).map_or(KeyAction::Ignore, KeyAction::Move),
    }
}
