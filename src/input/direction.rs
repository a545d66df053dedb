#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    Left,
    Right,
    Down,
    Rotate,
}

impl Movement {
    /// Maps a move token to a direction. Tokens are case-insensitive;
    /// anything other than A, D, S or W yields `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "A" => Some(Movement::Left),
            "D" => Some(Movement::Right),
            "S" => Some(Movement::Down),
            "W" => Some(Movement::Rotate),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Movement::Left => "A",
            Movement::Right => "D",
            Movement::Down => "S",
            Movement::Rotate => "W",
        }
    }

    /// `(row, column)` step for translating moves.
    pub(crate) fn offset(self) -> (i32, i32) {
        match self {
            Movement::Left => (0, -1),
            Movement::Right => (0, 1),
            Movement::Down => (1, 0),
            Movement::Rotate => (0, 0),
        }
    }
}
