use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid grid dimensions {rows}x{columns}: both must be positive")]
    InvalidDimensions { rows: usize, columns: usize },
}
