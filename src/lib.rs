//! Falling-block puzzle engine.
//!
//! The engine owns the grid, the falling piece, collision, rotation,
//! row clearing and scoring. Presentation layers drive a [`GameSession`]
//! with move tokens and draw the [`RenderedGrid`] it hands back.

pub mod constants;
pub mod error;
pub mod game;
pub mod input;

pub use error::GameError;
pub use game::{
    create_figure, create_random_figure, Cell, CollisionType, GameSession, GameState, Grid,
    Piece, Playfield, Position, RenderedGrid, ShapeKind,
};
pub use input::Movement;
