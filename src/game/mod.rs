pub mod board;
pub mod catalog;
pub mod piece;
pub mod playfield;
pub mod state;

pub use board::{Cell, Grid, RenderedGrid};
pub use catalog::{create_figure, create_random_figure};
pub use piece::{Piece, ShapeKind};
pub use playfield::{CollisionType, GameState, Playfield, Position};
pub use state::GameSession;
