use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::error::GameError;
use crate::game::board::RenderedGrid;
use crate::game::catalog::create_random_figure;
use crate::game::playfield::{GameState, Playfield};
use crate::input::direction::Movement;

/// One game: a playfield plus the randomness source feeding it new pieces.
///
/// Calls must be serialized by the caller; nothing here blocks or does I/O.
pub struct GameSession<R = StdRng> {
    field: Playfield,
    rng: R,
}

impl GameSession<StdRng> {
    /// A session drawing pieces from an entropy-seeded generator.
    pub fn new(rows: usize, columns: usize) -> Result<Self, GameError> {
        Self::with_rng(rows, columns, StdRng::from_entropy())
    }

    /// A session with a reproducible piece sequence.
    pub fn seeded(rows: usize, columns: usize, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(rows, columns, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSession<R> {
    pub fn with_rng(rows: usize, columns: usize, rng: R) -> Result<Self, GameError> {
        Ok(Self {
            field: Playfield::new(rows, columns)?,
            rng,
        })
    }

    pub fn playfield(&self) -> &Playfield {
        &self.field
    }

    pub fn start_game(&mut self) -> RenderedGrid {
        if !self.field.has_space_for_new_figure() {
            return RenderedGrid::game_over();
        }
        if self.spawn_random_figure() == GameState::GameOver {
            return RenderedGrid::game_over();
        }
        self.field.render()
    }

    /// Applies one move token ("A", "D", "S", "W"). Unknown tokens only re-render.
    pub fn move_figure(&mut self, token: &str) -> RenderedGrid {
        let Some(direction) = Movement::from_token(token) else {
            return self.field.render();
        };

        self.field.handle_move(direction);

        if !self.field.can_move_current_figure()
            && self.spawn_random_figure() == GameState::GameOver
        {
            return RenderedGrid::game_over();
        }

        self.field.render()
    }

    pub fn score(&self) -> u32 {
        self.field.score()
    }

    /// Top row of the grid is occupied. May report true while a piece is
    /// still falling; treat it as advisory until the next lock.
    pub fn is_game_over(&self) -> bool {
        !self.field.has_space_for_new_figure()
    }

    fn spawn_random_figure(&mut self) -> GameState {
        let figure = create_random_figure(&mut self.rng);
        let state = self.field.spawn_figure(figure);
        if state == GameState::GameOver {
            info!(score = self.field.score(), "game over");
        }
        state
    }
}
