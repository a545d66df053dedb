use tracing::{debug, info, trace};

use crate::constants::LINE_CLEAR_BONUS;
use crate::error::GameError;
use crate::game::board::{Cell, Grid, RenderedGrid};
use crate::game::piece::Piece;
use crate::input::direction::Movement;

/// Top-left anchor of the active piece on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

impl Position {
    pub fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    fn shifted(self, (rows, columns): (i32, i32)) -> Self {
        Self {
            row: self.row + rows,
            column: self.column + columns,
        }
    }
}

/// Why a candidate placement is invalid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionType {
    None,
    Left,
    Right,
    Bottom,
    Block,
}

/// Outcome of a spawn attempt. `Paused` is reserved and never produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Success,
    GameOver,
    Paused,
}

#[derive(Clone, Debug)]
struct ActivePiece {
    piece: Piece,
    position: Position,
}

/// The occupancy grid plus the falling piece, its movement rules and the score.
#[derive(Clone, Debug)]
pub struct Playfield {
    grid: Grid,
    active: Option<ActivePiece>,
    score: u32,
}

impl Playfield {
    pub fn new(rows: usize, columns: usize) -> Result<Self, GameError> {
        if rows == 0 || columns == 0 {
            return Err(GameError::InvalidDimensions { rows, columns });
        }
        Ok(Self {
            grid: Grid::new(rows, columns),
            active: None,
            score: 0,
        })
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn active_piece(&self) -> Option<&Piece> {
        self.active.as_ref().map(|a| &a.piece)
    }

    pub fn active_position(&self) -> Option<Position> {
        self.active.as_ref().map(|a| a.position)
    }

    /// True iff the whole top row is empty.
    pub fn has_space_for_new_figure(&self) -> bool {
        self.grid.is_row_empty(0)
    }

    pub fn can_move_current_figure(&self) -> bool {
        self.active.is_some()
    }

    /// Places `piece` horizontally centered on row 0.
    ///
    /// A colliding spawn reports `GameOver` and leaves no active piece behind.
    pub fn spawn_figure(&mut self, piece: Piece) -> GameState {
        let column = (self.grid.columns() as i32 - piece.width() as i32) / 2;
        let position = Position::new(0, column);
        debug!(kind = ?piece.kind(), column, "spawning figure");

        if self.collision(position, &piece) != CollisionType::None {
            info!(kind = ?piece.kind(), score = self.score, "no space to spawn figure, game over");
            self.active = None;
            return GameState::GameOver;
        }

        self.active = Some(ActivePiece { piece, position });
        GameState::Success
    }

    pub fn handle_move(&mut self, direction: Movement) {
        let Some(active) = &self.active else {
            return;
        };

        if direction == Movement::Rotate {
            let rotated = active.piece.rotate();
            if self.collision(active.position, &rotated) == CollisionType::None {
                if let Some(active) = self.active.as_mut() {
                    active.piece = rotated;
                }
            } else {
                debug!(kind = ?rotated.kind(), "rotation blocked");
            }
            return;
        }

        let current = active.position;
        let candidate = current.shifted(direction.offset());
        match self.collision(candidate, &active.piece) {
            CollisionType::None => {
                trace!(row = candidate.row, column = candidate.column, "figure moved");
                if let Some(active) = self.active.as_mut() {
                    active.position = candidate;
                }
            }
            CollisionType::Left | CollisionType::Right => {
                debug!(?direction, "wall reached, moving down instead");
                self.handle_move(Movement::Down);
            }
            _ if direction == Movement::Down => self.lock(),
            collision => {
                trace!(?direction, ?collision, "move blocked");
            }
        }
    }

    /// Read-only projection of the grid with the active piece overlaid.
    pub fn render(&self) -> RenderedGrid {
        let mut cells: Vec<Vec<Cell>> = (0..self.grid.rows())
            .map(|row| {
                (0..self.grid.columns())
                    .map(|column| {
                        if self.grid.is_filled(row, column) {
                            Cell::Filled
                        } else {
                            Cell::Empty
                        }
                    })
                    .collect()
            })
            .collect();

        if let Some(active) = &self.active {
            for (row, column) in absolute_blocks(active) {
                if row < 0 || column < 0 {
                    continue;
                }
                if let Some(cell) = cells
                    .get_mut(row as usize)
                    .and_then(|line| line.get_mut(column as usize))
                {
                    *cell = Cell::Filled;
                }
            }
        }

        RenderedGrid::new(cells)
    }

    /// First violation in row-major scan order wins.
    fn collision(&self, position: Position, piece: &Piece) -> CollisionType {
        let rows = self.grid.rows() as i32;
        let columns = self.grid.columns() as i32;

        for (i, j) in piece.blocks() {
            let row = position.row + i as i32;
            let column = position.column + j as i32;

            if row < 0 {
                return CollisionType::Bottom;
            }
            if row >= rows {
                return CollisionType::Block;
            }
            if column < 0 {
                return CollisionType::Left;
            }
            if column >= columns {
                return CollisionType::Right;
            }
            if self.grid.is_filled(row as usize, column as usize) {
                return CollisionType::Block;
            }
        }
        CollisionType::None
    }

    fn lock(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        debug!(
            kind = ?active.piece.kind(),
            row = active.position.row,
            column = active.position.column,
            "locking figure"
        );

        for (row, column) in absolute_blocks(&active) {
            if row >= 0 && column >= 0 {
                self.grid.fill(row as usize, column as usize);
            }
        }

        let cleared = self.clear_full_rows();
        if cleared > 0 {
            debug!(cleared, score = self.score, "rows cleared on lock");
        }
    }

    /// Top-to-bottom; each clear compacts the rows above it, so rows below
    /// the scan point keep their indices.
    fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        for row in 0..self.grid.rows() {
            if self.grid.is_row_full(row) {
                self.grid.clear_row(row);
                self.score += LINE_CLEAR_BONUS;
                cleared += 1;
                info!(row, score = self.score, "row cleared");
            }
        }
        cleared
    }
}

fn absolute_blocks(active: &ActivePiece) -> impl Iterator<Item = (i32, i32)> + '_ {
    active.piece.blocks().map(move |(i, j)| {
        (
            active.position.row + i as i32,
            active.position.column + j as i32,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::catalog::create_figure;
    use crate::game::piece::ShapeKind;

    fn field(rows: usize, columns: usize) -> Playfield {
        Playfield::new(rows, columns).unwrap()
    }

    fn fill_row_except(field: &mut Playfield, row: usize, gaps: &[usize]) {
        for column in 0..field.columns() {
            if !gaps.contains(&column) {
                field.grid.fill(row, column);
            }
        }
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Playfield::new(0, 5).unwrap_err(),
            GameError::InvalidDimensions { rows: 0, columns: 5 }
        );
        assert!(Playfield::new(5, 0).is_err());
    }

    #[test]
    fn test_collision_kinds() {
        let field = field(4, 4);
        let square = create_figure(ShapeKind::Square);

        assert_eq!(field.collision(Position::new(0, 0), &square), CollisionType::None);
        assert_eq!(field.collision(Position::new(-1, 0), &square), CollisionType::Bottom);
        assert_eq!(field.collision(Position::new(3, 0), &square), CollisionType::Block);
        assert_eq!(field.collision(Position::new(0, -1), &square), CollisionType::Left);
        assert_eq!(field.collision(Position::new(0, 3), &square), CollisionType::Right);
    }

    #[test]
    fn test_collision_first_violation_wins() {
        let field = field(4, 4);
        let square = create_figure(ShapeKind::Square);

        // Left wall is met on the top row before the floor on the bottom row
        assert_eq!(field.collision(Position::new(3, -1), &square), CollisionType::Left);
        assert_eq!(field.collision(Position::new(-1, 3), &square), CollisionType::Bottom);
    }

    #[test]
    fn test_spawn_on_blocked_row_is_game_over_without_phantom() {
        let mut field = field(4, 4);
        field.grid.fill(0, 1);

        let state = field.spawn_figure(create_figure(ShapeKind::Square));

        assert_eq!(state, GameState::GameOver);
        assert!(!field.can_move_current_figure());
        assert!(!field.has_space_for_new_figure());
    }

    #[test]
    fn test_spawn_can_fail_below_an_empty_top_row() {
        let mut field = field(4, 4);
        field.grid.fill(2, 1);

        assert!(field.has_space_for_new_figure());
        assert_eq!(field.spawn_figure(create_figure(ShapeKind::L)), GameState::GameOver);
        assert_eq!(field.spawn_figure(create_figure(ShapeKind::Line)), GameState::Success);
    }

    #[test]
    fn test_lateral_block_is_a_no_op() {
        let mut field = field(6, 4);
        field.grid.fill(0, 0);
        field.spawn_figure(create_figure(ShapeKind::Square));
        assert_eq!(field.active_position(), Some(Position::new(0, 1)));

        field.handle_move(Movement::Left);

        assert_eq!(field.active_position(), Some(Position::new(0, 1)));
    }

    #[test]
    fn test_wall_turns_horizontal_move_into_down() {
        let mut field = field(6, 2);
        field.spawn_figure(create_figure(ShapeKind::Square));

        field.handle_move(Movement::Right);
        assert_eq!(field.active_position(), Some(Position::new(1, 0)));

        field.handle_move(Movement::Left);
        assert_eq!(field.active_position(), Some(Position::new(2, 0)));
    }

    #[test]
    fn test_wall_fallback_locks_at_floor() {
        let mut field = field(2, 2);
        field.spawn_figure(create_figure(ShapeKind::Square));

        field.handle_move(Movement::Left);

        assert!(!field.can_move_current_figure());
        // Two full rows cleared by the lock
        assert_eq!(field.score(), 20);
        assert!(field.grid().is_row_empty(0));
        assert!(field.grid().is_row_empty(1));
    }

    #[test]
    fn test_rotation_rejected_on_collision() {
        let mut field = field(3, 4);
        field.spawn_figure(create_figure(ShapeKind::Line));
        field.handle_move(Movement::Down);
        assert_eq!(field.active_position(), Some(Position::new(1, 0)));

        // Vertical line would need four rows
        field.handle_move(Movement::Rotate);

        let piece = field.active_piece().unwrap();
        assert_eq!((piece.height(), piece.width()), (1, 4));
    }

    #[test]
    fn test_rotation_applied_in_place() {
        let mut field = field(6, 6);
        field.spawn_figure(create_figure(ShapeKind::T));
        let position = field.active_position();

        field.handle_move(Movement::Rotate);

        let piece = field.active_piece().unwrap();
        assert_eq!((piece.height(), piece.width()), (3, 2));
        assert_eq!(field.active_position(), position);
    }

    #[test]
    fn test_lock_on_stack() {
        let mut field = field(4, 4);
        field.grid.fill(3, 1);
        field.spawn_figure(create_figure(ShapeKind::Square));

        field.handle_move(Movement::Down);
        assert_eq!(field.active_position(), Some(Position::new(1, 1)));
        field.handle_move(Movement::Down);

        assert!(!field.can_move_current_figure());
        assert!(field.grid().is_filled(1, 1));
        assert!(field.grid().is_filled(2, 2));
        assert_eq!(field.score(), 0);
    }

    #[test]
    fn test_separated_full_rows_all_cleared() {
        let mut field = field(5, 4);
        fill_row_except(&mut field, 2, &[0]);
        fill_row_except(&mut field, 4, &[0]);
        field.grid.fill(3, 3);
        field.grid.fill(1, 2);

        // Vertical line dropped into column 0 fills rows 1..=4
        field.spawn_figure(create_figure(ShapeKind::Line));
        field.handle_move(Movement::Rotate);
        assert_eq!(field.active_position(), Some(Position::new(0, 0)));
        field.handle_move(Movement::Down);
        field.handle_move(Movement::Down);

        assert!(!field.can_move_current_figure());
        assert_eq!(field.score(), 20);
        for row in 0..3 {
            assert!(field.grid().is_row_empty(row), "row {}", row);
        }
        assert!(field.grid().is_filled(3, 0));
        assert!(field.grid().is_filled(3, 2));
        assert!(field.grid().is_filled(4, 0));
        assert!(field.grid().is_filled(4, 3));
        assert!(!field.grid().is_filled(4, 1));
    }

    #[test]
    fn test_render_overlays_active_piece() {
        let mut field = field(3, 4);
        field.grid.fill(2, 0);
        field.spawn_figure(create_figure(ShapeKind::Square));

        let rendered = field.render();

        assert_eq!(rendered.get(0, 1), Some(Cell::Filled));
        assert_eq!(rendered.get(1, 2), Some(Cell::Filled));
        assert_eq!(rendered.get(2, 0), Some(Cell::Filled));
        assert_eq!(rendered.get(0, 0), Some(Cell::Empty));
        assert!(!field.grid().is_filled(0, 1));
    }
}
