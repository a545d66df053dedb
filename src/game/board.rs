use std::fmt;

use crate::constants::{
    EMPTY_GLYPH, FILLED_GLYPH, GAME_OVER_COLUMNS, GAME_OVER_GLYPH, GAME_OVER_MARKER_COLUMNS,
    GAME_OVER_MARKER_ROW, GAME_OVER_ROWS,
};

/// Display token for one rendered cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Filled,
    GameOver,
}

impl Cell {
    pub fn glyph(self) -> &'static str {
        match self {
            Cell::Empty => EMPTY_GLYPH,
            Cell::Filled => FILLED_GLYPH,
            Cell::GameOver => GAME_OVER_GLYPH,
        }
    }
}

/// Fixed-size occupancy grid. Dimensions never change after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Vec<bool>>,
}

impl Grid {
    pub(crate) fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![vec![false; columns]; rows],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Out-of-range coordinates read as empty.
    pub fn is_filled(&self, row: usize, column: usize) -> bool {
        self.cells
            .get(row)
            .and_then(|r| r.get(column))
            .copied()
            .unwrap_or(false)
    }

    pub(crate) fn fill(&mut self, row: usize, column: usize) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(column)) {
            *cell = true;
        }
    }

    pub fn is_row_empty(&self, row: usize) -> bool {
        self.cells.get(row).map_or(true, |r| r.iter().all(|&c| !c))
    }

    pub fn is_row_full(&self, row: usize) -> bool {
        self.cells.get(row).map_or(false, |r| r.iter().all(|&c| c))
    }

    /// Zeroes `row`, shifts every row above it down by one and clears the top row.
    pub(crate) fn clear_row(&mut self, row: usize) {
        if row >= self.rows {
            return;
        }
        self.cells[row].fill(false);
        for i in (1..=row).rev() {
            let (above, below) = self.cells.split_at_mut(i);
            below[0].copy_from_slice(&above[i - 1]);
        }
        self.cells[0].fill(false);
    }
}

/// Row-major display grid handed to presentation collaborators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedGrid {
    cells: Vec<Vec<Cell>>,
}

impl RenderedGrid {
    pub(crate) fn new(cells: Vec<Vec<Cell>>) -> Self {
        Self { cells }
    }

    /// The fixed banner shown once a game has ended.
    pub fn game_over() -> Self {
        let cells = (0..GAME_OVER_ROWS)
            .map(|i| {
                (0..GAME_OVER_COLUMNS)
                    .map(|j| {
                        if i == GAME_OVER_MARKER_ROW && GAME_OVER_MARKER_COLUMNS.contains(&j) {
                            Cell::GameOver
                        } else {
                            Cell::Empty
                        }
                    })
                    .collect()
            })
            .collect();
        Self { cells }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(column)).copied()
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn is_game_over_banner(&self) -> bool {
        self.cells.iter().flatten().any(|&c| c == Cell::GameOver)
    }
}

impl fmt::Display for RenderedGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                f.write_str(cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(grid: &mut Grid, row: usize) {
        for column in 0..grid.columns() {
            grid.fill(row, column);
        }
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(4, 3);
        assert_eq!((grid.rows(), grid.columns()), (4, 3));
        for row in 0..4 {
            assert!(grid.is_row_empty(row));
            assert!(!grid.is_row_full(row));
        }
    }

    #[test]
    fn test_fill_out_of_range_is_ignored() {
        let mut grid = Grid::new(2, 2);
        grid.fill(5, 0);
        grid.fill(0, 5);
        assert_eq!(grid, Grid::new(2, 2));
        assert!(!grid.is_filled(5, 5));
    }

    #[test]
    fn test_clear_row_shifts_rows_above() {
        let mut grid = Grid::new(4, 3);
        grid.fill(0, 0);
        grid.fill(1, 2);
        fill_row(&mut grid, 2);
        grid.fill(3, 1);

        grid.clear_row(2);

        assert!(grid.is_row_empty(0));
        assert!(grid.is_filled(1, 0));
        assert!(grid.is_filled(2, 2));
        assert!(!grid.is_filled(2, 0));
        assert!(grid.is_filled(3, 1));
        assert!(!grid.is_row_full(2));
    }

    #[test]
    fn test_clear_top_row() {
        let mut grid = Grid::new(2, 2);
        fill_row(&mut grid, 0);
        grid.clear_row(0);
        assert_eq!(grid, Grid::new(2, 2));
    }

    #[test]
    fn test_game_over_banner_layout() {
        let banner = RenderedGrid::game_over();
        assert_eq!((banner.height(), banner.width()), (10, 10));
        for i in 0..10 {
            for j in 0..10 {
                let expected = if i == 4 && (3..=6).contains(&j) {
                    Cell::GameOver
                } else {
                    Cell::Empty
                };
                assert_eq!(banner.get(i, j), Some(expected), "({}, {})", i, j);
            }
        }
        assert!(banner.is_game_over_banner());
    }

    #[test]
    fn test_display_joins_glyphs_per_row() {
        let grid = RenderedGrid::new(vec![
            vec![Cell::Filled, Cell::Empty],
            vec![Cell::Empty, Cell::GameOver],
        ]);
        assert_eq!(grid.to_string(), "🟦⬜\n⬜X\n");
    }
}
