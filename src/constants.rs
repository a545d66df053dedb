pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLUMNS: usize = 10;

// Flat bonus per cleared row, no multipliers
pub const LINE_CLEAR_BONUS: u32 = 10;

// Game-over banner: always 10x10 with the marker on row 4, columns 3..=6
pub const GAME_OVER_ROWS: usize = 10;
pub const GAME_OVER_COLUMNS: usize = 10;
pub const GAME_OVER_MARKER_ROW: usize = 4;
pub const GAME_OVER_MARKER_COLUMNS: std::ops::RangeInclusive<usize> = 3..=6;

// Console glyphs
pub const FILLED_GLYPH: &str = "🟦";
pub const EMPTY_GLYPH: &str = "⬜";
pub const GAME_OVER_GLYPH: &str = "X";
