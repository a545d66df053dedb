#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Square,
    Line,
    L,
    T,
    J,
    Z,
    S,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Square,
        ShapeKind::Line,
        ShapeKind::L,
        ShapeKind::T,
        ShapeKind::J,
        ShapeKind::Z,
        ShapeKind::S,
    ];
}

/// An immutable `height x width` occupancy matrix tagged with its kind.
///
/// Rotation produces a new piece; the receiver is never modified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    kind: ShapeKind,
    shape: Vec<Vec<bool>>,
}

impl Piece {
    /// Builds a piece from a non-empty rectangular matrix.
    pub(crate) fn from_shape(kind: ShapeKind, shape: Vec<Vec<bool>>) -> Self {
        debug_assert!(!shape.is_empty() && !shape[0].is_empty());
        debug_assert!(shape.iter().all(|row| row.len() == shape[0].len()));
        Self { kind, shape }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn shape(&self) -> &[Vec<bool>] {
        &self.shape
    }

    pub fn width(&self) -> usize {
        self.shape.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.shape.len()
    }

    /// Clockwise 90° rotation: cell `[i][j]` moves to `[j][new_width - 1 - i]`.
    pub fn rotate(&self) -> Self {
        let new_height = self.width();
        let new_width = self.height();
        let mut new_shape = vec![vec![false; new_width]; new_height];

        for (i, row) in self.shape.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                new_shape[j][new_width - 1 - i] = cell;
            }
        }

        Self {
            kind: self.kind,
            shape: new_shape,
        }
    }

    /// Occupied cells as `(row, column)` offsets from the top-left anchor,
    /// row-major.
    pub fn blocks(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.shape.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| **cell)
                .map(move |(j, _)| (i, j))
        })
    }
}
