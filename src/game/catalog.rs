use rand::Rng;

use crate::game::piece::{Piece, ShapeKind};

const SQUARE: &[&[u8]] = &[&[1, 1], &[1, 1]];
const LINE: &[&[u8]] = &[&[1, 1, 1, 1]];
const L: &[&[u8]] = &[&[1, 1], &[1, 0], &[1, 0]];
const T: &[&[u8]] = &[&[1, 1, 1], &[0, 1, 0]];
const J: &[&[u8]] = &[&[1, 1], &[0, 1], &[0, 1]];
const Z: &[&[u8]] = &[&[0, 1, 1], &[1, 1, 0]];
const S: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1]];

fn layout(kind: ShapeKind) -> &'static [&'static [u8]] {
    match kind {
        ShapeKind::Square => SQUARE,
        ShapeKind::Line => LINE,
        ShapeKind::L => L,
        ShapeKind::T => T,
        ShapeKind::J => J,
        ShapeKind::Z => Z,
        ShapeKind::S => S,
    }
}

/// Returns the fixed spawn shape for `kind`.
pub fn create_figure(kind: ShapeKind) -> Piece {
    let shape = layout(kind)
        .iter()
        .map(|row| row.iter().map(|&cell| cell == 1).collect())
        .collect();
    Piece::from_shape(kind, shape)
}

/// Picks one of the seven kinds uniformly using the caller's generator.
pub fn create_random_figure<R: Rng + ?Sized>(rng: &mut R) -> Piece {
    let kind = ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())];
    create_figure(kind)
}
