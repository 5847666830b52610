//! Piece module - the active tetromino
//!
//! A piece is a [`Shape`] plus the board position of its bounding box's
//! top-left corner. Pieces are small `Copy` values; the engine proposes a
//! moved or rotated copy, validates it, and only then replaces the active one.

use arrayvec::ArrayVec;

use crate::shapes::{get_shape, Shape};
use crate::types::{PieceKind, BOARD_WIDTH, MAX_SHAPE_CELLS};

/// A board cell written by a locking piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LockedCell {
    pub x: i8,
    pub y: i8,
    pub kind: PieceKind,
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    pub fn new(shape: Shape, x: i8, y: i8) -> Self {
        Self { shape, x, y }
    }

    /// Create a piece of `kind` at its spawn anchor: top row, horizontally centered
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = get_shape(kind);
        let (x, y) = spawn_anchor(&shape);
        Self { shape, x, y }
    }

    pub fn kind(&self) -> PieceKind {
        self.shape.kind()
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// `(height, width)` of the current orientation
    pub fn bounding_box(&self) -> (u8, u8) {
        self.shape.bounding_box()
    }

    /// Same piece translated to (x, y)
    pub fn at(&self, x: i8, y: i8) -> Self {
        Self { x, y, ..*self }
    }

    /// Same anchor, shape rotated clockwise
    pub fn rotated_cw(&self) -> Self {
        Self {
            shape: self.shape.rotate_cw(),
            ..*self
        }
    }

    /// Occupied cells in board coordinates at the current anchor
    pub fn occupied_cells(&self) -> ArrayVec<LockedCell, MAX_SHAPE_CELLS> {
        self.occupied_cells_at(self.x, self.y)
    }

    /// Occupied cells as if the anchor were at (x, y).
    ///
    /// Coordinates saturate at the `i8` range; a saturated cell is always
    /// off the board.
    pub fn occupied_cells_at(&self, x: i8, y: i8) -> ArrayVec<LockedCell, MAX_SHAPE_CELLS> {
        let kind = self.kind();
        self.shape
            .offsets()
            .into_iter()
            .map(|(dx, dy)| LockedCell {
                x: x.saturating_add(dx),
                y: y.saturating_add(dy),
                kind,
            })
            .collect()
    }
}

/// Spawn anchor for a shape: `x = (BOARD_WIDTH - width) / 2`, `y = 0`
pub fn spawn_anchor(shape: &Shape) -> (i8, i8) {
    let x = (BOARD_WIDTH.saturating_sub(shape.width()) / 2) as i8;
    (x, 0)
}
