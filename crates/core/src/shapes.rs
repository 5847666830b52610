//! Shapes module - the seven tetromino occupancy matrices
//!
//! Every shape is a rectangular 0/1 matrix stored in a fixed 4x4 grid, so
//! shapes are `Copy` and rotation never allocates. Cells outside the
//! `height x width` rectangle are always zero.
//!
//! Rotation is the plain 90° clockwise transform of the matrix: an `R x C`
//! matrix becomes `C x R` with `new[x][R - 1 - y] = old[y][x]`. There are no
//! per-kind rotation tables and no kick offsets.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, MAX_SHAPE_CELLS, MAX_SHAPE_DIM};

/// Offset of a single occupied cell relative to the matrix top-left
pub type CellOffset = (i8, i8);

type Grid = [[u8; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];

/// Immutable occupancy matrix tagged with the kind it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    kind: PieceKind,
    height: u8,
    width: u8,
    grid: Grid,
}

/// Spawn orientation of every piece kind, in [`PieceKind::ALL`] order
pub const SHAPE_TABLE: [Shape; PieceKind::COUNT] = [
    Shape::table_entry(PieceKind::I, 1, 4, [[1, 1, 1, 1], [0; 4], [0; 4], [0; 4]]),
    Shape::table_entry(PieceKind::O, 2, 2, [[1, 1, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]]),
    Shape::table_entry(PieceKind::T, 2, 3, [[0, 1, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]),
    Shape::table_entry(PieceKind::L, 2, 3, [[1, 0, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]),
    Shape::table_entry(PieceKind::J, 2, 3, [[0, 0, 1, 0], [1, 1, 1, 0], [0; 4], [0; 4]]),
    Shape::table_entry(PieceKind::S, 2, 3, [[1, 1, 0, 0], [0, 1, 1, 0], [0; 4], [0; 4]]),
    Shape::table_entry(PieceKind::Z, 2, 3, [[0, 1, 1, 0], [1, 1, 0, 0], [0; 4], [0; 4]]),
];

/// Get the spawn-orientation shape for a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    SHAPE_TABLE[kind.index()]
}

impl Shape {
    const fn table_entry(kind: PieceKind, height: u8, width: u8, grid: Grid) -> Self {
        Self {
            kind,
            height,
            width,
            grid,
        }
    }

    /// Build a shape from explicit rows.
    ///
    /// Returns `None` when the matrix is empty, ragged, larger than
    /// `MAX_SHAPE_DIM` on either side, or holds values other than 0 and 1.
    pub fn from_rows(kind: PieceKind, rows: &[&[u8]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height == 0 || width == 0 || height > MAX_SHAPE_DIM || width > MAX_SHAPE_DIM {
            return None;
        }

        let mut grid = [[0u8; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return None;
            }
            for (x, &v) in row.iter().enumerate() {
                if v > 1 {
                    return None;
                }
                grid[y][x] = v;
            }
        }

        Some(Self {
            kind,
            height: height as u8,
            width: width as u8,
            grid,
        })
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Matrix dimensions as `(height, width)`
    pub fn bounding_box(&self) -> (u8, u8) {
        (self.height, self.width)
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    /// Matrix value at (x, y); zero outside the bounding box
    pub fn at(&self, x: usize, y: usize) -> u8 {
        if x >= self.width as usize || y >= self.height as usize {
            return 0;
        }
        self.grid[y][x]
    }

    /// Rows of the matrix, trimmed to the bounding box
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.grid[..self.height as usize]
            .iter()
            .map(move |row| &row[..self.width as usize])
    }

    /// Occupied cells in row-major order
    pub fn offsets(&self) -> ArrayVec<CellOffset, MAX_SHAPE_CELLS> {
        let mut out = ArrayVec::new();
        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                if self.grid[y][x] != 0 {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }

    /// Rotate 90° clockwise.
    ///
    /// Pure: returns a new matrix and never looks at the board.
    pub fn rotate_cw(&self) -> Shape {
        let rows = self.height as usize;
        let cols = self.width as usize;
        let mut grid = [[0u8; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for y in 0..rows {
            for x in 0..cols {
                grid[x][rows - 1 - y] = self.grid[y][x];
            }
        }

        Shape {
            kind: self.kind,
            height: self.width,
            width: self.height,
            grid,
        }
    }
}
