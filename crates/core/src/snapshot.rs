use arrayvec::ArrayVec;
use serde::Serialize;

use crate::board::IdGrid;
use crate::piece::Piece;
use crate::types::{GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, MAX_SHAPE_CELLS};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    /// Cell value the piece will write when it locks
    pub id: u8,
    pub x: i8,
    pub y: i8,
    /// Occupied board cells as (x, y)
    pub cells: ArrayVec<(i8, i8), MAX_SHAPE_CELLS>,
}

impl From<&Piece> for ActiveSnapshot {
    fn from(value: &Piece) -> Self {
        Self {
            kind: value.kind(),
            id: value.kind().id(),
            x: value.x,
            y: value.y,
            cells: value.occupied_cells().iter().map(|c| (c.x, c.y)).collect(),
        }
    }
}

/// Read-only view handed to renderers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub board: IdGrid,
    pub active: Option<ActiveSnapshot>,
    pub status: GameStatus,
    /// Spawn counter; changes whenever a new piece becomes active
    pub piece_id: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = None;
        self.status = GameStatus::Running;
        self.piece_id = 0;
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Cell value at (x, y) with the active piece drawn over the board
    pub fn composed_cell(&self, x: i8, y: i8) -> u8 {
        if let Some(active) = &self.active {
            if active.cells.contains(&(x, y)) {
                return active.id;
            }
        }
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return 0;
        }
        self.board[y as usize][x as usize]
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            status: GameStatus::Running,
            piece_id: 0,
        }
    }
}
