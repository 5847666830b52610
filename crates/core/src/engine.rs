//! Engine module - the simulation state machine
//!
//! Owns the board, the active piece and the piece source. Gravity
//! ([`Engine::tick`]) and player commands ([`Engine::apply`]) share one
//! placement rule: a proposed piece is checked with [`Engine::can_place`] and
//! either replaces the active piece whole or is dropped.
//!
//! States are `Running` and `GameOver`. `GameOver` is entered when a freshly
//! spawned piece does not fit and is left only through [`Engine::restart`].
//! The engine is single-threaded; hosts serialize `tick`, `apply` and
//! `restart` on their own event loop.

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::{PieceSource, UniformSource};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Command, GameStatus, PieceKind};

/// What a gravity step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Active piece moved down one row
    Moved,
    /// Active piece locked; a new piece spawned
    Locked { lines_cleared: usize },
    /// Active piece locked and the next spawn did not fit
    GameOver { lines_cleared: usize },
    /// Engine is not running; nothing changed
    Idle,
}

/// Falling-block simulation
#[derive(Debug, Clone)]
pub struct Engine<S: PieceSource = UniformSource> {
    board: Board,
    active: Option<Piece>,
    status: GameStatus,
    source: S,
    /// Monotonic count of successful spawns.
    piece_id: u32,
}

impl Engine<UniformSource> {
    /// Start a game with uniform random pieces seeded by `seed`
    pub fn new(seed: u32) -> Self {
        Self::with_source(UniformSource::new(seed))
    }
}

impl<S: PieceSource> Engine<S> {
    /// Start a game on an empty board with the given piece source
    pub fn with_source(source: S) -> Self {
        Self::from_parts(Board::new(), source)
    }

    /// Start a game on a prepared board.
    ///
    /// If the first piece does not fit, the engine starts in `GameOver`.
    pub fn from_parts(board: Board, source: S) -> Self {
        let mut engine = Self {
            board,
            active: None,
            status: GameStatus::Running,
            source,
            piece_id: 0,
        };
        engine.try_spawn();
        engine
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Spawn a piece of the kind chosen by the source.
    ///
    /// Returns false when the spawned piece would collide; the engine is then
    /// in `GameOver` with no active piece.
    pub fn try_spawn(&mut self) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }
        let kind = self.source.next_kind();
        self.spawn(kind)
    }

    /// Spawn a piece of `kind` at its spawn anchor, replacing any active piece.
    ///
    /// Does nothing and returns false once the game is over.
    pub fn spawn(&mut self, kind: PieceKind) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }

        let piece = Piece::spawn(kind);
        if !self.can_place(&piece, piece.x, piece.y) {
            debug!(kind = kind.as_str(), x = piece.x, y = piece.y, "spawn blocked");
            self.enter_game_over();
            return false;
        }

        self.piece_id = self.piece_id.wrapping_add(1);
        debug!(kind = kind.as_str(), piece_id = self.piece_id, "spawned piece");
        self.active = Some(piece);
        true
    }

    /// Check whether `piece`'s shape fits with its anchor at (x, y).
    ///
    /// Every occupied cell must be on the board and empty.
    pub fn can_place(&self, piece: &Piece, x: i8, y: i8) -> bool {
        piece
            .occupied_cells_at(x, y)
            .iter()
            .all(|c| Board::is_within_bounds(c.x, c.y) && !self.board.is_occupied(c.x, c.y))
    }

    /// Gravity step
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Idle;
        }
        let Some(active) = self.active else {
            return TickOutcome::Idle;
        };

        if self.can_place(&active, active.x, active.y + 1) {
            self.active = Some(active.at(active.x, active.y + 1));
            return TickOutcome::Moved;
        }

        let lines_cleared = self.lock_active(&active);
        if self.try_spawn() {
            TickOutcome::Locked { lines_cleared }
        } else {
            TickOutcome::GameOver { lines_cleared }
        }
    }

    /// Apply a player command.
    ///
    /// Returns true if the engine state changed. Rejected moves and commands
    /// issued after game over are silent no-ops.
    pub fn apply(&mut self, command: Command) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }

        match command {
            Command::MoveLeft => self.try_shift(-1),
            Command::MoveRight => self.try_shift(1),
            Command::RotateCw => self.try_rotate(),
            Command::SoftDrop => self.tick() != TickOutcome::Idle,
        }
    }

    /// Empty the board, return to `Running` and spawn a fresh piece
    pub fn restart(&mut self) {
        self.board.clear();
        self.active = None;
        self.status = GameStatus::Running;
        info!("restart");
        self.try_spawn();
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_id_grid(&mut out.board);
        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.status = self.status;
        out.piece_id = self.piece_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn try_shift(&mut self, dx: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let x = active.x + dx;
        if !self.can_place(&active, x, active.y) {
            trace!(dx, "shift rejected");
            return false;
        }
        self.active = Some(active.at(x, active.y));
        true
    }

    fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.rotated_cw();
        if !self.can_place(&rotated, rotated.x, rotated.y) {
            trace!(kind = active.kind().as_str(), "rotation rejected");
            return false;
        }
        self.active = Some(rotated);
        true
    }

    /// Write the piece into the board and clear full lines
    fn lock_active(&mut self, piece: &Piece) -> usize {
        self.board.lock(&piece.occupied_cells());
        self.active = None;

        let lines_cleared = self.board.clear_full_lines();
        debug!(
            kind = piece.kind().as_str(),
            x = piece.x,
            y = piece.y,
            lines_cleared,
            "locked piece"
        );
        lines_cleared
    }

    fn enter_game_over(&mut self) {
        self.status = GameStatus::GameOver;
        self.active = None;
        info!(pieces = self.piece_id, "game over");
    }
}

impl Default for Engine<UniformSource> {
    fn default() -> Self {
        Self::new(1)
    }
}
