//! Core simulation - pure, deterministic, and testable
//!
//! This crate holds the rules of the falling-block game. It has no
//! dependency on terminals, timers or input devices, which makes it:
//!
//! - **Deterministic**: a seed (or a scripted [`PieceSource`]) fixes the whole game
//! - **Testable**: every rule is exercised without a host
//! - **Portable**: any loop, timer or test harness can drive it
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven occupancy matrices and clockwise rotation
//! - [`piece`]: a shape at a board anchor
//! - [`board`]: 10x20 locked-cell grid with line clearing
//! - [`rng`]: seedable piece sources
//! - [`engine`]: gravity, commands, locking, spawning, game over
//! - [`snapshot`]: read-only view for renderers
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{Engine, TickOutcome};
//! use tui_blockfall_types::{Command, GameStatus};
//!
//! let mut engine = Engine::new(12345);
//! engine.apply(Command::MoveLeft);
//! engine.apply(Command::RotateCw);
//! assert_eq!(engine.tick(), TickOutcome::Moved);
//! assert_eq!(engine.snapshot().status, GameStatus::Running);
//! ```

pub mod board;
pub mod engine;
pub mod piece;
pub mod rng;
pub mod shapes;
pub mod snapshot;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, IdGrid};
pub use engine::{Engine, TickOutcome};
pub use piece::{LockedCell, Piece};
pub use rng::{CyclicSource, PieceSource, SimpleRng, UniformSource};
pub use shapes::{get_shape, Shape, SHAPE_TABLE};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
