//! Terminal rendering for the simulation.
//!
//! Renders a [`core::GameSnapshot`] into a character framebuffer and flushes
//! the changed cells to the terminal. The view never touches the engine; it
//! only reads snapshots.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
