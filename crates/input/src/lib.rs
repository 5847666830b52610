//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into engine [`crate::types::Command`]s plus the
//! two host-level actions (restart, quit). Keys with no mapping are ignored.

pub mod map;

pub use tui_blockfall_types as types;

pub use map::{handle_key_event, InputEvent};
