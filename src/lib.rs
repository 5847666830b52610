//! Falling-block puzzle simulation (workspace facade crate).
//!
//! Re-exports the workspace crates under short module names so binaries,
//! tests and benches depend on one package.

pub use tui_blockfall_core as core;
pub use tui_blockfall_input as input;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;
