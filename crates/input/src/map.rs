//! Key mapping from terminal events to engine commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the host to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Forward to the engine
    Command(Command),
    /// Start a new game
    Restart,
    /// Leave the program
    Quit,
}

/// Map a key press to an input event; unmapped keys return `None`.
pub fn handle_key_event(key: KeyEvent) -> Option<InputEvent> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(InputEvent::Quit);
    }

    let command = match key.code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Command::MoveLeft,
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Command::MoveRight,
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Command::RotateCw,
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Command::SoftDrop,

        KeyCode::Enter | KeyCode::Char('r' | 'R') => return Some(InputEvent::Restart),
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => return Some(InputEvent::Quit),

        _ => return None,
    };
    Some(InputEvent::Command(command))
}
