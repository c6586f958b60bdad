//! Keyboard handling: crossterm key events to game intents.

use crate::intent::{Direction, Intent};
use crossterm::event::{self, Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the front end to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Intent(Intent),
    Quit,
}

/// Map one key press; unbound keys yield `None`.
pub fn key_to_command(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    let intent = match key.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Intent::Move(Direction::Up),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Intent::Move(Direction::Down),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Intent::Move(Direction::Left),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            Intent::Move(Direction::Right)
        }
        KeyCode::Char(' ') => Intent::Attack,
        KeyCode::Char('n') | KeyCode::Char('N') => Intent::NextLevel,
        KeyCode::Char('r') | KeyCode::Char('R') => Intent::Restart,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Some(Command::Quit),
        _ => return None,
    };
    Some(Command::Intent(intent))
}

/// Trait for input sources
pub trait InputSource {
    /// Block until the next command is available.
    fn next_command(&mut self) -> anyhow::Result<Command>;
}

/// Reads key presses from the terminal.
#[derive(Debug, Default)]
pub struct ConsoleInput;

impl ConsoleInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for ConsoleInput {
    fn next_command(&mut self) -> anyhow::Result<Command> {
        loop {
            if let CEvent::Key(key) = event::read()? {
                if let Some(command) = key_to_command(key) {
                    return Ok(command);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn movement_keys_and_arrows_agree() {
        assert_eq!(
            key_to_command(press(KeyCode::Char('w'))),
            key_to_command(press(KeyCode::Up))
        );
        assert_eq!(
            key_to_command(press(KeyCode::Char('d'))),
            Some(Command::Intent(Intent::Move(Direction::Right)))
        );
    }

    #[test]
    fn control_keys() {
        assert_eq!(
            key_to_command(press(KeyCode::Char(' '))),
            Some(Command::Intent(Intent::Attack))
        );
        assert_eq!(key_to_command(press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(
            key_to_command(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
        assert_eq!(key_to_command(press(KeyCode::Char('x'))), None);
    }
}
