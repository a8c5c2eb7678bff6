//! Turning console input lines into commands.

use crate::input::commands::GameCommand;

pub mod commands;

/// Maps raw input lines to commands.
#[derive(Debug, Clone)]
pub struct Bindings {
    quit_command: String,
}

impl Bindings {
    pub fn new(quit_command: impl Into<String>) -> Self {
        Bindings {
            quit_command: quit_command.into(),
        }
    }

    pub fn quit_command(&self) -> &str {
        &self.quit_command
    }

    /// Interprets one line of input.
    ///
    /// Surrounding whitespace is ignored. Anything other than the quit command is
    /// a move sequence; its characters are only checked when the moves are applied.
    pub fn parse(&self, line: &str) -> GameCommand {
        let line = line.trim();
        if line == self.quit_command {
            GameCommand::Exit
        } else {
            GameCommand::Move(line.to_string())
        }
    }
}

impl Default for Bindings {
    fn default() -> Self {
        Bindings::new(crate::constants::DEFAULT_QUIT_COMMAND)
    }
}
