//! This module contains the interactive navigation loop.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::error::{GameResult, NavigationError};
use crate::formatter;
use crate::input::commands::GameCommand;
use crate::input::Bindings;
use crate::map::direction::Direction;
use crate::map::graph::RoomId;
use crate::map::Dungeon;

use self::state::NavigationState;

pub mod state;

/// Joins direction tokens for display, e.g. `e, n`.
fn join_directions(directions: &[Direction]) -> String {
    directions
        .iter()
        .map(|direction| direction.token().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// What a single command did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The player is now in this room (possibly the same one, for an empty line).
    Moved(RoomId),
    /// The move sequence was rejected and the player did not move.
    Invalid(NavigationError),
    Exit,
}

/// The `Game` struct drives one player through a dungeon.
///
/// Each turn it draws the map, lists the exits, reads one line of input and
/// applies it. The dungeon itself is never modified.
pub struct Game<'a> {
    dungeon: &'a Dungeon,
    state: NavigationState,
    bindings: Bindings,
}

impl<'a> Game<'a> {
    /// Starts a session in the dungeon's start room.
    pub fn new(dungeon: &'a Dungeon, bindings: Bindings) -> Self {
        Game {
            dungeon,
            state: NavigationState::new(dungeon.start()),
            bindings,
        }
    }

    pub fn current(&self) -> RoomId {
        self.state.current()
    }

    /// Name of the room the player is in.
    pub fn current_name(&self) -> &str {
        self.dungeon
            .graph()
            .name(self.current())
            .map(|name| name.as_str())
            .unwrap_or_default()
    }

    /// Everything printed before reading a command: map, location, exits and prompt.
    pub fn turn_prompt(&self) -> String {
        let moves = self.state.possible_moves(self.dungeon.graph());
        format!(
            "{}you are in room {}\npossible moves: {}\nyour choice:",
            self.dungeon.render(self.current()),
            self.current_name(),
            join_directions(&moves),
        )
    }

    /// Applies a single command.
    pub fn handle(&mut self, command: GameCommand) -> TurnOutcome {
        match command {
            GameCommand::Exit => TurnOutcome::Exit,
            GameCommand::Move(moves) => match self.state.apply_moves(self.dungeon.graph(), &moves) {
                Ok(room) => TurnOutcome::Moved(room),
                Err(error) => {
                    warn!(%error, input = %moves, "Rejected move sequence");
                    TurnOutcome::Invalid(error)
                }
            },
        }
    }

    /// Runs turns until the quit command or the end of `input`.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> GameResult<()> {
        writeln!(output, "{}", self.dungeon.size_line())?;
        info!(start = self.current_name(), "Starting session");

        let mut buf = Vec::new();
        loop {
            formatter::increment_turn();
            write!(output, "{}", self.turn_prompt())?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(output)?;
                info!("Input closed, ending session");
                break;
            }

            // Undecodable bytes become U+FFFD and are rejected as moves.
            let line = String::from_utf8_lossy(&buf);
            match self.handle(self.bindings.parse(&line)) {
                TurnOutcome::Exit => {
                    info!("Exit requested");
                    break;
                }
                TurnOutcome::Invalid(error) => writeln!(output, "Invalid choice at : {}", error.character())?,
                TurnOutcome::Moved(_) => {}
            }
        }

        Ok(())
    }
}
