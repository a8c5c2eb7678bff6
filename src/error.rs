//! Centralized error types for the dungeon map.
//!
//! This module defines all error types used throughout the crate,
//! providing a consistent error handling approach.

use std::io;

use crate::map::direction::Direction;
use crate::map::graph::RoomId;

/// Main error type for the dungeon map.
///
/// This is the primary error type that should be used in public APIs.
/// It can represent any error that can occur while loading or walking a dungeon.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Map parsing error: {0}")]
    MapParse(#[from] ParseError),

    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<figment::Error> for GameError {
    fn from(error: figment::Error) -> Self {
        GameError::Config(Box::new(error))
    }
}

/// Error type for adjacency record parsing.
///
/// Line numbers are 1-based and count blank lines.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: invalid room name '{name}'")]
    InvalidRoomName { line: usize, name: String },

    #[error("line {line}: edge '{token}' is missing a ':'")]
    MissingColon { line: usize, token: String },

    #[error("line {line}: unknown direction '{token}'")]
    UnknownDirection { line: usize, token: String },

    #[error("line {line}: room '{room}' has no edges")]
    MissingEdges { line: usize, room: String },
}

/// Errors related to the room graph and its layout.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MapError {
    #[error("Dungeon has no rooms")]
    EmptyDungeon,

    #[error("Room not found in graph: {0}")]
    RoomNotFound(RoomId),

    #[error("No room named '{0}'")]
    UnknownRoom(String),

    #[error("Invalid room name: '{0}'")]
    InvalidRoomName(String),
}

/// A move sequence that could not be completed.
///
/// `position` is the 0-based character index within the input line.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    #[error("'{character}' at {position} is not a direction")]
    UnknownDirection { position: usize, character: char },

    #[error("no exit {} at {position}", direction.as_ref())]
    NoExit { position: usize, direction: Direction },
}

impl NavigationError {
    /// The input character the move sequence failed on.
    pub fn character(&self) -> char {
        match self {
            NavigationError::UnknownDirection { character, .. } => *character,
            NavigationError::NoExit { direction, .. } => direction.token(),
        }
    }

    /// Index of the failing character within the input line.
    pub fn position(&self) -> usize {
        match self {
            NavigationError::UnknownDirection { position, .. } | NavigationError::NoExit { position, .. } => *position,
        }
    }
}

/// Result type for dungeon operations.
pub type GameResult<T> = Result<T, GameError>;
