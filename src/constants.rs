//! This module contains all the constants used by the dungeon map.

use glam::IVec2;

/// Distance between two linked rooms on the layout grid.
///
/// The odd rows and columns in between are left for connector glyphs.
pub const ROOM_SPACING: i32 = 2;

/// Layout position of the start room, as (column, row).
pub const START_POSITION: IVec2 = IVec2::new(1, 1);

/// Number of characters in a room name.
pub const ROOM_NAME_LEN: usize = 2;

/// Width of a single rendered grid cell, in characters.
pub const CELL_WIDTH: usize = ROOM_NAME_LEN;

/// Drawn in place of the room name the player currently occupies.
pub const PLAYER_MARKER: &str = "**";
/// Drawn between two rooms linked east/west.
pub const HORIZONTAL_CONNECTOR: &str = "--";
/// Drawn between two rooms linked north/south.
pub const VERTICAL_CONNECTOR: &str = "| ";
/// An empty grid cell.
pub const EMPTY_CELL: &str = "  ";

/// Character used for the rules above and below the map.
pub const RULE_CHAR: char = '-';

/// Map file read when neither the command line nor the environment names one.
pub const DEFAULT_MAP_PATH: &str = "dungeon.txt";

/// Input line that ends the session.
pub const DEFAULT_QUIT_COMMAND: &str = "q";

/// Prefix for environment variables read into the configuration.
pub const ENV_PREFIX: &str = "DUNGEON_";
