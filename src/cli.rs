//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Walk a dungeon of linked rooms on an ASCII map.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Adjacency file to load (overrides DUNGEON_MAP_PATH)
    pub map: Option<PathBuf>,

    /// Room to start in (overrides DUNGEON_START_ROOM)
    #[arg(long = "start", value_name = "ROOM")]
    pub start: Option<String>,

    /// Print the map once and exit
    #[arg(long = "render-only")]
    pub render_only: bool,

    /// Debug-level logging to stderr
    #[arg(long = "verbose", short = 'v')]
    pub verbose: bool,
}
