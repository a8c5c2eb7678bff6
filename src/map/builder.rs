//! Dungeon construction from adjacency records.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{GameResult, MapError};
use crate::map::graph::{RoomGraph, RoomId};
use crate::map::layout::Layout;
use crate::map::parser::DungeonParser;
use crate::map::render::MapRenderer;

/// A parsed and laid out dungeon, ready to be rendered and walked.
///
/// The graph and layout are fixed once built; navigation only ever reads them.
#[derive(Debug)]
pub struct Dungeon {
    graph: RoomGraph,
    layout: Layout,
}

impl Dungeon {
    /// Builds a dungeon from adjacency records held in memory.
    ///
    /// The layout starts from the room named `start`, or from the first room in
    /// the text when `start` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if a record is malformed, the text holds no rooms, or
    /// `start` names a room that does not exist.
    pub fn new(text: &str, start: Option<&str>) -> GameResult<Dungeon> {
        let graph = DungeonParser::parse_str(text)?;

        let start = match start {
            Some(name) => graph.find(name).ok_or_else(|| MapError::UnknownRoom(name.to_string()))?,
            None => graph.first_room().ok_or(MapError::EmptyDungeon)?,
        };

        let layout = Layout::compute(&graph, start)?;

        let unreachable = graph.room_count() - layout.placed_count();
        if unreachable > 0 {
            debug!(unreachable, "Some rooms cannot be reached from the start room and will not be drawn");
        }

        Ok(Dungeon { graph, layout })
    }

    /// Reads a map file and builds a dungeon from it.
    pub fn from_file(path: impl AsRef<Path>, start: Option<&str>) -> GameResult<Dungeon> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let dungeon = Self::new(&text, start)?;

        let (rows, cols) = dungeon.dimensions();
        info!(path = %path.display(), rooms = dungeon.graph.room_count(), rows, cols, "Loaded dungeon");

        Ok(dungeon)
    }

    pub fn graph(&self) -> &RoomGraph {
        &self.graph
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The room both the layout and the player start from.
    pub fn start(&self) -> RoomId {
        self.layout.start()
    }

    /// Map size as (rows, columns).
    pub fn dimensions(&self) -> (usize, usize) {
        self.layout.dimensions()
    }

    /// The size line printed before the map, e.g. `Dungeon is of 3x3`.
    pub fn size_line(&self) -> String {
        let (rows, cols) = self.dimensions();
        format!("Dungeon is of {rows}x{cols}")
    }

    /// The size line followed by the map with the player in the start room.
    pub fn overview(&self) -> String {
        format!("{}\n{}", self.size_line(), self.render(self.start()))
    }

    /// Renders the map with `current` marked as the player's room.
    pub fn render(&self, current: RoomId) -> String {
        MapRenderer::render(&self.graph, &self.layout, Some(current))
    }
}
