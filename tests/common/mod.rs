#![allow(dead_code)]

use dungeon::map::graph::{RoomGraph, RoomId};
use dungeon::map::parser::DungeonParser;
use dungeon::map::Dungeon;

/// a0 -> b0 east, b0 -> c0 north, nothing linked back.
pub const CORNER: &str = "a0 e:b0\nb0 n:c0\n";

/// A 2x2 ring where every link is declared both ways.
pub const SQUARE: &str = "a0 e:b0 s:a1\nb0 w:a0 s:b1\na1 n:a0 e:b1\nb1 n:b0 w:a1\n";

/// b0 links south onto c0, which a0 already placed directly below itself.
pub const SKEWED: &str = "a0 e:b0 s:c0\nb0 s:c0\n";

/// a0's west link leads to a room already placed south of it.
pub const DANGLING_WEST: &str = "a0 s:b0 w:b0\n";

/// The map shipped as `dungeon.txt`.
pub const SAMPLE: &str = include_str!("../../dungeon.txt");

pub fn parse_graph(text: &str) -> RoomGraph {
    DungeonParser::parse_str(text).unwrap()
}

pub fn build_dungeon(text: &str) -> Dungeon {
    Dungeon::new(text, None).unwrap()
}

pub fn id(graph: &RoomGraph, name: &str) -> RoomId {
    graph.find(name).unwrap_or_else(|| panic!("no room named {name}"))
}
