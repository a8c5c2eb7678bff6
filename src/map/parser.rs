//! Parsing of adjacency records into a room graph.
//!
//! Each non-blank line describes the outgoing edges of one room:
//!
//! ```text
//! a0 e:b0 s:a1
//! b0 n:c0
//! ```

use tracing::{debug, trace};

use crate::error::ParseError;
use crate::map::direction::Direction;
use crate::map::graph::{RoomGraph, RoomName};

/// A single `<direction>:<room>` token from a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEdge {
    pub direction: Direction,
    pub target: RoomName,
}

/// One line of the map file: a room and its outgoing edges, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord {
    pub room: RoomName,
    pub edges: Vec<ParsedEdge>,
}

/// Parser for converting adjacency records into a room graph.
pub struct DungeonParser;

impl DungeonParser {
    /// Parses a single `<direction>:<room>` edge token.
    ///
    /// # Errors
    ///
    /// Returns an error if the colon is missing, the direction is not one of
    /// `n`, `s`, `e`, `w`, or the room name is malformed.
    pub fn parse_edge(token: &str, line: usize) -> Result<ParsedEdge, ParseError> {
        let (direction, target) = token.split_once(':').ok_or_else(|| ParseError::MissingColon {
            line,
            token: token.to_string(),
        })?;

        let mut chars = direction.chars();
        let direction = match (chars.next().and_then(Direction::from_token), chars.next()) {
            (Some(direction), None) => direction,
            _ => {
                return Err(ParseError::UnknownDirection {
                    line,
                    token: direction.to_string(),
                })
            }
        };

        let target = Self::parse_room_name(target, line)?;

        Ok(ParsedEdge { direction, target })
    }

    /// Parses one non-blank record line.
    ///
    /// `line` is the 1-based line number used in error reports.
    pub fn parse_line(text: &str, line: usize) -> Result<ParsedRecord, ParseError> {
        let mut tokens = text.split_whitespace();

        // Callers skip blank lines, so there is always a first token here.
        let room = Self::parse_room_name(tokens.next().unwrap_or_default(), line)?;

        let edges = tokens
            .map(|token| Self::parse_edge(token, line))
            .collect::<Result<Vec<_>, _>>()?;

        if edges.is_empty() {
            return Err(ParseError::MissingEdges {
                line,
                room: room.to_string(),
            });
        }

        Ok(ParsedRecord { room, edges })
    }

    /// Parses a whole map file into a room graph.
    ///
    /// Rooms are created in the order they are first mentioned, whether as the
    /// subject of a record or as a neighbor. Links are only set on the record's
    /// own room; a later record for the same room overwrites earlier links in
    /// the same direction.
    ///
    /// # Errors
    ///
    /// Returns the first malformed record found. Nothing is returned for the
    /// lines that parsed successfully before it.
    pub fn parse_str(text: &str) -> Result<RoomGraph, ParseError> {
        let mut graph = RoomGraph::new();
        let mut records = 0usize;

        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        for (index, raw) in text.lines().enumerate() {
            if raw.trim().is_empty() {
                continue;
            }

            let record = Self::parse_line(raw, index + 1)?;
            let room = graph.get_or_create(&record.room);

            for edge in &record.edges {
                if graph.neighbor(room, edge.direction).is_some() {
                    trace!(room = %record.room, direction = edge.direction.as_ref(), "Overwriting earlier link");
                }
                graph
                    .link(room, edge.direction, &edge.target)
                    .expect("Inconsistent state: record room was not registered");
            }

            records += 1;
        }

        debug!(records, rooms = graph.room_count(), "Parsed dungeon");

        Ok(graph)
    }

    fn parse_room_name(name: &str, line: usize) -> Result<RoomName, ParseError> {
        RoomName::new(name).map_err(|_| ParseError::InvalidRoomName {
            line,
            name: name.to_string(),
        })
    }
}
