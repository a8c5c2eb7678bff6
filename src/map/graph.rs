use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

use strum::IntoEnumIterator;

use crate::constants::{HORIZONTAL_CONNECTOR, PLAYER_MARKER, ROOM_NAME_LEN};
use crate::error::MapError;

use super::direction::Direction;

/// A unique identifier for a room, represented by its index in the graph's storage.
///
/// Ids are handed out in insertion order, so the first room created has id `0`.
pub type RoomId = usize;

/// A validated room name: exactly two characters, no whitespace, no `:`, and not
/// one of the map's own glyphs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomName(String);

impl RoomName {
    /// Validates and wraps a room name.
    pub fn new(name: &str) -> Result<Self, MapError> {
        // A name drawn like the player marker or a connector would make the map ambiguous.
        let valid = name.chars().count() == ROOM_NAME_LEN
            && name.chars().all(|c| !c.is_whitespace() && c != ':')
            && name != PLAYER_MARKER
            && name != HORIZONTAL_CONNECTOR;
        if valid {
            Ok(RoomName(name.to_string()))
        } else {
            Err(MapError::InvalidRoomName(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RoomName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets the name index be queried with a plain `&str`.
impl Borrow<str> for RoomName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A room in the dungeon. Its links live in the graph's adjacency list.
#[derive(Debug)]
pub struct Room {
    name: RoomName,
}

impl Room {
    pub fn name(&self) -> &RoomName {
        &self.name
    }
}

/// The outgoing links of a single room, one optional slot per direction.
///
/// Links are not required to be symmetric: a room's east neighbor need not
/// link back west.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Exits {
    /// Room reached by going north, if any.
    pub north: Option<RoomId>,
    /// Room reached by going south, if any.
    pub south: Option<RoomId>,
    /// Room reached by going east, if any.
    pub east: Option<RoomId>,
    /// Room reached by going west, if any.
    pub west: Option<RoomId>,
}

impl Exits {
    /// Returns an iterator over the existing links, in layout order (N, S, E, W).
    pub fn iter(&self) -> impl Iterator<Item = (Direction, RoomId)> + '_ {
        Direction::iter().filter_map(|direction| self.get(direction).map(|target| (direction, target)))
    }

    /// Retrieves the link in the specified direction, if it exists.
    pub fn get(&self, direction: Direction) -> Option<RoomId> {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    /// Sets the link in the specified direction.
    ///
    /// This will overwrite any existing link in that direction.
    pub fn set(&mut self, direction: Direction, target: RoomId) {
        match direction {
            Direction::North => self.north = Some(target),
            Direction::South => self.south = Some(target),
            Direction::East => self.east = Some(target),
            Direction::West => self.west = Some(target),
        }
    }

    /// Returns `true` if there is no link in any direction.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// A directed graph of named rooms using an adjacency list representation.
///
/// Rooms are stored in a vector, and their indices serve as their `RoomId`.
/// A name index guarantees at most one room per name. Rooms and links are
/// only ever added, never removed.
#[derive(Debug, Default)]
pub struct RoomGraph {
    rooms: Vec<Room>,
    adjacency_list: Vec<Exits>,
    by_name: HashMap<RoomName, RoomId>,
}

impl RoomGraph {
    /// Creates a new, empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the room with the given name, creating and registering it if needed.
    pub fn get_or_create(&mut self, name: &RoomName) -> RoomId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }

        let id = self.rooms.len();
        self.rooms.push(Room { name: name.clone() });
        self.adjacency_list.push(Exits::default());
        self.by_name.insert(name.clone(), id);
        id
    }

    /// Links `from` to the room named `to` in the given direction, creating `to` if needed.
    ///
    /// Only `from` gains a link; nothing is added in the opposite direction.
    /// Returns the id of the target room.
    pub fn link(&mut self, from: RoomId, direction: Direction, to: &RoomName) -> Result<RoomId, MapError> {
        if from >= self.rooms.len() {
            return Err(MapError::RoomNotFound(from));
        }

        let target = self.get_or_create(to);
        self.adjacency_list[from].set(direction, target);
        Ok(target)
    }

    /// Looks up a room by name.
    pub fn find(&self, name: &str) -> Option<RoomId> {
        self.by_name.get(name).copied()
    }

    /// Retrieves an immutable reference to a room.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Returns the name of a room, if it exists.
    pub fn name(&self, id: RoomId) -> Option<&RoomName> {
        self.room(id).map(Room::name)
    }

    /// Retrieves the outgoing links of a room.
    pub fn exits(&self, id: RoomId) -> Option<&Exits> {
        self.adjacency_list.get(id)
    }

    /// Follows the link from `from` in `direction`, if one exists.
    pub fn neighbor(&self, from: RoomId, direction: Direction) -> Option<RoomId> {
        self.exits(from)?.get(direction)
    }

    /// Returns the total number of rooms in the graph.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// The first room ever created, used as the default starting point.
    pub fn first_room(&self) -> Option<RoomId> {
        (!self.rooms.is_empty()).then_some(0)
    }

    /// All room ids, in insertion order.
    pub fn ids(&self) -> std::ops::Range<RoomId> {
        0..self.rooms.len()
    }
}
