use smallvec::SmallVec;
use tracing::trace;

use crate::error::NavigationError;
use crate::map::direction::Direction;
use crate::map::graph::{RoomGraph, RoomId};

/// Where the player is. Kept outside the graph, which stays read-only while walking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    current: RoomId,
}

impl NavigationState {
    pub fn new(start: RoomId) -> Self {
        NavigationState { current: start }
    }

    pub fn current(&self) -> RoomId {
        self.current
    }

    /// Directions with a link out of the current room, in e, w, n, s order.
    pub fn possible_moves(&self, graph: &RoomGraph) -> SmallVec<[Direction; 4]> {
        Direction::MOVE_ORDER
            .into_iter()
            .filter(|&direction| graph.neighbor(self.current, direction).is_some())
            .collect()
    }

    /// Follows a sequence of direction characters from the current room.
    ///
    /// The whole sequence is checked before the player moves: on the first
    /// character that is not a direction, or has no link from the room reached
    /// so far, the rest is ignored and the player stays where the line started.
    /// On success the player ends up in the final room, which is returned.
    pub fn apply_moves(&mut self, graph: &RoomGraph, moves: &str) -> Result<RoomId, NavigationError> {
        let mut room = self.current;

        for (position, character) in moves.chars().enumerate() {
            let direction =
                Direction::from_token(character).ok_or(NavigationError::UnknownDirection { position, character })?;
            room = graph
                .neighbor(room, direction)
                .ok_or(NavigationError::NoExit { position, direction })?;
            trace!(room, direction = direction.as_ref(), "Stepped");
        }

        self.current = room;
        Ok(room)
    }
}
