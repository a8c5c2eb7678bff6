//! Grid layout of a room graph.
//!
//! Rooms are placed by a depth-first walk from a start room. Each step moves
//! [`ROOM_SPACING`](crate::constants::ROOM_SPACING) cells in the link's direction, leaving the cells in between
//! free for connectors. A room reachable along several paths keeps the position
//! of the path that reached it first, so graphs whose cycles do not close
//! geometrically are drawn as a spanning tree and some links will not line up.

use glam::IVec2;
use tracing::{debug, trace};

use crate::constants::START_POSITION;
use crate::error::MapError;
use crate::map::direction::Direction;
use crate::map::graph::{RoomGraph, RoomId};

/// The smallest rectangle of layout coordinates covering every placed room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutBounds {
    /// Minimum column (`x`) and row (`y`).
    pub min: IVec2,
    /// Maximum column (`x`) and row (`y`).
    pub max: IVec2,
}

impl LayoutBounds {
    /// Bounds covering a single position.
    pub fn at(position: IVec2) -> Self {
        LayoutBounds {
            min: position,
            max: position,
        }
    }

    /// Grows the bounds to cover `position`.
    pub fn include(&mut self, position: IVec2) {
        self.min = self.min.min(position);
        self.max = self.max.max(position);
    }

    pub fn contains(&self, position: IVec2) -> bool {
        position.cmpge(self.min).all() && position.cmple(self.max).all()
    }

    pub fn min_row(&self) -> i32 {
        self.min.y
    }

    pub fn max_row(&self) -> i32 {
        self.max.y
    }

    pub fn min_col(&self) -> i32 {
        self.min.x
    }

    pub fn max_col(&self) -> i32 {
        self.max.x
    }

    /// Number of grid rows spanned.
    pub fn rows(&self) -> usize {
        (self.max.y - self.min.y + 1) as usize
    }

    /// Number of grid columns spanned.
    pub fn cols(&self) -> usize {
        (self.max.x - self.min.x + 1) as usize
    }

    /// Translates a layout position into a 0-based (row, column) grid index.
    pub fn to_grid(&self, position: IVec2) -> Option<(usize, usize)> {
        if !self.contains(position) {
            return None;
        }
        let offset = position - self.min;
        Some((offset.y as usize, offset.x as usize))
    }
}

/// Positions assigned to the rooms reachable from a start room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    start: RoomId,
    positions: Vec<Option<IVec2>>,
    order: Vec<RoomId>,
    bounds: LayoutBounds,
}

impl Layout {
    /// Lays out every room reachable from `start`.
    ///
    /// Neighbors are explored in N, S, E, W order. The walk uses an explicit
    /// stack and visits rooms in the same pre-order a recursive walk would, so
    /// the first path to reach a room decides its position.
    ///
    /// # Errors
    ///
    /// Returns an error if the graph is empty or `start` is not one of its rooms.
    pub fn compute(graph: &RoomGraph, start: RoomId) -> Result<Layout, MapError> {
        if graph.is_empty() {
            return Err(MapError::EmptyDungeon);
        }
        if graph.room(start).is_none() {
            return Err(MapError::RoomNotFound(start));
        }

        let mut positions = vec![None; graph.room_count()];
        let mut order = Vec::with_capacity(graph.room_count());
        let mut bounds = LayoutBounds::at(START_POSITION);

        let mut stack = vec![(start, START_POSITION)];
        while let Some((room, position)) = stack.pop() {
            if positions[room].is_some() {
                continue;
            }

            positions[room] = Some(position);
            order.push(room);
            bounds.include(position);
            trace!(room, col = position.x, row = position.y, "Placed room");

            if let Some(exits) = graph.exits(room) {
                // Reversed so that north is popped (and explored) first.
                for direction in Direction::DIRECTIONS.into_iter().rev() {
                    if let Some(target) = exits.get(direction).filter(|&target| positions[target].is_none()) {
                        stack.push((target, position + direction.layout_offset()));
                    }
                }
            }
        }

        debug!(
            placed = order.len(),
            rooms = graph.room_count(),
            rows = bounds.rows(),
            cols = bounds.cols(),
            "Computed layout"
        );

        Ok(Layout {
            start,
            positions,
            order,
            bounds,
        })
    }

    /// The room the walk started from.
    pub fn start(&self) -> RoomId {
        self.start
    }

    /// Position of a room as (column, row), or `None` if it was not reached.
    pub fn position(&self, room: RoomId) -> Option<IVec2> {
        self.positions.get(room).copied().flatten()
    }

    pub fn is_placed(&self, room: RoomId) -> bool {
        self.position(room).is_some()
    }

    /// Placed rooms in the order they were visited.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, IVec2)> + '_ {
        self.order.iter().filter_map(|&room| self.position(room).map(|pos| (room, pos)))
    }

    pub fn placed_count(&self) -> usize {
        self.order.len()
    }

    pub fn bounds(&self) -> LayoutBounds {
        self.bounds
    }

    /// Grid size as (rows, columns).
    pub fn dimensions(&self) -> (usize, usize) {
        (self.bounds.rows(), self.bounds.cols())
    }
}
