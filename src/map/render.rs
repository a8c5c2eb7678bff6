//! Map rendering functionality.

use std::fmt;

use tracing::trace;

use crate::constants::{CELL_WIDTH, EMPTY_CELL, HORIZONTAL_CONNECTOR, PLAYER_MARKER, RULE_CHAR, VERTICAL_CONNECTOR};
use crate::map::direction::Direction;
use crate::map::graph::{RoomGraph, RoomId, RoomName};
use crate::map::layout::Layout;

/// A single cell of the rendered map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell<'a> {
    Empty,
    Room(&'a RoomName),
    /// The room the player is standing in.
    Player,
    Horizontal,
    Vertical,
}

impl Cell<'_> {
    /// The text drawn for this cell, before padding to [`CELL_WIDTH`].
    pub fn glyph(&self) -> &str {
        match self {
            Cell::Empty => EMPTY_CELL,
            Cell::Room(name) => name.as_str(),
            Cell::Player => PLAYER_MARKER,
            Cell::Horizontal => HORIZONTAL_CONNECTOR,
            Cell::Vertical => VERTICAL_CONNECTOR,
        }
    }

    fn is_room(&self) -> bool {
        matches!(self, Cell::Room(_) | Cell::Player)
    }
}

/// A fixed-size grid of cells covering a layout's bounding box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapGrid<'a> {
    rows: usize,
    cols: usize,
    cells: Vec<Cell<'a>>,
}

impl<'a> MapGrid<'a> {
    /// Creates a grid of blank cells.
    pub fn new(rows: usize, cols: usize) -> Self {
        MapGrid {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Width of every rendered row, in characters.
    pub fn width(&self) -> usize {
        self.cols * CELL_WIDTH
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell<'a>> {
        (row < self.rows && col < self.cols).then(|| self.cells[row * self.cols + col])
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell<'a>) {
        self.cells[row * self.cols + col] = cell;
    }

    /// Places a connector next to a room, unless that cell is off the grid or holds a room.
    fn connect(&mut self, row: usize, col: usize, direction: Direction) {
        let step = direction.as_ivec2();
        let (Some(row), Some(col)) = (row.checked_add_signed(step.y as isize), col.checked_add_signed(step.x as isize))
        else {
            return;
        };

        match self.get(row, col) {
            Some(cell) if !cell.is_room() => {
                let connector = if direction.is_horizontal() { Cell::Horizontal } else { Cell::Vertical };
                self.set(row, col, connector);
            }
            Some(_) => trace!(row, col, "Connector would overwrite a room, skipping"),
            None => trace!(row, col, "Connector falls outside the map, skipping"),
        }
    }

    /// The rule drawn above and below the map.
    pub fn rule(&self) -> String {
        std::iter::repeat_n(RULE_CHAR, self.width()).collect()
    }

    /// Each grid row as text, every cell padded to [`CELL_WIDTH`].
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.chunks(self.cols.max(1)).map(|row| {
            row.iter()
                .map(|cell| format!("{:<width$}", cell.glyph(), width = CELL_WIDTH))
                .collect()
        })
    }
}

impl fmt::Display for MapGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.rule())?;
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "{}", self.rule())
    }
}

/// Handles rendering operations for the map.
pub struct MapRenderer;

impl MapRenderer {
    /// Projects every placed room and its links onto a grid.
    ///
    /// `current` is drawn with the player marker instead of its name. Links
    /// are drawn from the room that declares them, so a one-way link still
    /// gets a connector. Rendering does not touch the graph or layout.
    pub fn grid<'a>(graph: &'a RoomGraph, layout: &Layout, current: Option<RoomId>) -> MapGrid<'a> {
        let bounds = layout.bounds();
        let mut grid = MapGrid::new(bounds.rows(), bounds.cols());

        // Rooms first, so connectors can never be written over one. Rooms that
        // ended up on the same position are drawn in visit order, last one wins.
        for (room, position) in layout.rooms() {
            let (Some((row, col)), Some(name)) = (bounds.to_grid(position), graph.name(room)) else {
                continue;
            };
            grid.set(row, col, Cell::Room(name));
        }

        if let Some((row, col)) = current.and_then(|room| layout.position(room)).and_then(|pos| bounds.to_grid(pos)) {
            grid.set(row, col, Cell::Player);
        }

        for (room, position) in layout.rooms() {
            let (Some((row, col)), Some(exits)) = (bounds.to_grid(position), graph.exits(room)) else {
                continue;
            };
            for (direction, _) in exits.iter() {
                grid.connect(row, col, direction);
            }
        }

        grid
    }

    /// Renders the map as text: a rule, one line per grid row, and a closing rule.
    pub fn render(graph: &RoomGraph, layout: &Layout, current: Option<RoomId>) -> String {
        Self::grid(graph, layout, current).to_string()
    }
}
