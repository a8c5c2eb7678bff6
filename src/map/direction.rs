use glam::IVec2;
use strum_macros::{AsRefStr, EnumIter};

use crate::constants::ROOM_SPACING;

/// The four compass directions a room can link in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// The order rooms are visited in during layout.
    pub const DIRECTIONS: [Direction; 4] = [Direction::North, Direction::South, Direction::East, Direction::West];

    /// The order exits are listed in when offering moves to the player.
    pub const MOVE_ORDER: [Direction; 4] = [Direction::East, Direction::West, Direction::North, Direction::South];

    /// The single character used for this direction in map files and move commands.
    pub const fn token(self) -> char {
        match self {
            Direction::North => 'n',
            Direction::South => 's',
            Direction::East => 'e',
            Direction::West => 'w',
        }
    }

    /// Parses a single direction character. Case-sensitive.
    pub const fn from_token(c: char) -> Option<Direction> {
        match c {
            'n' => Some(Direction::North),
            's' => Some(Direction::South),
            'e' => Some(Direction::East),
            'w' => Some(Direction::West),
            _ => None,
        }
    }

    /// Returns the unit offset as an IVec2, with `x` as column and `y` as row.
    pub fn as_ivec2(self) -> IVec2 {
        self.into()
    }

    /// Offset between a room and its neighbor in this direction on the layout grid.
    pub fn layout_offset(self) -> IVec2 {
        self.as_ivec2() * ROOM_SPACING
    }

    /// Returns `true` for east and west.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::East | Direction::West)
    }
}

impl From<Direction> for IVec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::North => -IVec2::Y,
            Direction::South => IVec2::Y,
            Direction::East => IVec2::X,
            Direction::West => -IVec2::X,
        }
    }
}
