//! Tile sides and a typed four-slot container indexed by side
//!
//! Sides are cyclic in clockwise order (North, East, South, West) so a quarter
//! turn of a tile is a cyclic shift of every per-side array it owns.

use std::fmt;
use std::ops::{Index, IndexMut};

/// One side of a square tile
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    /// Top edge
    North,
    /// Right edge
    East,
    /// Bottom edge
    South,
    /// Left edge
    West,
}

/// Geometry attached to a side
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SideRule {
    /// Side facing this one across a shared edge
    pub opposite: Side,
    /// Row delta to the grid cell beyond this side
    pub row_delta: isize,
    /// Column delta to the grid cell beyond this side
    pub col_delta: isize,
}

const SIDE_RULES: [SideRule; 4] = [
    SideRule {
        opposite: Side::South,
        row_delta: -1,
        col_delta: 0,
    },
    SideRule {
        opposite: Side::West,
        row_delta: 0,
        col_delta: 1,
    },
    SideRule {
        opposite: Side::North,
        row_delta: 1,
        col_delta: 0,
    },
    SideRule {
        opposite: Side::East,
        row_delta: 0,
        col_delta: -1,
    },
];

impl Side {
    /// All sides in clockwise order starting at North
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Position of this side in clockwise order
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// Geometry rule for this side
    pub const fn rule(self) -> SideRule {
        match self {
            Self::North => SIDE_RULES[0],
            Self::East => SIDE_RULES[1],
            Self::South => SIDE_RULES[2],
            Self::West => SIDE_RULES[3],
        }
    }

    /// The side facing this one on a neighbouring tile
    pub const fn opposite(self) -> Self {
        self.rule().opposite
    }

    /// Grid cell reached by stepping across this side from `(row, col)`
    ///
    /// Returns `None` when the step leaves a `rows` x `cols` grid.
    pub const fn step(
        self,
        (row, col): (usize, usize),
        rows: usize,
        cols: usize,
    ) -> Option<(usize, usize)> {
        let rule = self.rule();
        let (Some(next_row), Some(next_col)) = (
            row.checked_add_signed(rule.row_delta),
            col.checked_add_signed(rule.col_delta),
        ) else {
            return None;
        };

        if next_row < rows && next_col < cols {
            Some((next_row, next_col))
        } else {
            None
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(name)
    }
}

/// Four values, one per side
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sides<T>([T; 4]);

impl<T> Sides<T> {
    /// Build from values ordered North, East, South, West
    pub const fn new(values: [T; 4]) -> Self {
        Self(values)
    }

    /// Iterate `(side, value)` pairs in clockwise order
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.0.iter())
    }

    /// Iterate values in clockwise order
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    /// Mutable iteration over values in clockwise order
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.0.iter_mut()
    }

    /// Shift every value one side clockwise (North moves to East)
    pub fn rotate_cw(&mut self) {
        self.0.rotate_right(1);
    }

    /// Exchange the East and West values
    pub fn swap_east_west(&mut self) {
        self.0.swap(Side::East.index(), Side::West.index());
    }
}

impl<T> Index<Side> for Sides<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        let [north, east, south, west] = &self.0;
        match side {
            Side::North => north,
            Side::East => east,
            Side::South => south,
            Side::West => west,
        }
    }
}

impl<T> IndexMut<Side> for Sides<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        let [north, east, south, west] = &mut self.0;
        match side {
            Side::North => north,
            Side::East => east,
            Side::South => south,
            Side::West => west,
        }
    }
}
