//! The four cardinal directions as a constant lookup table

use std::fmt;

/// One of the four cardinal directions
///
/// Columns grow towards the east and rows grow towards the south, so north
/// is a negative row offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0
    North,
    /// Towards the last row
    South,
    /// Towards the last column
    East,
    /// Towards column 0
    West,
}

#[derive(Debug, Clone, Copy)]
struct DirectionRecord {
    name: &'static str,
    dx: isize,
    dy: isize,
    bit: u8,
    opposite: Direction,
}

// One record per direction, in declaration order
const RECORDS: [DirectionRecord; 4] = [
    DirectionRecord {
        name: "north",
        dx: 0,
        dy: -1,
        bit: 0b0001,
        opposite: Direction::South,
    },
    DirectionRecord {
        name: "south",
        dx: 0,
        dy: 1,
        bit: 0b0010,
        opposite: Direction::North,
    },
    DirectionRecord {
        name: "east",
        dx: 1,
        dy: 0,
        bit: 0b0100,
        opposite: Direction::West,
    },
    DirectionRecord {
        name: "west",
        dx: -1,
        dy: 0,
        bit: 0b1000,
        opposite: Direction::East,
    },
];

impl Direction {
    /// All directions in table order
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Neighbour preference when tracing a path back from the exit
    pub const BACKTRACE_ORDER: [Self; 4] = [Self::West, Self::North, Self::East, Self::South];

    const fn record(self) -> DirectionRecord {
        match self {
            Self::North => RECORDS[0],
            Self::South => RECORDS[1],
            Self::East => RECORDS[2],
            Self::West => RECORDS[3],
        }
    }

    /// Column and row offset of one step in this direction
    pub const fn offset(self) -> (isize, isize) {
        let record = self.record();
        (record.dx, record.dy)
    }

    /// Wall bit used in cell bitmasks
    pub const fn bit(self) -> u8 {
        self.record().bit
    }

    /// The direction pointing back
    pub const fn opposite(self) -> Self {
        self.record().opposite
    }

    /// Lowercase name
    pub const fn name(self) -> &'static str {
        self.record().name
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
