use bitvec::prelude::*;
use std::fmt;

use crate::spatial::Position;

/// Fixed-size bitset of visited cells over a `width` × `height` grid
///
/// Bits are laid out row-major. Positions outside the grid are never
/// visited and cannot be inserted.
#[derive(Clone, Debug)]
pub struct VisitedSet {
    bits: BitVec,
    width: usize,
    height: usize,
}

impl VisitedSet {
    /// Create a set with no cells visited
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bits: bitvec![0; width * height],
            width,
            height,
        }
    }

    const fn index(&self, position: Position) -> Option<usize> {
        if position.col < self.width && position.row < self.height {
            Some(position.row * self.width + position.col)
        } else {
            None
        }
    }

    /// Mark a cell as visited
    ///
    /// Returns true if the cell was not visited before
    pub fn insert(&mut self, position: Position) -> bool {
        let Some(index) = self.index(position) else {
            return false;
        };
        if self.bits.get(index).as_deref() == Some(&true) {
            return false;
        }
        self.bits.set(index, true);
        true
    }

    /// Test whether a cell was visited
    pub fn contains(&self, position: Position) -> bool {
        self.index(position)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Count visited cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Whether every cell of the grid was visited
    pub fn is_complete(&self) -> bool {
        self.bits.all()
    }
}

impl fmt::Display for VisitedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VisitedSet({}/{} cells)",
            self.count(),
            self.width * self.height
        )
    }
}
