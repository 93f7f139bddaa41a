use core::fmt;
use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Number of cells on a side of the board.
pub const SIDE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = SIDE * SIDE;

/// Marker placed by a player. `X` always moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content of a single square, `None` while it is still free.
pub type Cell = Option<Symbol>;

/// Position of a square in row-major order, always within `0..CELL_COUNT`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct SquareIndex(u8);

impl SquareIndex {
    pub const ALL: [Self; CELL_COUNT] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
    ];

    pub fn new(index: usize) -> Result<Self> {
        if index < CELL_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(GameError::InvalidIndex(index))
        }
    }

    /// Only for indices known to be in range, like the fixed winning lines.
    pub(crate) const fn new_unchecked(index: u8) -> Self {
        Self(index)
    }

    pub const fn get(self) -> usize {
        self.0 as usize
    }

    pub const fn row(self) -> usize {
        self.get() / SIDE
    }

    pub const fn col(self) -> usize {
        self.get() % SIDE
    }
}

impl TryFrom<usize> for SquareIndex {
    type Error = GameError;

    fn try_from(index: usize) -> Result<Self> {
        Self::new(index)
    }
}

impl From<SquareIndex> for usize {
    fn from(index: SquareIndex) -> Self {
        index.get()
    }
}

impl fmt::Display for SquareIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_index_rejects_out_of_range() {
        assert_eq!(SquareIndex::new(9), Err(GameError::InvalidIndex(9)));
        assert_eq!(SquareIndex::try_from(usize::MAX), Err(GameError::InvalidIndex(usize::MAX)));
    }

    #[test]
    fn square_index_row_and_col_are_row_major() {
        let idx = SquareIndex::new(5).unwrap();
        assert_eq!((idx.row(), idx.col()), (1, 2));
        assert_eq!(SquareIndex::ALL[7].get(), 7);
    }
}
