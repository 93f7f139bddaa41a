#![no_std]

extern crate alloc;

use core::fmt;
use core::ops::Index;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use snapshot::*;
pub use state::*;
pub use store::*;
pub use types::*;

mod engine;
mod error;
mod snapshot;
mod state;
mod store;
mod types;

/// The 3x3 grid, stored row-major.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub const fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    pub const fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub const fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub const fn cell(&self, index: SquareIndex) -> Cell {
        self.cells[index.get()]
    }

    pub const fn is_occupied(&self, index: SquareIndex) -> bool {
        self.cell(index).is_some()
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Copy of this board with `symbol` written at `index`, overwriting whatever was there.
    #[must_use]
    pub const fn with_mark(&self, index: SquareIndex, symbol: Symbol) -> Self {
        let mut cells = self.cells;
        cells[index.get()] = Some(symbol);
        Self { cells }
    }
}

impl Index<SquareIndex> for Board {
    type Output = Cell;

    fn index(&self, index: SquareIndex) -> &Self::Output {
        &self.cells[index.get()]
    }
}

/// Parses rows of `X`, `O` and `.` (or `_`, `-`), ignoring whitespace and `/` row separators, so
/// both the `Display` output and `XO./.X./..O` are accepted.
impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let mut cells = [None; CELL_COUNT];
        let mut len = 0;
        for c in s.chars().filter(|&c| !c.is_whitespace() && c != '/') {
            let cell = match c {
                'X' | 'x' => Some(Symbol::X),
                'O' | 'o' => Some(Symbol::O),
                '.' | '_' | '-' => None,
                _ => return Err(GameError::InvalidBoard),
            };
            let slot = cells.get_mut(len).ok_or(GameError::InvalidBoard)?;
            *slot = cell;
            len += 1;
        }
        if len != CELL_COUNT {
            return Err(GameError::InvalidBoard);
        }

        let count = |symbol: Symbol| cells.iter().filter(|&&cell| cell == Some(symbol)).count();
        let (xs, os) = (count(Symbol::X), count(Symbol::O));
        if xs != os && xs != os + 1 {
            return Err(GameError::UnreachableBoard);
        }
        Ok(Self::from_cells(cells))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(SIDE).enumerate() {
            if row > 0 {
                f.write_str("\n")?;
            }
            for cell in cells {
                f.write_str(cell.map_or(".", Symbol::as_str))?;
            }
        }
        Ok(())
    }
}

/// Result of a `SelectSquare` transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    NoChange,
    Placed,
    Won(Symbol),
    Drawn,
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Placed => true,
            Self::Won(_) => true,
            Self::Drawn => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn idx(i: usize) -> SquareIndex {
        SquareIndex::new(i).unwrap()
    }

    #[test]
    fn with_mark_leaves_original_untouched() {
        let board = Board::new();
        let marked = board.with_mark(idx(4), Symbol::X);

        assert!(board.is_empty());
        assert_eq!(marked[idx(4)], Some(Symbol::X));
        assert_eq!(marked.filled_count(), 1);
    }

    #[test]
    fn full_board_is_detected() {
        use Symbol::*;
        #[rustfmt::skip]
        let board = Board::from_cells([
            Some(X), Some(O), Some(X),
            Some(X), Some(O), Some(O),
            Some(O), Some(X), Some(X),
        ]);

        assert!(board.is_full());
        assert_eq!(board.filled_count(), CELL_COUNT);
    }

    #[test]
    fn display_renders_rows() {
        let board = Board::new()
            .with_mark(idx(0), Symbol::X)
            .with_mark(idx(4), Symbol::O);

        assert_eq!(board.to_string(), "X..\n.O.\n...");
    }

    #[test]
    fn parses_its_own_display() {
        let board = Board::new()
            .with_mark(idx(0), Symbol::X)
            .with_mark(idx(4), Symbol::O)
            .with_mark(idx(8), Symbol::X);

        assert_eq!(board.to_string().parse::<Board>(), Ok(board));
        assert_eq!("x../.o./..x".parse::<Board>(), Ok(board));
    }

    #[test]
    fn rejects_malformed_or_unreachable_boards() {
        assert_eq!("XO./...".parse::<Board>(), Err(GameError::InvalidBoard));
        assert_eq!("XO./.../...X".parse::<Board>(), Err(GameError::InvalidBoard));
        assert_eq!("XQ./.../...".parse::<Board>(), Err(GameError::InvalidBoard));
        assert_eq!("XX./.../...".parse::<Board>(), Err(GameError::UnreachableBoard));
        assert_eq!("O../.../...".parse::<Board>(), Err(GameError::UnreachableBoard));
    }

    #[test]
    fn only_no_change_skips_update() {
        assert!(!SelectOutcome::NoChange.has_update());
        assert!(SelectOutcome::Placed.has_update());
        assert!(SelectOutcome::Won(Symbol::O).has_update());
        assert!(SelectOutcome::Drawn.has_update());
    }
}
