//! Pure functions deriving the turn, the winner and the status line from a board.

use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

const fn line(a: u8, b: u8, c: u8) -> [SquareIndex; 3] {
    [
        SquareIndex::new_unchecked(a),
        SquareIndex::new_unchecked(b),
        SquareIndex::new_unchecked(c),
    ]
}

/// Every winning triple: rows, then columns, then diagonals.
pub const LINES: [[SquareIndex; 3]; 8] = [
    line(0, 1, 2),
    line(3, 4, 5),
    line(6, 7, 8),
    line(0, 3, 6),
    line(1, 4, 7),
    line(2, 5, 8),
    line(0, 4, 8),
    line(2, 4, 6),
];

/// Human-readable state of the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Winner(Symbol),
    Scratch,
    NextPlayer(Symbol),
}

impl Status {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Winner(_) | Self::Scratch)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner(symbol) => write!(f, "Winner: {}", symbol),
            Self::Scratch => f.write_str("Scratch: Cat's game"),
            Self::NextPlayer(symbol) => write!(f, "Next player: {}", symbol),
        }
    }
}

/// Symbol to be placed next, `X` on an even number of filled cells.
pub fn next_value(board: &Board) -> Symbol {
    if board.filled_count() % 2 == 0 {
        Symbol::X
    } else {
        Symbol::O
    }
}

/// First line in [`LINES`] fully held by a single symbol.
pub fn winning_line(board: &Board) -> Option<[SquareIndex; 3]> {
    LINES.into_iter().find(|&[a, b, c]| {
        board[a].is_some() && board[a] == board[b] && board[a] == board[c]
    })
}

pub fn winner(board: &Board) -> Option<Symbol> {
    winning_line(board).and_then(|[a, _, _]| board[a])
}

pub fn status(winner: Option<Symbol>, board: &Board, next_value: Symbol) -> Status {
    match winner {
        Some(symbol) => Status::Winner(symbol),
        None if board.is_full() => Status::Scratch,
        None => Status::NextPlayer(next_value),
    }
}
