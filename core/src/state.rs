use serde::{Deserialize, Serialize};

use crate::*;

/// Everything the UI reads. `next_value` and `status` are caches derived from `squares` and
/// `winner` and are only ever recomputed together through [`GameState::from_board`], which is
/// also the only way back in from serde: the state travels as its board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Board", into = "Board")]
pub struct GameState {
    squares: Board,
    winner: Option<Symbol>,
    next_value: Symbol,
    status: Status,
}

impl GameState {
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    pub fn from_board(squares: Board) -> Self {
        let winner = winner(&squares);
        let next_value = next_value(&squares);
        let status = status(winner, &squares, next_value);
        Self {
            squares,
            winner,
            next_value,
            status,
        }
    }

    pub fn squares(&self) -> &Board {
        &self.squares
    }

    pub fn winner(&self) -> Option<Symbol> {
        self.winner
    }

    pub fn next_value(&self) -> Symbol {
        self.next_value
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn winning_line(&self) -> Option<[SquareIndex; 3]> {
        self.winner.and(winning_line(&self.squares))
    }

    pub fn can_select(&self, index: SquareIndex) -> bool {
        self.winner.is_none() && !self.squares.is_occupied(index)
    }

    /// Places the next symbol at `index`. Selecting an occupied square or playing on after a win
    /// hands back an identical state.
    #[must_use]
    pub fn select_square(&self, index: SquareIndex) -> (Self, SelectOutcome) {
        if !self.can_select(index) {
            log::debug!("ignoring select on {}: {}", index, self.status);
            return (*self, SelectOutcome::NoChange);
        }

        let symbol = self.next_value;
        let next = Self::from_board(self.squares.with_mark(index, symbol));
        log::trace!("{} placed on {}, now {}", symbol, index, next.status);

        let outcome = match next.status {
            Status::Winner(symbol) => SelectOutcome::Won(symbol),
            Status::Scratch => SelectOutcome::Drawn,
            Status::NextPlayer(_) => SelectOutcome::Placed,
        };
        (next, outcome)
    }

    #[must_use]
    pub fn restart(&self) -> Self {
        Self::new()
    }
}

impl From<Board> for GameState {
    fn from(squares: Board) -> Self {
        Self::from_board(squares)
    }
}

impl From<GameState> for Board {
    fn from(state: GameState) -> Self {
        state.squares
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Inputs accepted by [`reduce`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    SelectSquare(SquareIndex),
    Restart,
}

pub fn reduce(state: &GameState, action: Action) -> GameState {
    match action {
        Action::SelectSquare(index) => state.select_square(index).0,
        Action::Restart => state.restart(),
    }
}
