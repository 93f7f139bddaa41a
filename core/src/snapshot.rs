use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

use crate::*;

/// Flat, UI-facing view of a [`GameState`], with the status already rendered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub squares: [Cell; CELL_COUNT],
    pub winner: Option<Symbol>,
    pub next_value: Symbol,
    pub status: String,
}

impl Snapshot {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            squares: *state.squares().cells(),
            winner: state.winner(),
            next_value: state.next_value(),
            status: state.status().to_string(),
        }
    }
}

impl From<&GameState> for Snapshot {
    fn from(state: &GameState) -> Self {
        Self::from_state(state)
    }
}
