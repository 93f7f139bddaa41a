use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid square index {0}, expected 0..=8")]
    InvalidIndex(usize),
    #[error("Board must be 9 cells of X, O or .")]
    InvalidBoard,
    #[error("Board cannot be reached by alternating moves from X")]
    UnreachableBoard,
}

pub type Result<T> = core::result::Result<T, GameError>;
