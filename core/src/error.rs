use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board rows are empty or of unequal length")]
    InvalidBoardShape,
    #[error("Unknown cell symbol {0:?}, expected 'O' or '.'")]
    InvalidCellSymbol(char),
    #[error("Cell key must look like \"y-x\"")]
    InvalidCellKey,
    #[error("Game already won, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
