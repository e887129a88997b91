use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Round already complete, no new marks are accepted")]
    RoundOver,
    #[error("Unrecognized mark name")]
    UnknownMark,
}

pub type Result<T> = core::result::Result<T, GameError>;
