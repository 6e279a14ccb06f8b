use crate::constants::{MAX_YEAR_OF_BIRTH, MIN_YEAR_OF_BIRTH};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    #[error("IO error: {0}")]
    IO(#[from] IOError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("player name is not valid")]
    PlayerName,
    #[error("position {0:?} is not valid")]
    Position(String),
    #[error(
        "year of birth {0} must be between {min} and {max}",
        min = MIN_YEAR_OF_BIRTH,
        max = MAX_YEAR_OF_BIRTH
    )]
    YearOfBirth(i32),
    #[error("goals cannot be less than 0 (got {0})")]
    Goals(i32),
    #[error("team name is not valid")]
    TeamName,
    #[error("roster cannot be empty")]
    EmptyRoster,
}

#[derive(Debug, Error)]
pub enum IOError {
    #[error("IO error: {0}")]
    Error(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("{0}")]
    Msg(String),
}

// Shortcut for `io::Error -> IOError::Error -> AppError::IO`, so `?` works
// directly on std I/O calls.
impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::IO(IOError::from(e))
    }
}
