use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{AppError, ValidationError};

/// The position a hockey player is rostered at.
///
/// Positions are written using the usual one-letter roster codes:
///
/// - **F**: Forward
/// - **D**: Defense
/// - **G**: Goalie
///
/// Parsing is case-sensitive; anything other than one of the three codes
/// is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionEnum {
    #[serde(rename = "F")]
    Forward,
    #[serde(rename = "D")]
    Defense,
    #[serde(rename = "G")]
    Goalie,
}

impl PositionEnum {
    pub fn code(&self) -> &'static str {
        match self {
            PositionEnum::Forward => "F",
            PositionEnum::Defense => "D",
            PositionEnum::Goalie => "G",
        }
    }
}

impl fmt::Display for PositionEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for PositionEnum {
    type Err = AppError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "F" => Ok(PositionEnum::Forward),
            "D" => Ok(PositionEnum::Defense),
            "G" => Ok(PositionEnum::Goalie),
            _ => Err(AppError::InvalidArgument(ValidationError::Position(
                s.to_string(),
            ))),
        }
    }
}
