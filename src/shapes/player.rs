use crate::{
    constants::{MAX_YEAR_OF_BIRTH, MIN_YEAR_OF_BIRTH},
    errors::{AppError, ValidationError},
    shapes::enums::PositionEnum,
};
use std::str::FromStr;
use uuid::Uuid;

/// A validated, immutable hockey player record.
///
/// Every field is checked once in [`Player::new`]; a `Player` that exists
/// is always valid, so nothing downstream re-validates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: Uuid,
    name: String,
    position: PositionEnum,
    year_of_birth: i32,
    goals: u32,
}

impl Player {
    /// Builds a player from raw roster data.
    ///
    /// Checks run in field order (name, position, year of birth, goals)
    /// and the first violation is returned as
    /// [`AppError::InvalidArgument`].
    pub fn new(
        name: &str,
        position: &str,
        year_of_birth: i32,
        goals: i32,
    ) -> Result<Self, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::InvalidArgument(ValidationError::PlayerName));
        }
        let position = PositionEnum::from_str(position)?;
        if !(MIN_YEAR_OF_BIRTH..=MAX_YEAR_OF_BIRTH).contains(&year_of_birth) {
            return Err(AppError::InvalidArgument(ValidationError::YearOfBirth(
                year_of_birth,
            )));
        }
        let goals = u32::try_from(goals)
            .map_err(|_| AppError::InvalidArgument(ValidationError::Goals(goals)))?;
        Ok(Player {
            id: Uuid::new_v4(),
            name: name.to_string(),
            position,
            year_of_birth,
            goals,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> PositionEnum {
        self.position
    }

    pub fn year_of_birth(&self) -> i32 {
        self.year_of_birth
    }

    pub fn goals(&self) -> u32 {
        self.goals
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} — {} — born {} — {}G",
            self.name, self.position, self.year_of_birth, self.goals
        )
    }
}
