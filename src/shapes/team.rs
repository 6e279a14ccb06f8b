use crate::{
    errors::{AppError, ValidationError},
    shapes::player::Player,
};
use std::cmp::Ordering;

/// A named team and its ordered roster.
///
/// The name never changes after construction. The roster keeps insertion
/// order and can only grow ([`Team::call_up`]) or be reordered
/// ([`Team::sort_roster_by`]), so it never becomes empty.
#[derive(Debug, Clone)]
pub struct Team {
    name: String,
    roster: Vec<Player>,
}

impl Team {
    pub fn new(name: &str, roster: Vec<Player>) -> Result<Self, AppError> {
        if name.trim().is_empty() {
            Err(AppError::InvalidArgument(ValidationError::TeamName))
        } else if roster.is_empty() {
            Err(AppError::InvalidArgument(ValidationError::EmptyRoster))
        } else {
            Ok(Team {
                name: name.to_string(),
                roster,
            })
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    pub fn call_up(&mut self, player: Player) {
        self.roster.push(player);
    }

    /// Stable in-place sort: players that compare equal keep their order.
    pub fn sort_roster_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Player, &Player) -> Ordering,
    {
        self.roster.sort_by(compare);
    }
}
