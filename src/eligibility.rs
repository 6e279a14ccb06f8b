use crate::{ops::player_age, shapes::player::Player};

/// A rule deciding whether a player is eligible given an age floor, a goal
/// floor and the year ages are measured against.
///
/// Any closure `Fn(&Player, i32, u32, i32) -> bool` is a rule, so callers
/// can pass either a named implementation or an inline lambda.
pub trait EligibilityRule {
    fn test(&self, player: &Player, min_age: i32, min_goals: u32, current_year: i32) -> bool;
}

impl<F> EligibilityRule for F
where
    F: Fn(&Player, i32, u32, i32) -> bool,
{
    fn test(&self, player: &Player, min_age: i32, min_goals: u32, current_year: i32) -> bool {
        self(player, min_age, min_goals, current_year)
    }
}

/// Age and goals must both reach their floor.
pub fn age_and_goals_rule() -> impl EligibilityRule {
    |player: &Player, min_age: i32, min_goals: u32, current_year: i32| {
        player_age(player, current_year) >= i64::from(min_age) && player.goals() >= min_goals
    }
}
