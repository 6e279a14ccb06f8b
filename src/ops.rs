use crate::{
    errors::AppError,
    shapes::{enums::PositionEnum, player::Player},
};
use std::{cmp::Ordering, io::Write};

const CALL_UP_NAME: &str = "Jordan Park";
const CALL_UP_POSITION: &str = "F";
const CALL_UP_YEAR_OF_BIRTH: i32 = 2003;
const CALL_UP_GOALS: i32 = 3;

/// Supplier of the player called up from the farm team mid-walkthrough.
pub fn call_up_supplier() -> impl Fn() -> Result<Player, AppError> {
    || {
        Player::new(
            CALL_UP_NAME,
            CALL_UP_POSITION,
            CALL_UP_YEAR_OF_BIRTH,
            CALL_UP_GOALS,
        )
    }
}

pub fn is_forward() -> impl Fn(&Player) -> bool {
    |player| player.position() == PositionEnum::Forward
}

pub fn has_min_goals(min_goals: u32) -> impl Fn(&Player) -> bool {
    move |player| player.goals() >= min_goals
}

pub fn player_label() -> impl Fn(&Player) -> String {
    |player| format!("{} — {}G", player.name(), player.goals())
}

/// Consumer printing each player's name on its own line.
///
/// Write failures are handed back to the caller rather than swallowed.
pub fn name_printer<W: Write>(out: &mut W) -> impl FnMut(&Player) -> std::io::Result<()> + '_ {
    move |player| writeln!(out, "{}", player.name())
}

pub fn to_upper() -> impl Fn(&str) -> String {
    str::to_uppercase
}

pub fn goals_descending() -> impl Fn(&Player, &Player) -> Ordering {
    |a, b| b.goals().cmp(&a.goals())
}

/// Sums in `u64`: a roster of `i32::MAX`-goal players cannot overflow it.
pub fn total_goals(roster: &[Player]) -> u64 {
    roster
        .iter()
        .fold(0u64, |total, player| total + u64::from(player.goals()))
}

/// Widened to `i64` so any configured reference year is representable.
pub fn player_age(player: &Player, current_year: i32) -> i64 {
    i64::from(current_year) - i64::from(player.year_of_birth())
}
