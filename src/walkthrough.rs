use crate::{
    eligibility::{age_and_goals_rule, EligibilityRule},
    errors::AppError,
    logging::logger::log_info,
    ops::{
        call_up_supplier, goals_descending, has_min_goals, is_forward, name_printer,
        player_age, player_label, to_upper, total_goals,
    },
    shapes::{player::Player, settings::Settings, team::Team},
};
use std::io::Write;

pub const SAMPLE_TEAM_NAME: &str = "BCIT Blizzards";

/// The starting roster, in the order it is printed.
pub fn sample_team() -> Result<Team, AppError> {
    let players = vec![
        Player::new("Alex Morgan", "F", 2002, 21)?,
        Player::new("Ben Carter", "D", 1999, 6)?,
        Player::new("Casey Young", "F", 2004, 28)?,
        Player::new("Drew Singh", "G", 2000, 0)?,
        Player::new("Eva Chen", "D", 2001, 5)?,
        Player::new("Frank Liu", "F", 1998, 12)?,
    ];
    Team::new(SAMPLE_TEAM_NAME, players)
}

/// Forwards with at least `threshold` goals, in roster order.
pub fn scoring_forwards(roster: &[Player], threshold: u32) -> Vec<&Player> {
    let forward = is_forward();
    let scorer = has_min_goals(threshold);
    roster
        .iter()
        .filter(|&p| forward(p) && scorer(p))
        .collect()
}

pub fn eligible_players<'a, R: EligibilityRule>(
    roster: &'a [Player],
    rule: &R,
    settings: &Settings,
) -> Vec<&'a Player> {
    roster
        .iter()
        .filter(|&p| {
            rule.test(
                p,
                settings.min_age,
                settings.min_goals,
                settings.reference_year,
            )
        })
        .collect()
}

fn write_roster<W: Write>(out: &mut W, title: &str, roster: &[Player]) -> Result<(), AppError> {
    writeln!(out, "{}", title)?;
    for player in roster {
        writeln!(out, "  {}", player)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Runs every step over the sample team, writing the report to `out`.
///
/// The team is returned in its final state: call-up appended and roster
/// sorted by goals, highest first.
pub fn run_walkthrough<W: Write>(out: &mut W, settings: &Settings) -> Result<Team, AppError> {
    let mut team = sample_team()?;

    writeln!(out, "Team: {}", team.name())?;
    write_roster(out, "Initial roster:", team.roster())?;

    // supplier
    let call_up = call_up_supplier()()?;
    log_info(&format!("calling up {} ({})", call_up.name(), call_up.id()));
    team.call_up(call_up);
    write_roster(out, "After call-up added:", team.roster())?;

    // predicates
    log_info(&format!(
        "filtering forwards with at least {} goals",
        settings.goal_threshold
    ));
    writeln!(out, "Forwards with {}+ goals:", settings.goal_threshold)?;
    for player in scoring_forwards(team.roster(), settings.goal_threshold) {
        writeln!(out, "  {} — {}G", player.name(), player.goals())?;
    }
    writeln!(out)?;

    // function
    let label = player_label();
    writeln!(out, "Player labels:")?;
    for player in team.roster() {
        writeln!(out, "  {}", label(player))?;
    }
    writeln!(out)?;

    // consumer
    writeln!(out, "Roster names:")?;
    {
        let mut print_name = name_printer(&mut *out);
        for player in team.roster() {
            print_name(player)?;
        }
    }
    writeln!(out)?;

    // unary operator
    let upper = to_upper();
    writeln!(out, "Roster names (uppercase):")?;
    for player in team.roster() {
        writeln!(out, "  {}", upper(player.name()))?;
    }
    writeln!(out)?;

    // comparator
    team.sort_roster_by(goals_descending());
    log_info("roster sorted by goals, descending");
    writeln!(out, "Roster sorted by goals (desc):")?;
    for player in team.roster() {
        writeln!(out, "  {} — {}G", player.name(), player.goals())?;
    }
    writeln!(out)?;

    // aggregation
    let total = total_goals(team.roster());
    log_info(&format!("total team goals: {}", total));
    writeln!(out, "Total team goals: {}", total)?;
    writeln!(out)?;

    // eligibility rule
    let rule = age_and_goals_rule();
    writeln!(
        out,
        "Eligible players (age >= {} and goals >= {}):",
        settings.min_age, settings.min_goals
    )?;
    for player in eligible_players(team.roster(), &rule, settings) {
        writeln!(
            out,
            "  {} — age {}, {}G",
            player.name(),
            player_age(player, settings.reference_year),
            player.goals()
        )?;
    }

    Ok(team)
}
