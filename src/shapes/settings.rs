use crate::constants::{
    DEFAULT_GOAL_THRESHOLD, DEFAULT_MIN_AGE, DEFAULT_MIN_GOALS, DEFAULT_REFERENCE_YEAR,
};
use serde::{Deserialize, Serialize};

/// Thresholds used by the walkthrough, optionally overridden from
/// `settings.json`. Missing fields fall back to their defaults.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_reference_year")]
    pub reference_year: i32,
    #[serde(default = "default_min_age")]
    pub min_age: i32,
    #[serde(default = "default_min_goals")]
    pub min_goals: u32,
    #[serde(default = "default_goal_threshold")]
    pub goal_threshold: u32,
    #[serde(default)]
    pub log_enabled: bool,
}

fn default_reference_year() -> i32 {
    DEFAULT_REFERENCE_YEAR
}

fn default_min_age() -> i32 {
    DEFAULT_MIN_AGE
}

fn default_min_goals() -> u32 {
    DEFAULT_MIN_GOALS
}

fn default_goal_threshold() -> u32 {
    DEFAULT_GOAL_THRESHOLD
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reference_year: DEFAULT_REFERENCE_YEAR,
            min_age: DEFAULT_MIN_AGE,
            min_goals: DEFAULT_MIN_GOALS,
            goal_threshold: DEFAULT_GOAL_THRESHOLD,
            log_enabled: false,
        }
    }
}
