pub const APP_DIRECTORY_NAME: &str = ".roster4all";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
pub const LOG_FILE_NAME: &str = "roster4all.log";
pub const MIN_YEAR_OF_BIRTH: i32 = 1970;
pub const MAX_YEAR_OF_BIRTH: i32 = 2025;
pub const DEFAULT_REFERENCE_YEAR: i32 = 2025;
pub const DEFAULT_MIN_AGE: i32 = 20;
pub const DEFAULT_MIN_GOALS: u32 = 15;
pub const DEFAULT_GOAL_THRESHOLD: u32 = 20;
