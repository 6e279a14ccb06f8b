use crate::{
    constants::{APP_DIRECTORY_NAME, LOG_FILE_NAME, SETTINGS_FILE_NAME},
    errors::{AppError, IOError},
};
use dirs::home_dir;
use std::{
    fs::create_dir_all,
    path::{Path, PathBuf},
};

/// `~/.roster4all`, without touching the file system.
pub fn get_base_path() -> Option<PathBuf> {
    home_dir().map(|home| home.join(APP_DIRECTORY_NAME))
}

pub fn get_config_file_path(base_path: &Path) -> PathBuf {
    base_path.join(SETTINGS_FILE_NAME)
}

/// Log file path; the base directory is created on demand.
pub fn get_log_file_path(base_path: &Path) -> Result<PathBuf, AppError> {
    create_dir_all(base_path).map_err(|e| {
        AppError::IO(IOError::Msg(format!(
            "could not create app directory {}: {}",
            base_path.display(),
            e
        )))
    })?;
    Ok(base_path.join(LOG_FILE_NAME))
}
