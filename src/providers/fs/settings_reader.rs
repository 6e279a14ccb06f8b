use crate::{
    errors::{AppError, IOError},
    providers::{fs::path::get_config_file_path, settings_reader::SettingsReader},
    shapes::settings::Settings,
};
use serde_json::from_str;
use std::{
    fs::read_to_string,
    io::ErrorKind,
    path::{Path, PathBuf},
};

pub struct FileSystemSettingsReader(PathBuf);

impl FileSystemSettingsReader {
    pub fn new(base_path: &Path) -> Self {
        Self(base_path.to_path_buf())
    }
}

impl SettingsReader for FileSystemSettingsReader {
    /// A missing settings file means "use the defaults"; an unreadable or
    /// malformed one is an error.
    fn read(&self) -> Result<Settings, AppError> {
        let path = get_config_file_path(&self.0);
        let content = match read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Settings::default()),
            Err(e) => return Err(e.into()),
        };
        let settings = from_str::<Settings>(&content).map_err(IOError::from)?;
        Ok(settings)
    }
}
