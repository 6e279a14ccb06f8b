use crate::{errors::AppError, shapes::settings::Settings};

pub trait SettingsReader {
    fn read(&self) -> Result<Settings, AppError>;
}
