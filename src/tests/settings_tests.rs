mod tests {
    use crate::{
        errors::{AppError, IOError},
        providers::{
            fs::{path::get_config_file_path, settings_reader::FileSystemSettingsReader},
            settings_reader::SettingsReader,
        },
        shapes::settings::Settings,
    };
    use std::{fs, path::PathBuf};
    use uuid::Uuid;

    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("roster4all-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).expect("expected a writable temp dir");
        dir
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = scratch_dir();
        let settings = FileSystemSettingsReader::new(&dir)
            .read()
            .expect("expected default settings");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.reference_year, 2025);
        assert_eq!(settings.min_age, 20);
        assert_eq!(settings.min_goals, 15);
        assert_eq!(settings.goal_threshold, 20);
        assert!(!settings.log_enabled);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = scratch_dir();
        fs::write(
            get_config_file_path(&dir),
            r#"{ "goal_threshold": 10, "log_enabled": true }"#,
        )
        .expect("expected settings to be written");
        let settings = FileSystemSettingsReader::new(&dir)
            .read()
            .expect("expected settings");
        assert_eq!(settings.goal_threshold, 10);
        assert!(settings.log_enabled);
        assert_eq!(settings.reference_year, 2025);
        assert_eq!(settings.min_goals, 15);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn unreadable_file_is_an_io_error() {
        let dir = scratch_dir();
        fs::create_dir_all(get_config_file_path(&dir)).expect("expected a writable temp dir");
        let result = FileSystemSettingsReader::new(&dir).read();
        assert!(matches!(result, Err(AppError::IO(IOError::Error(_)))));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = scratch_dir();
        fs::write(get_config_file_path(&dir), "{ not json").expect("expected settings to be written");
        let result = FileSystemSettingsReader::new(&dir).read();
        assert!(matches!(
            result,
            Err(AppError::IO(IOError::SerializationError(_)))
        ));
        fs::remove_dir_all(dir).ok();
    }
}
