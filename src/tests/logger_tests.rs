mod tests {
    use crate::{
        errors::{AppError, IOError},
        logging::logger::{format_line, init_logger, log_error, log_info, LogLevelEnum},
    };
    use chrono::NaiveDate;
    use std::fs;
    use uuid::Uuid;

    #[test]
    fn line_format() {
        let at = NaiveDate::from_ymd_opt(2025, 3, 7)
            .and_then(|d| d.and_hms_opt(9, 5, 0))
            .expect("expected a valid timestamp");
        assert_eq!(
            format_line(LogLevelEnum::Info, "walkthrough started", at),
            "[2025-03-07 09:05:00] INFO - walkthrough started\n"
        );
        assert_eq!(
            format_line(LogLevelEnum::Error, "boom", at),
            "[2025-03-07 09:05:00] ERROR - boom\n"
        );
    }

    #[test]
    fn unopenable_log_path_is_an_io_error() {
        let dir = std::env::temp_dir().join(format!("roster4all-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).expect("expected a writable temp dir");
        assert!(matches!(
            init_logger(&dir),
            Err(AppError::IO(IOError::Error(_)))
        ));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn records_are_appended_once_initialized() {
        let path = std::env::temp_dir().join(format!("roster4all-{}.log", Uuid::new_v4()));
        init_logger(&path).expect("expected the log file to open");
        log_info("first record");
        log_error("second record");
        let content = fs::read_to_string(&path).expect("expected a log file");
        assert!(content.contains("INFO - first record"));
        assert!(content.contains("ERROR - second record"));
        fs::remove_file(path).ok();
    }
}
