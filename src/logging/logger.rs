use crate::errors::{AppError, IOError};
use chrono::{Local, NaiveDateTime};
use std::{
    fmt,
    fs::{File, OpenOptions},
    io::Write,
    path::Path,
    sync::Mutex,
};

static LOGGER: once_cell::sync::Lazy<Mutex<Logger>> =
    once_cell::sync::Lazy::new(|| Mutex::new(Logger { sink: None }));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevelEnum {
    Info,
    Error,
}

impl fmt::Display for LogLevelEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LogLevelEnum::Info => "INFO",
            LogLevelEnum::Error => "ERROR",
        };
        write!(f, "{}", label)
    }
}

/// Append-only file sink. With no sink attached every record is dropped,
/// which is the state the walkthrough runs in unless logging is enabled.
struct Logger {
    sink: Option<File>,
}

impl Logger {
    fn record(&mut self, level: LogLevelEnum, message: &str) {
        if let Some(file) = self.sink.as_mut() {
            let line = format_line(level, message, Local::now().naive_local());
            // write failures are ignored
            let _ = file.write_all(line.as_bytes());
        }
    }
}

pub fn format_line(level: LogLevelEnum, message: &str, at: NaiveDateTime) -> String {
    format!("[{}] {} - {}\n", at.format("%Y-%m-%d %H:%M:%S"), level, message)
}

/// Opens (or creates) `log_path` for appending and routes every later
/// `log_*` call to it.
pub fn init_logger(log_path: &Path) -> Result<(), AppError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;
    let mut logger = LOGGER
        .lock()
        .map_err(|_| AppError::IO(IOError::Msg("logger lock poisoned".to_string())))?;
    logger.sink = Some(file);
    Ok(())
}

pub fn log_info(message: &str) {
    if let Ok(mut logger) = LOGGER.lock() {
        logger.record(LogLevelEnum::Info, message);
    }
}

pub fn log_error(message: &str) {
    if let Ok(mut logger) = LOGGER.lock() {
        logger.record(LogLevelEnum::Error, message);
    }
}
