mod constants;
mod eligibility;
mod errors;
mod logging;
mod ops;
mod providers;
mod shapes;
mod walkthrough;

#[cfg(test)]
mod tests;

use crate::{
    errors::AppError,
    logging::logger::{init_logger, log_error, log_info},
    providers::{
        fs::{
            path::{get_base_path, get_log_file_path},
            settings_reader::FileSystemSettingsReader,
        },
        settings_reader::SettingsReader,
    },
    shapes::settings::Settings,
    walkthrough::run_walkthrough,
};
use std::io::{stdout, Write};

fn load_settings() -> Result<Settings, AppError> {
    match get_base_path() {
        Some(base_dir) => {
            let settings = FileSystemSettingsReader::new(&base_dir).read()?;
            if settings.log_enabled {
                init_logger(&get_log_file_path(&base_dir)?)?;
            }
            Ok(settings)
        }
        None => Ok(Settings::default()),
    }
}

fn run() -> Result<(), AppError> {
    let settings = load_settings()?;
    log_info("walkthrough started");
    let stdout = stdout();
    let mut out = stdout.lock();
    run_walkthrough(&mut out, &settings)?;
    out.flush()?;
    log_info("walkthrough finished");
    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return;
    }
    if let Err(err) = run() {
        log_error(&err.to_string());
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
