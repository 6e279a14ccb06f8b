pub mod fs;
pub mod settings_reader;
