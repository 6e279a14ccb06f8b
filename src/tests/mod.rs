mod logger_tests;
mod settings_tests;
