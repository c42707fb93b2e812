use crate::config::LoggingConfig;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use std::fs::OpenOptions;

pub const DEFAULT_LOG_FILE: &str = "cutlass.log";

pub fn level_filter(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info, // Default to Info for any other value
    }
}

/// Install the global logger. Output goes to the configured file, or to
/// `cutlass.log` in the working directory.
pub fn setup_logger(logging: &LoggingConfig) -> Result<(), log::SetLoggerError> {
    let colors = ColoredLevelConfig::new()
        .trace(Color::BrightBlack)
        .debug(Color::BrightBlue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    let base_config = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(level_filter(logging.level()));

    let file_path = logging.file().unwrap_or(DEFAULT_LOG_FILE);
    match OpenOptions::new().create(true).append(true).open(file_path) {
        Ok(file) => base_config.chain(file).apply()?,
        Err(e) => {
            eprintln!("Warning: Failed to open log file '{file_path}': {e}");
            eprintln!("Continuing without file logging.");
            base_config.apply()?;
        }
    }

    log::info!(
        "Logger initialized with level: {} (file: {file_path})",
        logging.level()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter_defaults_to_info() {
        assert_eq!(level_filter("DEBUG"), LevelFilter::Debug);
        assert_eq!(level_filter("warn"), LevelFilter::Warn);
        assert_eq!(level_filter("chatty"), LevelFilter::Info);
    }
}
