use crate::error::{Result, SciError};
use chrono::Local;
use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use std::fs::File;
use std::path::PathBuf;

/// "debug", "info", "warn", "error"; "off" and "none" switch logging off. No level means info.
pub fn parse_level(level: Option<&str>) -> Result<LevelFilter> {
    match level {
        None => Ok(LevelFilter::Info),
        Some("debug") => Ok(LevelFilter::Debug),
        Some("info") => Ok(LevelFilter::Info),
        Some("warn") => Ok(LevelFilter::Warn),
        Some("error") => Ok(LevelFilter::Error),
        Some("off") | Some("none") => Ok(LevelFilter::Off),
        Some(other) => Err(SciError::Config(format!(
            "loglevel must be debug, info, warn or error, got {}",
            other
        ))),
    }
}

/// name of the log file written next to the working directory
pub fn log_file_name() -> String {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    format!("log_{}.txt", date_and_time)
}

/// Initializes the global logger: terminal output plus, if `log_to_file`, a `log_<time>.txt` file.
/// Returns the log file path. A logger that was already set up stays in place.
pub fn init_logger(level: Option<&str>, log_to_file: bool) -> Result<Option<PathBuf>> {
    let level = parse_level(level)?;
    if level == LevelFilter::Off {
        return Ok(None);
    }
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    let mut log_path = None;
    if log_to_file {
        let path = PathBuf::from(log_file_name());
        let file = File::create(&path).map_err(|e| SciError::io(&path, e))?;
        loggers.push(WriteLogger::new(level, Config::default(), file));
        log_path = Some(path);
    }
    if CombinedLogger::init(loggers).is_ok() {
        log::info!("logging started with level {}", level);
    }
    Ok(log_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(None).unwrap(), LevelFilter::Info);
        assert_eq!(parse_level(Some("debug")).unwrap(), LevelFilter::Debug);
        assert_eq!(parse_level(Some("none")).unwrap(), LevelFilter::Off);
        assert!(matches!(parse_level(Some("verbose")), Err(SciError::Config(_))));
    }

    #[test]
    fn test_log_file_name() {
        let name = log_file_name();
        assert!(name.starts_with("log_") && name.ends_with(".txt"));
    }

    #[test]
    fn test_init_logger_off() {
        assert_eq!(init_logger(Some("off"), true).unwrap(), None);
    }
}
