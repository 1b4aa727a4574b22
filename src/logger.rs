//! Console backend for the `log` facade used by the course programs.

use colored::Colorize;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Writes `[LEVEL] target: message` lines to stderr.
pub struct ConsoleLogger {
    level: LevelFilter,
    colors: bool,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self::with_colors(level, should_use_colors())
    }

    pub fn with_colors(level: LevelFilter, colors: bool) -> Self {
        Self { level, colors }
    }

    fn tag(&self, level: Level) -> String {
        let tag = format!("[{level:<5}]");
        if !self.colors {
            return tag;
        }
        match level {
            Level::Error => tag.red().bold().to_string(),
            Level::Warn => tag.yellow().to_string(),
            Level::Info => tag.green().to_string(),
            Level::Debug => tag.blue().to_string(),
            Level::Trace => tag.dimmed().to_string(),
        }
    }

    pub fn format_record(&self, record: &Record<'_>) -> String {
        format!(
            "{} {}: {}",
            self.tag(record.level()),
            record.target(),
            record.args()
        )
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", self.format_record(record));
        }
    }

    fn flush(&self) {}
}

/// Colour is on unless `NO_COLOR` is set.
pub fn should_use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Installs [`ConsoleLogger`] as the global logger. Fails if a logger is
/// already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}
