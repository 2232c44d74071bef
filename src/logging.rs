//! Run-scoped logging
//!
//! This module provides the `Logger` handed to every component that reports
//! an outcome. Each run constructs its own instance; the sinks belong to the
//! instance rather than to the process, so a later run's logger fully
//! replaces an earlier one and log lines are never duplicated across runs.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::SecondsFormat;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{Level, LevelFilter, Log, Record};

use crate::constants::{APP_TITLE, LOG_FILE_DEFAULT, VERSION_TAG};

/// Event sink for one renamer run
///
/// Appends formatted lines (timestamp, application title, version tag,
/// severity, message) to the log file, and mirrors the same lines to the
/// console when verbose mode is enabled. All observable side effects of the
/// engine funnel through here.
pub struct Logger {
    sink: Box<dyn Log>,
}

impl Logger {
    /// Creates a logger writing to the given file
    ///
    /// # Arguments
    /// * `log_file` - The file the log is appended to (created if absent)
    /// * `verbose` - Whether to mirror log lines to stdout
    ///
    /// # Errors
    /// Returns an error if the log file cannot be opened for appending
    pub fn new(log_file: &Path, verbose: bool) -> Result<Logger> {
        let file_logger = Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {} {}] {}",
                    timestamp(),
                    APP_TITLE,
                    VERSION_TAG,
                    record.level(),
                    message
                ))
            })
            .chain(fern::log_file(log_file)?);

        let mut base_logger = Dispatch::new().level(LevelFilter::Info).chain(file_logger);

        if verbose {
            let colors_line = ColoredLevelConfig::new()
                .error(Color::Red)
                .warn(Color::Yellow)
                .info(Color::White)
                .debug(Color::White)
                .trace(Color::BrightBlack);

            let output_logger = Dispatch::new()
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "\x1B[{}m[{} {} {} {}] {}\x1B[0m",
                        colors_line.get_color(&record.level()).to_fg_str(),
                        timestamp(),
                        APP_TITLE,
                        VERSION_TAG,
                        record.level(),
                        message
                    ))
                })
                .chain(std::io::stdout());

            base_logger = base_logger.chain(output_logger);
        }

        let (_, sink) = base_logger.into_log();

        Ok(Logger { sink })
    }

    /// Records an informational message
    pub fn info(&self, message: &str) {
        self.write(Level::Info, message);
    }

    /// Records an error message
    pub fn error(&self, message: &str) {
        self.write(Level::Error, message);
    }

    fn write(&self, level: Level, message: &str) {
        self.sink.log(
            &Record::builder()
                .args(format_args!("{message}"))
                .level(level)
                .target(APP_TITLE)
                .build(),
        );
        self.sink.flush();
    }
}

fn timestamp() -> String {
    chrono::Local::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Returns the default log file location, beside the executable
///
/// Falls back to the current directory when the executable path cannot be
/// determined.
pub fn default_log_file() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(LOG_FILE_DEFAULT)
}

/// Format a message with colour support
pub fn format_message(message: &str, colored_message: &str) -> String {
    if atty::is(atty::Stream::Stdout) {
        colored_message.to_string()
    } else {
        message.to_string()
    }
}
