//! Tracing setup for Bouquet
//!
//! Console output is filtered to the chosen level for Bouquet's own crates and
//! the HTTP request spans. A debug log file is written only when a log
//! directory is given.

use std::fs::{File, create_dir_all};
use std::path::{Path, PathBuf};

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// File name of the per-run debug log inside the logs directory.
pub const LOG_FILE_NAME: &str = "bouquet-last-run.log";

/// Targets the console level applies to; everything else is held at `warn`.
const CONSOLE_TARGETS: [&str; 4] = ["bouquet_core", "bouquet_web", "bouquet_cli", "tower_http"];

/// Initialize tracing for a CLI run.
///
/// `RUST_LOG` overrides the console filter. With `logs_dir` set, a full
/// trace of the run also goes to `<logs_dir>/bouquet-last-run.log`,
/// replacing the previous run's file.
///
/// # Errors
/// - `std::io::Error` - Logs directory or log file could not be created
pub fn init_tracing(console_level: Level, logs_dir: Option<&Path>) -> Result<(), std::io::Error> {
    let log_file = open_log_file(logs_dir)?;

    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(console_directives(console_level)));
    let console_layer = fmt::layer().with_target(true).with_filter(console_filter);

    let log_path = log_file.as_ref().map(|(_, path)| path.clone());
    let file_layer = log_file.map(|(file, _)| {
        fmt::layer()
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_writer(file)
            .with_filter(EnvFilter::new("trace"))
    });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    match log_path {
        Some(path) => tracing::debug!(
            level = %console_level,
            file = %path.display(),
            "Tracing initialized"
        ),
        None => tracing::debug!(level = %console_level, "Tracing initialized"),
    }
    Ok(())
}

/// Default console filter: `warn` globally, `level` for Bouquet and request spans.
fn console_directives(level: Level) -> String {
    let level = level.as_str().to_ascii_lowercase();
    let mut directives = String::from("warn");
    for target in CONSOLE_TARGETS {
        directives.push_str(&format!(",{target}={level}"));
    }
    directives
}

/// Creates the run's log file, or nothing when no directory was requested.
fn open_log_file(logs_dir: Option<&Path>) -> Result<Option<(File, PathBuf)>, std::io::Error> {
    let Some(dir) = logs_dir else {
        return Ok(None);
    };
    create_dir_all(dir)?;
    let path = dir.join(LOG_FILE_NAME);
    Ok(Some((File::create(&path)?, path)))
}

/// CLI log levels for user control
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliLogLevel {
    /// Only error messages
    Error,
    /// Warning and error messages
    Warn,
    /// Informational, warning, and error messages
    Info,
    /// Debug, informational, warning, and error messages
    Debug,
    /// All messages including detailed tracing
    Trace,
}

impl CliLogLevel {
    /// Converts CLI log level to tracing Level enum.
    ///
    /// # Examples
    /// ```
    /// use bouquet_core::tracing_setup::CliLogLevel;
    ///
    /// let level = CliLogLevel::Info.as_tracing_level();
    /// assert_eq!(level, tracing::Level::INFO);
    /// ```
    pub fn as_tracing_level(self) -> Level {
        match self {
            CliLogLevel::Error => Level::ERROR,
            CliLogLevel::Warn => Level::WARN,
            CliLogLevel::Info => Level::INFO,
            CliLogLevel::Debug => Level::DEBUG,
            CliLogLevel::Trace => Level::TRACE,
        }
    }
}

impl std::fmt::Display for CliLogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CliLogLevel::Error => "error",
            CliLogLevel::Warn => "warn",
            CliLogLevel::Info => "info",
            CliLogLevel::Debug => "debug",
            CliLogLevel::Trace => "trace",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use clap::ValueEnum;

    use super::*;

    #[test]
    fn test_level_mapping() {
        assert_eq!(CliLogLevel::Warn.as_tracing_level(), Level::WARN);
        assert_eq!(CliLogLevel::Trace.to_string(), "trace");
        assert_eq!(
            CliLogLevel::from_str("debug", true).unwrap(),
            CliLogLevel::Debug
        );
    }

    #[test]
    fn test_console_directives_scope_bouquet_and_http() {
        let directives = console_directives(Level::DEBUG);
        assert!(directives.starts_with("warn,"));
        assert!(directives.contains("bouquet_web=debug"));
        assert!(directives.contains("tower_http=debug"));
        assert!(EnvFilter::try_new(&directives).is_ok());
    }

    #[test]
    fn test_no_logs_dir_writes_nothing() {
        assert!(open_log_file(None).unwrap().is_none());
    }

    #[test]
    fn test_logs_dir_creates_log_file() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("nested").join("logs");

        let (_, path) = open_log_file(Some(&dir)).unwrap().unwrap();
        assert_eq!(path, dir.join(LOG_FILE_NAME));
        assert!(path.is_file());
    }
}
