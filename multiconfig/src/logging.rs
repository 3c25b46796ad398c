//! Logging infrastructure for the multiconfig library.
//!
//! Resolution reports everything recoverable (missing files, unsupported
//! formats, fallbacks) through a [`LogSink`] passed in by the caller. Two sinks
//! are provided: [`Logger`], a stderr logger with configurable verbosity, and
//! [`MemoryLogger`], which records messages for later inspection.

use std::cell::RefCell;
use std::env;
use std::fmt;

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "MULTICONFIG_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use multiconfig::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Normal output level (errors and warnings).
    Normal,
    /// Verbose output (errors, warnings, info, and debug messages).
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use multiconfig::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// The channel a message was emitted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Diagnostic detail, such as where the combined file is written.
    Debug,
    /// Progress information.
    Info,
    /// A recoverable problem with a single candidate.
    Warning,
    /// A recoverable problem affecting the whole resolution.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Destination for resolution log messages.
///
/// Each severity is an independent channel taking a free-form message.
pub trait LogSink {
    /// Logs a debug message.
    fn debug(&self, message: &str);

    /// Logs an informational message.
    fn info(&self, message: &str);

    /// Logs a warning message.
    fn warn(&self, message: &str);

    /// Logs an error message.
    fn error(&self, message: &str);
}

/// A simple stderr-based logger.
///
/// The logger respects the configured log level and only outputs messages
/// at or above that level.
///
/// # Examples
///
/// ```
/// use multiconfig::{LogLevel, LogSink, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.error("This is an error message");
/// logger.info("This will not be printed (requires Verbose)");
/// ```
#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Returns true if messages of the given severity are printed.
    ///
    /// # Examples
    ///
    /// ```
    /// use multiconfig::{LogLevel, Logger, Severity};
    ///
    /// let logger = Logger::new(LogLevel::Normal);
    /// assert!(logger.enabled(Severity::Warning));
    /// assert!(!logger.enabled(Severity::Debug));
    /// ```
    #[must_use]
    pub fn enabled(&self, severity: Severity) -> bool {
        match severity {
            Severity::Error | Severity::Warning => self.level >= LogLevel::Normal,
            Severity::Info | Severity::Debug => self.level >= LogLevel::Verbose,
        }
    }
}

impl LogSink for Logger {
    fn debug(&self, message: &str) {
        if self.enabled(Severity::Debug) {
            eprintln!("DEBUG: {message}");
        }
    }

    fn info(&self, message: &str) {
        if self.enabled(Severity::Info) {
            eprintln!("INFO: {message}");
        }
    }

    fn warn(&self, message: &str) {
        if self.enabled(Severity::Warning) {
            eprintln!("WARN: {message}");
        }
    }

    fn error(&self, message: &str) {
        if self.enabled(Severity::Error) {
            eprintln!("ERROR: {message}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// A single message captured by [`MemoryLogger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// The channel the message was emitted on.
    pub severity: Severity,
    /// The message text.
    pub message: String,
}

/// A logger that keeps every message in memory, in emission order.
///
/// # Examples
///
/// ```
/// use multiconfig::{LogSink, MemoryLogger, Severity};
///
/// let logger = MemoryLogger::new();
/// logger.warn("first");
/// logger.info("second");
///
/// let records = logger.records();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].severity, Severity::Warning);
/// assert_eq!(records[1].message, "second");
/// ```
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: RefCell<Vec<LogRecord>>,
}

impl MemoryLogger {
    /// Creates an empty logger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every message logged so far.
    #[must_use]
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.borrow().clone()
    }

    /// Returns the messages logged on one channel.
    #[must_use]
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.records
            .borrow()
            .iter()
            .filter(|r| r.severity == severity)
            .map(|r| r.message.clone())
            .collect()
    }

    /// Discards all recorded messages.
    pub fn clear(&self) {
        self.records.borrow_mut().clear();
    }

    fn push(&self, severity: Severity, message: &str) {
        self.records.borrow_mut().push(LogRecord {
            severity,
            message: message.to_string(),
        });
    }
}

impl LogSink for MemoryLogger {
    fn debug(&self, message: &str) {
        self.push(Severity::Debug, message);
    }

    fn info(&self, message: &str) {
        self.push(Severity::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(Severity::Warning, message);
    }

    fn error(&self, message: &str) {
        self.push(Severity::Error, message);
    }
}

/// Initializes a logger based on environment variables and CLI flags.
///
/// The priority order is:
/// 1. CLI flags (verbose/quiet)
/// 2. `MULTICONFIG_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// If both `verbose` and `quiet` are true, `verbose` takes precedence.
///
/// # Examples
///
/// ```
/// use multiconfig::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    if let Ok(env_value) = env::var(LOG_MODE_ENV) {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}
