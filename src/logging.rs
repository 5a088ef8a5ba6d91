use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// The log levels that can be selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and the final result.
    #[default]
    Info,
    /// Every stack operation of the evaluator.
    Debug,
}

impl LogLevel {
    /// Parses a log level leniently.
    ///
    /// The name is trimmed and compared case-insensitively. `ERROR` and
    /// `DEBUG` select those levels; anything else, including no value at all,
    /// selects `INFO`.
    ///
    /// # Example
    /// ```
    /// use letcalc::logging::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse(Some(" debug ")), LogLevel::Debug);
    /// assert_eq!(LogLevel::parse(Some("ERROR")), LogLevel::Error);
    /// assert_eq!(LogLevel::parse(Some("verbose")), LogLevel::Info);
    /// assert_eq!(LogLevel::parse(None), LogLevel::Info);
    /// ```
    #[must_use]
    pub fn parse(name: Option<&str>) -> Self {
        match name.map(|n| n.trim().to_ascii_uppercase()).as_deref() {
            Some("ERROR") => Self::Error,
            Some("DEBUG") => Self::Debug,
            _ => Self::Info,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::ERROR,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
        }
    }
}

/// Installs the global `tracing` subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `level` when it is set. Calling this more
/// than once keeps the first subscriber.
pub fn init(level: LogLevel) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::default().add_directive(LevelFilter::from(level).into())
    };

    let _ = tracing_subscriber::fmt().with_env_filter(filter)
                                     .with_writer(std::io::stderr)
                                     .with_target(false)
                                     .try_init();
}
