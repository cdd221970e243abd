//! Minimal stderr logger behind the `log` facade.

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable consulted when `--log-level` is not given.
pub const LOG_ENV: &str = "RECASE_LOG";

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevelArg::Off => LevelFilter::Off,
            LogLevelArg::Error => LevelFilter::Error,
            LogLevelArg::Warn => LevelFilter::Warn,
            LogLevelArg::Info => LevelFilter::Info,
            LogLevelArg::Debug => LevelFilter::Debug,
            LogLevelArg::Trace => LevelFilter::Trace,
        }
    }
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "[{}] {}: {}",
                record.level().as_str().to_ascii_lowercase(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Pick the effective level: the flag wins, then `RECASE_LOG`, then `warn`.
pub fn resolve_level(flag: Option<LogLevelArg>, env: Option<&str>) -> LevelFilter {
    if let Some(level) = flag {
        return level.to_level_filter();
    }
    env.and_then(|value| value.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger. Later calls only adjust the level.
pub fn init(level: LevelFilter) {
    // Fails only when a logger is already installed
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
