//! Logging setup.
//!
//! Library code only emits `tracing` events under the `snowflake_wire_rs`
//! target. Applications without their own subscriber can install one from a
//! [`LogConfig`], usually through [`WireConfig::init_logging`].
//!
//! Level priority: `LogConfig::level`, then `RUST_LOG`, then `warn`.
//!
//! [`WireConfig::init_logging`]: crate::WireConfig::init_logging

use std::fs::OpenOptions;
use std::str::FromStr;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::{self, time::SystemTime, writer::BoxMakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Target every event of this crate is logged under.
pub const LOG_TARGET: &str = "snowflake_wire_rs";

const DEFAULT_LEVEL: &str = "warn";

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// "OFF", "ERROR", "WARN", "INFO", "DEBUG" or "TRACE" (any case).
    pub level: Option<String>,
    /// Log file path, opened in append mode. If unset, logs go to stderr.
    pub file: Option<String>,
}

impl LogConfig {
    /// Filter for this configuration, or `None` when logging is switched off.
    ///
    /// Returns `Err(Error::InvalidConfig)` for an unrecognised level.
    pub fn env_filter(&self) -> Result<Option<EnvFilter>> {
        let Some(level) = &self.level else {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, DEFAULT_LEVEL)));
            return Ok(Some(filter));
        };

        let level = level.trim().to_ascii_lowercase();
        let parsed =
            LevelFilter::from_str(&level).map_err(|_| Error::invalid_config("log level", &level))?;
        if parsed == LevelFilter::OFF {
            return Ok(None);
        }

        Ok(Some(EnvFilter::new(format!("{}={}", LOG_TARGET, level))))
    }

    fn make_writer(&self) -> Result<BoxMakeWriter> {
        match &self.file {
            Some(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                Ok(BoxMakeWriter::new(Mutex::new(file)))
            }
            None => Ok(BoxMakeWriter::new(std::io::stderr)),
        }
    }
}

/// Install a global subscriber built from `config`.
///
/// Returns `Ok(true)` if this call installed it, `Ok(false)` if logging is
/// off or a global subscriber already exists. An unusable level or log file
/// is an error rather than a silent fallback.
pub fn init_logging(config: &LogConfig) -> Result<bool> {
    let Some(filter) = config.env_filter()? else {
        return Ok(false);
    };
    let writer = config.make_writer()?;

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(config.file.is_none())
                .with_timer(SystemTime),
        )
        .try_init()
        .is_ok();

    Ok(installed)
}
