//! Client-side configuration for the translation layer.

use std::path::PathBuf;

use crate::diagnostics::FileDiagnosticSink;
use crate::error::{Error, Result};
use crate::logging::{self, LogConfig};

pub const ENV_TREAT_DECIMAL_AS_INT: &str = "SNOWFLAKE_TREAT_DECIMAL_AS_INT";
pub const ENV_DIAGNOSTIC_FILE: &str = "SNOWFLAKE_DIAGNOSTIC_FILE";
pub const ENV_LOG_LEVEL: &str = "SNOWFLAKE_LOG_LEVEL";
pub const ENV_LOG_FILE: &str = "SNOWFLAKE_LOG_FILE";

/// Settings that influence mapping and diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WireConfig {
    /// Report scale-0 NUMBER columns as BIGINT instead of DECIMAL.
    pub treat_decimal_as_int: bool,
    /// Where unclassified envelopes are written (temp dir if unset).
    pub diagnostic_file: Option<PathBuf>,
    /// Logging settings.
    pub log: LogConfig,
}

impl WireConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_treat_decimal_as_int(mut self, enabled: bool) -> Self {
        self.treat_decimal_as_int = enabled;
        self
    }

    pub fn with_diagnostic_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.diagnostic_file = Some(path.into());
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log.level = Some(level.into());
        self
    }

    pub fn with_log_file(mut self, path: impl Into<String>) -> Self {
        self.log.file = Some(path.into());
        self
    }

    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, which returns the value for a variable name.
    ///
    /// # Example
    ///
    /// ```
    /// use snowflake_wire_rs::WireConfig;
    ///
    /// let config = WireConfig::from_lookup(|key| match key {
    ///     "SNOWFLAKE_TREAT_DECIMAL_AS_INT" => Some("true".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert!(config.treat_decimal_as_int);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(value) = lookup(ENV_TREAT_DECIMAL_AS_INT) {
            config.treat_decimal_as_int = parse_bool(ENV_TREAT_DECIMAL_AS_INT, &value)?;
        }
        if let Some(value) = lookup(ENV_DIAGNOSTIC_FILE).filter(|v| !v.trim().is_empty()) {
            config.diagnostic_file = Some(PathBuf::from(value));
        }
        config.log.level = lookup(ENV_LOG_LEVEL).filter(|v| !v.trim().is_empty());
        config.log.file = lookup(ENV_LOG_FILE).filter(|v| !v.trim().is_empty());

        Ok(config)
    }

    /// File sink for unclassified envelopes.
    pub fn diagnostic_sink(&self) -> FileDiagnosticSink {
        match &self.diagnostic_file {
            Some(path) => FileDiagnosticSink::new(path),
            None => FileDiagnosticSink::default(),
        }
    }

    /// Install the global log subscriber described by `self.log`.
    ///
    /// See [`logging::init_logging`]; an invalid level from the environment
    /// surfaces here as `Error::InvalidConfig`.
    pub fn init_logging(&self) -> Result<bool> {
        logging::init_logging(&self.log)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(Error::invalid_config(key, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = WireConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, WireConfig::default());
        assert!(!config.treat_decimal_as_int);
    }

    #[test]
    fn test_from_lookup() {
        let config = WireConfig::from_lookup(lookup_from(&[
            (ENV_TREAT_DECIMAL_AS_INT, "TRUE"),
            (ENV_DIAGNOSTIC_FILE, "/tmp/unclassified.json"),
            (ENV_LOG_LEVEL, "debug"),
        ]))
        .unwrap();

        assert!(config.treat_decimal_as_int);
        assert_eq!(config.diagnostic_file, Some(PathBuf::from("/tmp/unclassified.json")));
        assert_eq!(config.log.level.as_deref(), Some("debug"));
        assert!(config.log.file.is_none());
        assert_eq!(
            config.diagnostic_sink().path(),
            std::path::Path::new("/tmp/unclassified.json")
        );
    }

    #[test]
    fn test_invalid_bool() {
        match WireConfig::from_lookup(lookup_from(&[(ENV_TREAT_DECIMAL_AS_INT, "yes please")])) {
            Err(Error::InvalidConfig { key, value }) => {
                assert_eq!(key, ENV_TREAT_DECIMAL_AS_INT);
                assert_eq!(value, "yes please");
            }
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }
    }

    #[test]
    fn test_builder() {
        let config = WireConfig::new()
            .with_treat_decimal_as_int(true)
            .with_diagnostic_file("/var/tmp/out.json")
            .with_log_level("info")
            .with_log_file("/var/tmp/wire.log");
        assert!(config.treat_decimal_as_int);
        assert_eq!(config.log.level.as_deref(), Some("info"));
        assert_eq!(config.log.file.as_deref(), Some("/var/tmp/wire.log"));
    }

    #[test]
    fn test_log_settings_drive_logging_init() {
        let config = WireConfig::from_lookup(lookup_from(&[(ENV_LOG_LEVEL, "verbose")])).unwrap();
        match config.init_logging() {
            Err(Error::InvalidConfig { value, .. }) => assert_eq!(value, "verbose"),
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }

        let config = WireConfig::from_lookup(lookup_from(&[(ENV_LOG_LEVEL, "off")])).unwrap();
        assert!(!config.init_logging().unwrap());

        let dir = tempfile::tempdir().unwrap();
        let log_file = dir.path().join("wire.log");
        let config = WireConfig::from_lookup(lookup_from(&[
            (ENV_LOG_LEVEL, "info"),
            (ENV_LOG_FILE, log_file.to_str().unwrap()),
        ]))
        .unwrap();
        config.init_logging().unwrap();
        assert!(log_file.exists());
    }
}
