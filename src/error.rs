//! Error types for the Snowflake wire translation layer.

use std::fmt;
use std::io;
use thiserror::Error;

use crate::protocol::constants::{ERROR_CODE_INTERNAL_ERROR, SQL_STATE_INTERNAL_ERROR};

/// Result type alias for wire translation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A failure reported by the server (or synthesized for an unusable envelope).
///
/// Built once from a response envelope and handed straight back to the
/// caller inside [`Error::Server`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerError {
    /// Query id, or `"unknown"` when the envelope does not carry one.
    pub query_id: String,
    /// Human-readable message.
    pub message: String,
    /// Five-character SQLSTATE.
    pub sql_state: String,
    /// Vendor error code.
    pub error_code: i32,
}

impl ServerError {
    /// Create a new server error.
    pub fn new(
        query_id: impl Into<String>,
        message: impl Into<String>,
        sql_state: impl Into<String>,
        error_code: i32,
    ) -> Self {
        Self {
            query_id: query_id.into(),
            message: message.into(),
            sql_state: sql_state.into(),
            error_code,
        }
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SQL error {} ({}): {} [query id: {}]",
            self.error_code, self.sql_state, self.message, self.query_id
        )
    }
}

/// Error type for wire translation operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Unsuccessful response envelope.
    #[error("{0}")]
    Server(ServerError),

    /// Column descriptor names a type this client does not know.
    #[error("Unknown column type: {type_name}")]
    UnknownColumnType { type_name: String },

    /// Fixed-view column declared with a native type that has no mapping.
    #[error("Unsupported column type: {type_name}")]
    UnsupportedColumnType { type_name: String },

    /// Platform type code with no logical counterpart.
    #[error("Unsupported platform type code: {type_code}")]
    UnsupportedPlatformType { type_code: i32 },

    /// I/O error (diagnostic file, log file).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid configuration value.
    #[error("Invalid configuration value for {key}: {value:?}")]
    InvalidConfig { key: String, value: String },
}

impl Error {
    /// Create a server error.
    pub fn server(
        query_id: impl Into<String>,
        message: impl Into<String>,
        sql_state: impl Into<String>,
        error_code: i32,
    ) -> Self {
        Self::Server(ServerError::new(query_id, message, sql_state, error_code))
    }

    /// Create an unknown column type error.
    pub fn unknown_column_type(type_name: impl Into<String>) -> Self {
        Self::UnknownColumnType {
            type_name: type_name.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidConfig {
            key: key.into(),
            value: value.into(),
        }
    }

    /// SQLSTATE for this error. Client-side failures report the internal-error state.
    pub fn sql_state(&self) -> &str {
        match self {
            Error::Server(e) => &e.sql_state,
            _ => SQL_STATE_INTERNAL_ERROR,
        }
    }

    /// Vendor error code. Client-side failures report the internal-error code.
    pub fn error_code(&self) -> i32 {
        match self {
            Error::Server(e) => e.error_code,
            _ => ERROR_CODE_INTERNAL_ERROR,
        }
    }

    /// Query id, when the failure is tied to a server query.
    pub fn query_id(&self) -> Option<&str> {
        match self {
            Error::Server(e) => Some(&e.query_id),
            _ => None,
        }
    }

    /// Borrow the server error, if this is one.
    pub fn as_server_error(&self) -> Option<&ServerError> {
        match self {
            Error::Server(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ServerError> for Error {
    fn from(e: ServerError) -> Self {
        Error::Server(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_accessors() {
        let err = Error::server("01a2-b3", "Object does not exist", "02000", 2003);
        assert_eq!(err.sql_state(), "02000");
        assert_eq!(err.error_code(), 2003);
        assert_eq!(err.query_id(), Some("01a2-b3"));
        assert_eq!(
            err.to_string(),
            "SQL error 2003 (02000): Object does not exist [query id: 01a2-b3]"
        );
    }

    #[test]
    fn test_mapping_errors_report_internal_state() {
        let err = Error::unknown_column_type("not_a_type");
        assert_eq!(err.sql_state(), SQL_STATE_INTERNAL_ERROR);
        assert_eq!(err.error_code(), ERROR_CODE_INTERNAL_ERROR);
        assert_eq!(err.query_id(), None);
        assert_eq!(err.to_string(), "Unknown column type: not_a_type");
    }
}
