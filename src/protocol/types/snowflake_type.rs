//! Logical column types reported by the server.
//!
//! Every wire type name resolves to exactly one variant; unknown names are
//! an error, never a default.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::protocol::constants::*;

/// Server-side base type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnowflakeType {
    Text,
    Char,
    Integer,
    /// Fixed-point NUMBER(p, s).
    Fixed,
    Real,
    Timestamp,
    TimestampLtz,
    TimestampNtz,
    TimestampTz,
    Date,
    Time,
    Boolean,
    Array,
    Object,
    Variant,
    Binary,
}

impl SnowflakeType {
    /// All logical types, in declaration order.
    pub const ALL: [SnowflakeType; 16] = [
        SnowflakeType::Text,
        SnowflakeType::Char,
        SnowflakeType::Integer,
        SnowflakeType::Fixed,
        SnowflakeType::Real,
        SnowflakeType::Timestamp,
        SnowflakeType::TimestampLtz,
        SnowflakeType::TimestampNtz,
        SnowflakeType::TimestampTz,
        SnowflakeType::Date,
        SnowflakeType::Time,
        SnowflakeType::Boolean,
        SnowflakeType::Array,
        SnowflakeType::Object,
        SnowflakeType::Variant,
        SnowflakeType::Binary,
    ];

    /// Resolve a wire type name (case-insensitive, e.g. `"fixed"`, `"timestamp_ltz"`).
    ///
    /// Returns `Err(Error::UnknownColumnType)` for names outside the enumeration.
    pub fn from_wire_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| Error::unknown_column_type(name))
    }

    /// Upper-case name as used on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            SnowflakeType::Text => "TEXT",
            SnowflakeType::Char => "CHAR",
            SnowflakeType::Integer => "INTEGER",
            SnowflakeType::Fixed => "FIXED",
            SnowflakeType::Real => "REAL",
            SnowflakeType::Timestamp => "TIMESTAMP",
            SnowflakeType::TimestampLtz => "TIMESTAMP_LTZ",
            SnowflakeType::TimestampNtz => "TIMESTAMP_NTZ",
            SnowflakeType::TimestampTz => "TIMESTAMP_TZ",
            SnowflakeType::Date => "DATE",
            SnowflakeType::Time => "TIME",
            SnowflakeType::Boolean => "BOOLEAN",
            SnowflakeType::Array => "ARRAY",
            SnowflakeType::Object => "OBJECT",
            SnowflakeType::Variant => "VARIANT",
            SnowflakeType::Binary => "BINARY",
        }
    }

    /// Logical type for a platform type code, used when binding client values.
    ///
    /// Returns `Err(Error::UnsupportedPlatformType)` for codes with no counterpart.
    pub fn from_platform_type(type_code: i32) -> Result<Self> {
        match type_code {
            SQL_TYPE_INTEGER | SQL_TYPE_BIGINT | SQL_TYPE_DECIMAL | SQL_TYPE_NUMERIC
            | SQL_TYPE_SMALLINT | SQL_TYPE_TINYINT => Ok(SnowflakeType::Fixed),
            SQL_TYPE_CHAR | SQL_TYPE_VARCHAR => Ok(SnowflakeType::Text),
            SQL_TYPE_BINARY => Ok(SnowflakeType::Binary),
            SQL_TYPE_FLOAT | SQL_TYPE_DOUBLE => Ok(SnowflakeType::Real),
            SQL_TYPE_DATE => Ok(SnowflakeType::Date),
            SQL_TYPE_TIME => Ok(SnowflakeType::Time),
            SQL_TYPE_TIMESTAMP => Ok(SnowflakeType::Timestamp),
            SQL_TYPE_BOOLEAN => Ok(SnowflakeType::Boolean),
            _ => Err(Error::UnsupportedPlatformType { type_code }),
        }
    }
}

/// Logical type name for a platform type code (e.g. `SQL_TYPE_BIGINT` -> `"FIXED"`).
pub fn platform_type_to_type_name(type_code: i32) -> Result<&'static str> {
    SnowflakeType::from_platform_type(type_code).map(|t| t.name())
}

impl FromStr for SnowflakeType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_wire_name(s)
    }
}

impl fmt::Display for SnowflakeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
