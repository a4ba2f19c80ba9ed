//! Wire protocol constants.
//!
//! Platform type codes follow the standard SQL type-code numbering used by
//! JDBC/ODBC drivers; two vendor extensions sit well above that range.

// Error classification
pub const SQL_STATE_INTERNAL_ERROR: &str = "XX000";
pub const ERROR_CODE_INTERNAL_ERROR: i32 = 200001;
pub const MESSAGE_NO_ERROR_CODE: &str = "no error code from server";
pub const QUERY_ID_UNKNOWN: &str = "unknown";

// Standard platform type codes
pub const SQL_TYPE_CHAR: i32 = 1;
pub const SQL_TYPE_NUMERIC: i32 = 2;
pub const SQL_TYPE_DECIMAL: i32 = 3;
pub const SQL_TYPE_INTEGER: i32 = 4;
pub const SQL_TYPE_SMALLINT: i32 = 5;
pub const SQL_TYPE_FLOAT: i32 = 6;
pub const SQL_TYPE_DOUBLE: i32 = 8;
pub const SQL_TYPE_VARCHAR: i32 = 12;
pub const SQL_TYPE_BOOLEAN: i32 = 16;
pub const SQL_TYPE_DATE: i32 = 91;
pub const SQL_TYPE_TIME: i32 = 92;
pub const SQL_TYPE_TIMESTAMP: i32 = 93;
pub const SQL_TYPE_TINYINT: i32 = -6;
pub const SQL_TYPE_BIGINT: i32 = -5;
pub const SQL_TYPE_BINARY: i32 = -2;

// Vendor extensions (timezone-aware timestamps)
pub const EXTRA_TYPES_TIMESTAMP_LTZ: i32 = 50000;
pub const EXTRA_TYPES_TIMESTAMP_TZ: i32 = 50001;

// Synthetic fixed-view column placeholders
pub const FIXED_VIEW_COLUMN_LENGTH: i32 = 20480;
pub const FIXED_VIEW_COLUMN_PRECISION: i32 = 10;
pub const FIXED_VIEW_COLUMN_SCALE: i32 = 0;

// Response envelope fields
pub const FIELD_SUCCESS: &str = "success";
pub const FIELD_CODE: &str = "code";
pub const FIELD_MESSAGE: &str = "message";
pub const FIELD_DATA: &str = "data";
pub const FIELD_SQL_STATE: &str = "sqlState";
pub const FIELD_ERROR_CODE: &str = "errorCode";
pub const FIELD_QUERY_ID: &str = "queryId";
pub const FIELD_ROW_TYPE: &str = "rowtype";
