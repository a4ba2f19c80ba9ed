//! Snowflake wire translation layer.
//!
//! Turns the JSON documents returned by the Snowflake query service into
//! client-side objects: response envelopes become either success or a single
//! classified [`Error`], and column descriptors become [`ColumnMetadata`].
//! Result sets generated by the driver itself describe their columns through
//! [`FixedView`].
//!
//! No network I/O happens here; callers hand over parsed JSON.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use snowflake_wire_rs::{describe_result_columns, NoopDiagnosticSink, Result};
//!
//! fn main() -> Result<()> {
//!     let response = json!({
//!         "success": true,
//!         "data": {
//!             "rowtype": [
//!                 {"name": "ID", "type": "fixed", "precision": 38, "scale": 0},
//!                 {"name": "NAME", "type": "text", "length": 16777216}
//!             ]
//!         }
//!     });
//!
//!     let columns = describe_result_columns(&response, true, &NoopDiagnosticSink)?;
//!     assert_eq!(columns.column_names(), vec!["ID", "NAME"]);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod executor;
pub mod logging;
pub mod protocol;
pub mod util;

// Re-export main types
pub use config::WireConfig;
pub use diagnostics::{
    log_response_details, DiagnosticSink, FileDiagnosticSink, HttpResponseDetails,
    NoopDiagnosticSink,
};
pub use error::{Error, Result, ServerError};
pub use executor::create_default_executor;
pub use logging::{init_logging, LogConfig, LOG_TARGET};
pub use protocol::constants::{EXTRA_TYPES_TIMESTAMP_LTZ, EXTRA_TYPES_TIMESTAMP_TZ};
pub use protocol::{
    check_error, classify_envelope, describe_fixed_columns, describe_fixed_view_columns,
    describe_result_columns, extract_column_metadata, ColumnInfo, ColumnMetadata, ErrorEnvelope,
    FixedView, FixedViewColumn, SnowflakeType,
};
pub use protocol::types::{platform_type_to_type_name, NativeType};
