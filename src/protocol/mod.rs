//! Translation between server response JSON and client metadata.

pub mod constants;
mod json;
pub mod mapper;
pub mod response;
pub mod types;

pub use mapper::{describe_fixed_columns, describe_fixed_view_columns, extract_column_metadata};
pub use response::{check_error, classify_envelope, describe_result_columns, ErrorEnvelope};
pub use types::{ColumnInfo, ColumnMetadata, FixedView, FixedViewColumn, SnowflakeType};
