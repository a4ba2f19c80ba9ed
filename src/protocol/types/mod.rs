//! Column types and metadata for result schemas.

mod column;
mod fixed_view;
mod metadata;
mod snowflake_type;

pub use column::ColumnInfo;
pub use fixed_view::{ColumnNative, FixedView, FixedViewColumn, NativeType};
pub use metadata::ColumnMetadata;
pub use snowflake_type::{platform_type_to_type_name, SnowflakeType};
