//! Column metadata mapping.
//!
//! Two entry points: [`extract_column_metadata`] maps one column descriptor
//! from a live query response, and [`describe_fixed_view_columns`] builds the
//! schema of a driver-generated result set from its static declaration.

use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::protocol::constants::*;
use crate::protocol::json::{as_bool, as_int, as_text};
use crate::protocol::types::{ColumnMetadata, FixedView, FixedViewColumn, NativeType, SnowflakeType};

/// One entry of `data.rowtype` in a query response.
///
/// Fields are coerced leniently; absent, `null` or unparseable fields take
/// their zero value.
#[derive(Debug, Clone, Default)]
struct ColumnDescriptor {
    name: String,
    type_name: String,
    nullable: bool,
    precision: i32,
    scale: i32,
    length: i32,
    fixed: bool,
    database: String,
    schema: String,
    table: String,
}

impl ColumnDescriptor {
    fn from_value(col: &Value) -> Self {
        Self {
            name: as_text(col.get("name")),
            type_name: as_text(col.get("type")),
            nullable: as_bool(col.get("nullable")),
            precision: as_int(col.get("precision")),
            scale: as_int(col.get("scale")),
            length: as_int(col.get("length")),
            fixed: as_bool(col.get("fixed")),
            database: as_text(col.get("database")),
            schema: as_text(col.get("schema")),
            table: as_text(col.get("table")),
        }
    }
}

/// Platform type code and external type name for a logical type.
///
/// Fixed-point columns with scale 0 report BIGINT instead of DECIMAL when
/// `treat_decimal_as_int` is set; the external name stays `NUMBER`.
pub fn platform_type(
    base_type: SnowflakeType,
    scale: i32,
    treat_decimal_as_int: bool,
) -> (i32, &'static str) {
    match base_type {
        SnowflakeType::Text => (SQL_TYPE_VARCHAR, "VARCHAR"),
        SnowflakeType::Char => (SQL_TYPE_CHAR, "CHAR"),
        SnowflakeType::Integer => (SQL_TYPE_INTEGER, "INTEGER"),
        SnowflakeType::Fixed => {
            if treat_decimal_as_int && scale == 0 {
                (SQL_TYPE_BIGINT, "NUMBER")
            } else {
                (SQL_TYPE_DECIMAL, "NUMBER")
            }
        }
        SnowflakeType::Real => (SQL_TYPE_DOUBLE, "DOUBLE"),
        SnowflakeType::Timestamp | SnowflakeType::TimestampLtz => {
            (EXTRA_TYPES_TIMESTAMP_LTZ, "TIMESTAMPLTZ")
        }
        SnowflakeType::TimestampNtz => (SQL_TYPE_TIMESTAMP, "TIMESTAMPNTZ"),
        SnowflakeType::TimestampTz => (EXTRA_TYPES_TIMESTAMP_TZ, "TIMESTAMPTZ"),
        SnowflakeType::Date => (SQL_TYPE_DATE, "DATE"),
        SnowflakeType::Time => (SQL_TYPE_TIME, "TIME"),
        SnowflakeType::Boolean => (SQL_TYPE_BOOLEAN, "BOOLEAN"),
        // Semi-structured values surface as JSON text.
        SnowflakeType::Array => (SQL_TYPE_VARCHAR, "ARRAY"),
        SnowflakeType::Object => (SQL_TYPE_VARCHAR, "OBJECT"),
        SnowflakeType::Variant => (SQL_TYPE_VARCHAR, "VARIANT"),
        SnowflakeType::Binary => (SQL_TYPE_BINARY, "BINARY"),
    }
}

/// Map one column descriptor from a query response to column metadata.
///
/// Returns `Err(Error::UnknownColumnType)` if the descriptor's `type` is
/// missing, not a string, or not a known logical type.
pub fn extract_column_metadata(col: &Value, treat_decimal_as_int: bool) -> Result<ColumnMetadata> {
    let desc = ColumnDescriptor::from_value(col);
    let base_type = SnowflakeType::from_wire_name(&desc.type_name)?;
    let (column_type, type_name) = platform_type(base_type, desc.scale, treat_decimal_as_int);

    debug!(
        column = %desc.name,
        wire_type = %desc.type_name,
        column_type,
        type_name,
        "mapped column"
    );

    Ok(ColumnMetadata {
        name: desc.name,
        column_type,
        nullable: desc.nullable,
        length: desc.length,
        precision: desc.precision,
        scale: desc.scale,
        type_name: type_name.to_string(),
        fixed: desc.fixed,
        base_type,
        database: desc.database,
        schema: desc.schema,
        table: desc.table,
    })
}

/// Map every descriptor of a `rowtype` array, preserving order.
pub fn extract_row_type(row_type: &[Value], treat_decimal_as_int: bool) -> Result<Vec<ColumnMetadata>> {
    row_type
        .iter()
        .map(|col| extract_column_metadata(col, treat_decimal_as_int))
        .collect()
}

/// Build the schema of a driver-generated result set of record type `V`.
pub fn describe_fixed_view_columns<V: FixedView>() -> Result<Vec<ColumnMetadata>> {
    describe_fixed_columns(V::all_columns())
}

/// Build a fixed-view schema from explicit column declarations.
///
/// Columns are stably sorted by ordinal, so equal ordinals keep their
/// declaration order. Native types other than `i32`, `i64` and `String`
/// are rejected with `Err(Error::UnsupportedColumnType)`.
pub fn describe_fixed_columns(mut columns: Vec<FixedViewColumn>) -> Result<Vec<ColumnMetadata>> {
    columns.sort_by_key(|c| c.ordinal);

    columns
        .into_iter()
        .map(|column| {
            // 64-bit integers are labelled DECIMAL here, unlike NUMBER for
            // live fixed-point columns.
            let (column_type, type_name, base_type) = match column.native_type {
                NativeType::I32 => (SQL_TYPE_INTEGER, "INTEGER", SnowflakeType::Integer),
                NativeType::I64 => (SQL_TYPE_DECIMAL, "DECIMAL", SnowflakeType::Integer),
                NativeType::String => (SQL_TYPE_VARCHAR, "VARCHAR", SnowflakeType::Text),
                other => {
                    return Err(Error::UnsupportedColumnType {
                        type_name: other.rust_name().to_string(),
                    })
                }
            };

            Ok(ColumnMetadata {
                name: column.name.to_string(),
                column_type,
                nullable: false,
                length: FIXED_VIEW_COLUMN_LENGTH,
                precision: FIXED_VIEW_COLUMN_PRECISION,
                scale: FIXED_VIEW_COLUMN_SCALE,
                type_name: type_name.to_string(),
                fixed: true,
                base_type,
                database: String::new(),
                schema: String::new(),
                table: String::new(),
            })
        })
        .collect()
}
