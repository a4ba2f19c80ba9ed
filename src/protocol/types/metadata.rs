//! Column metadata exposed to result-set consumers.
//!
//! Built exactly once per column by the mapper and never mutated afterwards,
//! so fields are read through accessors only.

use super::snowflake_type::SnowflakeType;

/// Metadata for one result-set column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMetadata {
    pub(crate) name: String,
    pub(crate) column_type: i32,
    pub(crate) nullable: bool,
    pub(crate) length: i32,
    pub(crate) precision: i32,
    pub(crate) scale: i32,
    pub(crate) type_name: String,
    pub(crate) fixed: bool,
    pub(crate) base_type: SnowflakeType,
    pub(crate) database: String,
    pub(crate) schema: String,
    pub(crate) table: String,
}

impl ColumnMetadata {
    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Platform type code (standard SQL code or a vendor extension).
    pub fn column_type(&self) -> i32 {
        self.column_type
    }

    /// External type name, e.g. `NUMBER` or `TIMESTAMPLTZ`.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Whether the column may hold NULL. Always false for fixed-view columns.
    pub fn nullable(&self) -> bool {
        self.nullable
    }

    /// Maximum length of text/binary values; 0 when the server omits it.
    pub fn length(&self) -> i32 {
        self.length
    }

    /// Total number of digits for numeric columns.
    pub fn precision(&self) -> i32 {
        self.precision
    }

    /// Digits after the decimal point. Decides BIGINT vs DECIMAL for NUMBER columns.
    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// Descriptor's `fixed` flag. Always true for fixed-view columns.
    pub fn fixed(&self) -> bool {
        self.fixed
    }

    /// Logical type the column was resolved from.
    pub fn base_type(&self) -> SnowflakeType {
        self.base_type
    }

    /// Source database (empty for synthetic columns).
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Source schema (empty for synthetic columns).
    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// Source table (empty for synthetic columns).
    pub fn table(&self) -> &str {
        &self.table
    }
}
