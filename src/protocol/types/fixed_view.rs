//! Column declarations for driver-generated (fixed-view) result sets.
//!
//! A record type that the driver turns into rows itself implements
//! [`FixedView`] and lists its columns as `(name, ordinal, native type)`.
//! Output column order is the ordinal order.

use std::fmt;

/// Native field type of a fixed-view column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeType {
    I32,
    I64,
    String,
    Bool,
    F64,
    Bytes,
}

impl NativeType {
    /// Rust spelling of the type, used in error messages.
    pub fn rust_name(&self) -> &'static str {
        match self {
            NativeType::I32 => "i32",
            NativeType::I64 => "i64",
            NativeType::String => "String",
            NativeType::Bool => "bool",
            NativeType::F64 => "f64",
            NativeType::Bytes => "Vec<u8>",
        }
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rust_name())
    }
}

/// Rust types usable as fixed-view fields.
pub trait ColumnNative {
    const NATIVE_TYPE: NativeType;
}

impl ColumnNative for i32 {
    const NATIVE_TYPE: NativeType = NativeType::I32;
}

impl ColumnNative for i64 {
    const NATIVE_TYPE: NativeType = NativeType::I64;
}

impl ColumnNative for String {
    const NATIVE_TYPE: NativeType = NativeType::String;
}

impl ColumnNative for &str {
    const NATIVE_TYPE: NativeType = NativeType::String;
}

impl ColumnNative for bool {
    const NATIVE_TYPE: NativeType = NativeType::Bool;
}

impl ColumnNative for f64 {
    const NATIVE_TYPE: NativeType = NativeType::F64;
}

impl ColumnNative for Vec<u8> {
    const NATIVE_TYPE: NativeType = NativeType::Bytes;
}

/// One declared fixed-view column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedViewColumn {
    /// Column name exposed in the result set.
    pub name: &'static str,
    /// Position in the result set (ascending).
    pub ordinal: u32,
    /// Native type of the backing field.
    pub native_type: NativeType,
}

impl FixedViewColumn {
    /// Declare a column with an explicit native type.
    pub const fn new(name: &'static str, ordinal: u32, native_type: NativeType) -> Self {
        Self {
            name,
            ordinal,
            native_type,
        }
    }

    /// Declare a column whose native type is taken from `T`.
    ///
    /// ```
    /// use snowflake_wire_rs::protocol::types::{FixedViewColumn, NativeType};
    ///
    /// let col = FixedViewColumn::of::<i64>("ROWS_PRODUCED", 2);
    /// assert_eq!(col.native_type, NativeType::I64);
    /// ```
    pub const fn of<T: ColumnNative>(name: &'static str, ordinal: u32) -> Self {
        Self::new(name, ordinal, T::NATIVE_TYPE)
    }
}

/// A record type rendered as a driver-generated result set.
pub trait FixedView {
    /// Columns declared directly on this record, in declaration order.
    fn declared_columns() -> &'static [FixedViewColumn];

    /// Columns inherited from an embedded base record, in declaration order.
    fn inherited_columns() -> Vec<FixedViewColumn> {
        Vec::new()
    }

    /// Inherited columns followed by declared ones.
    fn all_columns() -> Vec<FixedViewColumn> {
        let mut columns = Self::inherited_columns();
        columns.extend_from_slice(Self::declared_columns());
        columns
    }
}
