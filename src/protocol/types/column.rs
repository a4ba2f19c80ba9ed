//! Ordered column set for a result schema.

use super::metadata::ColumnMetadata;

/// Column metadata for every column of a result set, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnInfo {
    columns: Vec<ColumnMetadata>,
}

impl ColumnInfo {
    /// Create column info from already-mapped columns.
    pub fn new(columns: Vec<ColumnMetadata>) -> Self {
        Self { columns }
    }

    /// Get column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Get column by index (0-based).
    pub fn get(&self, index: usize) -> Option<&ColumnMetadata> {
        self.columns.get(index)
    }

    /// Find column index by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// All columns.
    pub fn columns(&self) -> &[ColumnMetadata] {
        &self.columns
    }

    /// Iterate over columns.
    pub fn iter(&self) -> impl Iterator<Item = &ColumnMetadata> {
        self.columns.iter()
    }
}

impl From<Vec<ColumnMetadata>> for ColumnInfo {
    fn from(columns: Vec<ColumnMetadata>) -> Self {
        Self::new(columns)
    }
}

impl IntoIterator for ColumnInfo {
    type Item = ColumnMetadata;
    type IntoIter = std::vec::IntoIter<ColumnMetadata>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}

impl<'a> IntoIterator for &'a ColumnInfo {
    type Item = &'a ColumnMetadata;
    type IntoIter = std::slice::Iter<'a, ColumnMetadata>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
