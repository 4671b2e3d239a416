//! The columnar data-handle abstraction.

use std::fmt::Display;

use hu_core::Result;

use crate::column::Column;

/// A columnar, possibly lazy, view over event data.
///
/// Column identifiers are whatever the backing framework uses natively
/// (`Self::Name`); callers normalize them through [`Display`].
pub trait ColumnarSource: Sized {
    /// Native column identifier type.
    type Name: Display;

    /// Identifiers of every column, in the handle's order.
    fn column_names(&self) -> Vec<Self::Name>;

    /// Realize the named columns in memory, in the requested order.
    ///
    /// Unknown names fail with [`hu_core::Error::UnknownColumn`].
    fn materialize(&self, columns: &[&str]) -> Result<Vec<(Self::Name, Column)>>;

    /// Return a new handle with an extra column `name`.
    fn define(self, name: &str, column: Column) -> Result<Self>;

    /// Realize every column.
    fn materialize_all(&self) -> Result<Vec<(Self::Name, Column)>> {
        let names: Vec<String> = self.column_names().iter().map(ToString::to_string).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        self.materialize(&refs)
    }
}
