//! In-memory implementation of [`ColumnarSource`].

use std::path::Path;

use hu_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::column::{Column, NamedColumn, RawColumns};
use crate::source::ColumnarSource;

/// Owned, column-major event data.
///
/// All columns share the same number of entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawColumns")]
pub struct MemoryFrame {
    columns: Vec<NamedColumn>,
}

impl MemoryFrame {
    /// An empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column. Fails on duplicate names or mismatched lengths.
    pub fn with_column(mut self, name: impl Into<String>, column: Column) -> Result<Self> {
        self.push(NamedColumn::new(name, column))?;
        Ok(self)
    }

    /// Parse a frame from its JSON form.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read a frame from a JSON file.
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Number of entries (0 for a frame without columns).
    pub fn n_rows(&self) -> usize {
        self.columns.first().map(|c| c.column.len()).unwrap_or(0)
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    fn find(&self, name: &str) -> Option<&NamedColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    fn push(&mut self, named: NamedColumn) -> Result<()> {
        if self.find(&named.name).is_some() {
            return Err(Error::Validation(format!("column '{}' already defined", named.name)));
        }
        if let Column::Vector(j) = &named.column {
            j.validate()?;
        }
        if !self.columns.is_empty() && named.column.len() != self.n_rows() {
            return Err(Error::Shape(format!(
                "column '{}' has {} entries, frame has {}",
                named.name,
                named.column.len(),
                self.n_rows()
            )));
        }
        self.columns.push(named);
        Ok(())
    }
}

impl TryFrom<RawColumns> for MemoryFrame {
    type Error = Error;

    fn try_from(raw: RawColumns) -> Result<Self> {
        let mut out = Self::new();
        for c in raw.columns {
            out.push(c)?;
        }
        Ok(out)
    }
}

impl ColumnarSource for MemoryFrame {
    type Name = String;

    fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    fn materialize(&self, columns: &[&str]) -> Result<Vec<(String, Column)>> {
        columns
            .iter()
            .map(|&name| {
                self.find(name)
                    .map(|c| (c.name.clone(), c.column.clone()))
                    .ok_or_else(|| Error::UnknownColumn(name.to_string()))
            })
            .collect()
    }

    fn define(mut self, name: &str, column: Column) -> Result<Self> {
        self.push(NamedColumn::new(name, column))?;
        Ok(self)
    }
}
