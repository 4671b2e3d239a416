//! In-memory row/column table produced from a data handle.

use hu_core::{Error, Result, RingsTable};
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::column::{Column, NamedColumn, RawColumns};

/// Named, equally long columns with dataframe-style access.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawColumns")]
pub struct Table {
    columns: Vec<NamedColumn>,
}

impl Table {
    /// Build a table; every column must have the same length.
    pub fn new(columns: Vec<NamedColumn>) -> Result<Self> {
        for c in &columns {
            if let Column::Vector(j) = &c.column {
                j.validate()?;
            }
        }
        if let Some(first) = columns.first() {
            let n = first.column.len();
            if let Some(bad) = columns.iter().find(|c| c.column.len() != n) {
                return Err(Error::Shape(format!(
                    "column '{}' has {} rows, expected {n}",
                    bad.name,
                    bad.column.len()
                )));
            }
        }
        Ok(Self { columns })
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.columns.first().map(|c| c.column.len()).unwrap_or(0)
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Column names in table order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name).map(|c| &c.column)
    }

    /// Column by name, failing with [`Error::UnknownColumn`].
    pub fn try_column(&self, name: &str) -> Result<&Column> {
        self.column(name).ok_or_else(|| Error::UnknownColumn(name.to_string()))
    }

    /// Scalar column as `f64`.
    pub fn f64_column(&self, name: &str) -> Result<Vec<f64>> {
        self.try_column(name)?
            .to_f64()
            .map_err(|_| Error::TypeMismatch(format!("column '{name}' is not scalar")))
    }

    /// First `n` rows.
    pub fn head(&self, n: usize) -> Self {
        Self {
            columns: self
                .columns
                .iter()
                .map(|c| NamedColumn::new(c.name.clone(), c.column.head(n)))
                .collect(),
        }
    }

    /// All scalar columns as one rows × columns matrix.
    pub fn values(&self) -> Result<DMatrix<f64>> {
        let names = self.column_names();
        self.select_matrix(&names)
    }

    /// Selected scalar columns as a [`RingsTable`] (one ring per column).
    pub fn to_rings_table(&self, columns: &[&str]) -> Result<RingsTable> {
        Ok(RingsTable::from_matrix(self.select_matrix(columns)?))
    }

    /// Stack a fixed-length vector column into a [`RingsTable`].
    pub fn vector_to_rings_table(&self, name: &str) -> Result<RingsTable> {
        let col = self.try_column(name)?;
        let jagged = col.as_vector().ok_or_else(|| {
            Error::TypeMismatch(format!("column '{name}' is {}, expected vector", col.kind()))
        })?;
        if jagged.n_entries() == 0 {
            return Ok(RingsTable::empty(0));
        }
        let width = jagged.fixed_len().ok_or_else(|| {
            Error::Shape(format!("vector column '{name}' has entries of different lengths"))
        })?;
        RingsTable::from_row_major(jagged.n_entries(), width, &jagged.flat)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a table from its JSON form.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    fn select_matrix(&self, columns: &[&str]) -> Result<DMatrix<f64>> {
        let cols = columns.iter().map(|&c| self.f64_column(c)).collect::<Result<Vec<_>>>()?;
        let n_rows = self.n_rows();
        Ok(DMatrix::from_fn(n_rows, cols.len(), |r, c| cols[c][r]))
    }
}

impl TryFrom<RawColumns> for Table {
    type Error = Error;

    fn try_from(raw: RawColumns) -> Result<Self> {
        Self::new(raw.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::JaggedCol;

    fn table() -> Table {
        Table::new(vec![
            NamedColumn::new("e", Column::F64(vec![1.0, 2.0, 3.0])),
            NamedColumn::new("n", Column::I64(vec![4, 5, 6])),
            NamedColumn::new(
                "rings",
                Column::Vector(JaggedCol::from_rows(&[
                    vec![1.0, 0.0],
                    vec![2.0, 1.0],
                    vec![3.0, 2.0],
                ])),
            ),
        ])
        .unwrap()
    }

    #[test]
    fn access_by_name() {
        let t = table();
        assert_eq!(t.n_rows(), 3);
        assert_eq!(t.column_names(), vec!["e", "n", "rings"]);
        assert_eq!(t.f64_column("n").unwrap(), vec![4.0, 5.0, 6.0]);
        assert!(matches!(t.try_column("x"), Err(Error::UnknownColumn(_))));
        assert!(matches!(t.f64_column("rings"), Err(Error::TypeMismatch(_))));
    }

    #[test]
    fn values_rejects_vector_columns() {
        assert!(table().values().is_err());
        let m = table().to_rings_table(&["e", "n"]).unwrap();
        assert_eq!(m.shape(), (3, 2));
        assert_eq!(m.row(1), vec![2.0, 5.0]);
    }

    #[test]
    fn stacks_vector_column() {
        let rings = table().vector_to_rings_table("rings").unwrap();
        assert_eq!(rings.shape(), (3, 2));
        assert_eq!(rings.row(2), vec![3.0, 2.0]);
        assert!(matches!(table().vector_to_rings_table("e"), Err(Error::TypeMismatch(_))));
    }

    #[test]
    fn ragged_vector_column_cannot_stack() {
        let t = Table::new(vec![NamedColumn::new(
            "v",
            Column::Vector(JaggedCol::from_rows(&[vec![1.0], vec![1.0, 2.0]])),
        )])
        .unwrap();
        assert!(matches!(t.vector_to_rings_table("v"), Err(Error::Shape(_))));
    }

    #[test]
    fn head_truncates_every_column() {
        let h = table().head(2);
        assert_eq!(h.n_rows(), 2);
        assert_eq!(h.column("rings").unwrap().len(), 2);
    }

    #[test]
    fn mismatched_lengths_rejected() {
        let err = Table::new(vec![
            NamedColumn::new("a", Column::F64(vec![1.0])),
            NamedColumn::new("b", Column::F64(vec![])),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::Shape(_)));
    }

    #[test]
    fn json_load_checks_column_lengths() {
        let bad = r#"{"columns":[
            {"name":"a","column":{"kind":"f64","values":[1.0,2.0]}},
            {"name":"b","column":{"kind":"f64","values":[1.0]}}
        ]}"#;
        assert!(Table::from_json_str(bad).is_err());
        assert!(serde_json::from_str::<Table>(bad).is_err());
    }

    #[test]
    fn json_round_trip() {
        let t = table();
        let back = Table::from_json_str(&t.to_json_string().unwrap()).unwrap();
        assert_eq!(back, t);
        assert_eq!(back.values().is_err(), t.values().is_err());
    }
}
