//! Column storage shared by handles and tables.

use hu_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// A jagged (variable-length) column: flat values + per-entry offsets.
///
/// `offsets` has length `n_entries + 1`. Entry `i` has values
/// `flat[offsets[i]..offsets[i+1]]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawJagged")]
pub struct JaggedCol {
    /// Flat array of all values across all entries.
    pub flat: Vec<f64>,
    /// Entry boundaries: `offsets.len() == n_entries + 1`.
    pub offsets: Vec<usize>,
}

#[derive(Deserialize)]
struct RawJagged {
    flat: Vec<f64>,
    offsets: Vec<usize>,
}

impl TryFrom<RawJagged> for JaggedCol {
    type Error = Error;

    fn try_from(raw: RawJagged) -> Result<Self> {
        let col = Self { flat: raw.flat, offsets: raw.offsets };
        col.validate()?;
        Ok(col)
    }
}

impl Default for JaggedCol {
    fn default() -> Self {
        Self { flat: Vec::new(), offsets: vec![0] }
    }
}

impl JaggedCol {
    /// Build from one vector per entry.
    pub fn from_rows(rows: &[Vec<f64>]) -> Self {
        let mut flat = Vec::with_capacity(rows.iter().map(Vec::len).sum());
        let mut offsets = Vec::with_capacity(rows.len() + 1);
        offsets.push(0);
        for r in rows {
            flat.extend_from_slice(r);
            offsets.push(flat.len());
        }
        Self { flat, offsets }
    }

    /// Check that offsets are monotonic and end at `flat.len()`.
    pub fn validate(&self) -> Result<()> {
        if self.offsets.first() != Some(&0) {
            return Err(Error::Validation("jagged offsets must start at 0".into()));
        }
        if self.offsets.windows(2).any(|w| w[1] < w[0]) {
            return Err(Error::Validation("jagged offsets must be non-decreasing".into()));
        }
        if self.offsets.last() != Some(&self.flat.len()) {
            return Err(Error::Validation(format!(
                "jagged offsets end at {:?}, flat has {} values",
                self.offsets.last(),
                self.flat.len()
            )));
        }
        Ok(())
    }

    /// Get element `index` of entry `row`. Returns `oor` for out-of-range.
    pub fn get(&self, row: usize, index: usize, oor: f64) -> f64 {
        let entry = self.entry(row);
        entry.get(index).copied().unwrap_or(oor)
    }

    /// Values of entry `row`.
    pub fn entry(&self, row: usize) -> &[f64] {
        &self.flat[self.offsets[row]..self.offsets[row + 1]]
    }

    /// Number of entries.
    pub fn n_entries(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// Scalar column holding element `index` of every entry.
    pub fn element(&self, index: usize, oor: f64) -> Vec<f64> {
        (0..self.n_entries()).map(|row| self.get(row, index, oor)).collect()
    }

    /// First `n` entries.
    pub fn head(&self, n: usize) -> Self {
        let n = n.min(self.n_entries());
        let end = self.offsets[n];
        Self { flat: self.flat[..end].to_vec(), offsets: self.offsets[..=n].to_vec() }
    }

    /// Common entry length, or `None` if entries differ in length.
    pub fn fixed_len(&self) -> Option<usize> {
        let mut lens = self.offsets.windows(2).map(|w| w[1] - w[0]);
        let first = lens.next()?;
        lens.all(|l| l == first).then_some(first)
    }
}

/// Materialized column values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum Column {
    /// Floating-point scalars.
    F64(Vec<f64>),
    /// Integer scalars.
    I64(Vec<i64>),
    /// Variable-length vectors of floats.
    Vector(JaggedCol),
}

impl Column {
    /// Number of entries.
    pub fn len(&self) -> usize {
        match self {
            Column::F64(v) => v.len(),
            Column::I64(v) => v.len(),
            Column::Vector(j) => j.n_entries(),
        }
    }

    /// Whether the column has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short type name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Column::F64(_) => "f64",
            Column::I64(_) => "i64",
            Column::Vector(_) => "vector",
        }
    }

    /// First `n` entries.
    pub fn head(&self, n: usize) -> Self {
        match self {
            Column::F64(v) => Column::F64(v[..n.min(v.len())].to_vec()),
            Column::I64(v) => Column::I64(v[..n.min(v.len())].to_vec()),
            Column::Vector(j) => Column::Vector(j.head(n)),
        }
    }

    /// Scalar values as `f64`. Vector columns are rejected.
    pub fn to_f64(&self) -> Result<Vec<f64>> {
        match self {
            Column::F64(v) => Ok(v.clone()),
            Column::I64(v) => Ok(v.iter().map(|&x| x as f64).collect()),
            Column::Vector(_) => {
                Err(Error::TypeMismatch("vector column has no scalar f64 view".into()))
            }
        }
    }

    /// Borrow the jagged storage of a vector column.
    pub fn as_vector(&self) -> Option<&JaggedCol> {
        match self {
            Column::Vector(j) => Some(j),
            _ => None,
        }
    }
}

/// A column together with its name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedColumn {
    /// Column name.
    pub name: String,
    /// Column values.
    pub column: Column,
}

/// Serialized form of a column list, checked by the owning type on load.
#[derive(Deserialize)]
pub(crate) struct RawColumns {
    pub(crate) columns: Vec<NamedColumn>,
}

impl NamedColumn {
    /// Pair a name with values.
    pub fn new(name: impl Into<String>, column: Column) -> Self {
        Self { name: name.into(), column }
    }
}
