//! Conversions from a [`ColumnarSource`] handle into in-memory tables.

use hu_core::{Error, Result};

use crate::column::{Column, NamedColumn};
use crate::source::ColumnarSource;
use crate::table::Table;

/// Column identifiers of `handle` as owned strings.
pub fn get_column_names<S: ColumnarSource>(handle: &S) -> Vec<String> {
    handle.column_names().iter().map(ToString::to_string).collect()
}

/// Materialize `columns` (all columns when `None`) of `handle` into a [`Table`].
///
/// `max_rows` keeps only the first rows of the result. It is applied after the
/// columns have been realized, so the whole column is still read.
pub fn to_table<S: ColumnarSource>(
    handle: &S,
    columns: Option<&[&str]>,
    max_rows: Option<usize>,
) -> Result<Table> {
    let realized = match columns {
        Some(cols) => handle.materialize(cols)?,
        None => handle.materialize_all()?,
    };
    log::debug!(
        "materialized {} columns ({} rows)",
        realized.len(),
        realized.first().map(|(_, c)| c.len()).unwrap_or(0)
    );

    let named = realized
        .into_iter()
        .map(|(name, column)| {
            let column = match max_rows {
                Some(n) => column.head(n),
                None => column,
            };
            NamedColumn::new(name.to_string(), column)
        })
        .collect();
    Table::new(named)
}

/// Split a fixed-length vector column into `length` scalar columns.
///
/// Column `{column}_{i}` holds element `i` of every entry (NaN where an entry
/// is shorter). Returns the generated names in index order and the extended
/// handle.
pub fn expand_vector_column<S: ColumnarSource>(
    handle: S,
    column: &str,
    length: usize,
) -> Result<(Vec<String>, S)> {
    let (_, values) = handle
        .materialize(&[column])?
        .into_iter()
        .next()
        .ok_or_else(|| Error::UnknownColumn(column.to_string()))?;
    let jagged = match values {
        Column::Vector(jagged) => jagged,
        other => {
            return Err(Error::TypeMismatch(format!(
                "column '{column}' is {}, expected vector",
                other.kind()
            )));
        }
    };
    if let Some(w) = jagged.fixed_len()
        && w < length
    {
        log::warn!("expanding '{column}' to {length} columns but entries hold {w} values");
    }

    let mut handle = handle;
    let mut names = Vec::with_capacity(length);
    for i in 0..length {
        let name = format!("{column}_{i}");
        handle = handle.define(&name, Column::F64(jagged.element(i, f64::NAN)))?;
        names.push(name);
    }
    Ok((names, handle))
}
