//! Integration tests: handle → table conversions.

use std::fmt;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use hu_core::{Error, Result};
use hu_frame::{
    Column, ColumnarSource, JaggedCol, MemoryFrame, expand_vector_column, get_column_names,
    Table, to_table,
};

fn tmp_path(filename: &str) -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    let mut p = std::env::temp_dir();
    p.push(format!("hep_utils_frame_{}_{}_{}", std::process::id(), nanos, filename));
    p
}

fn ten_row_frame() -> MemoryFrame {
    let e: Vec<f64> = (0..10).map(|i| i as f64 * 1.5).collect();
    let n: Vec<i64> = (0..10).collect();
    let v: Vec<Vec<f64>> = (0..10).map(|i| vec![i as f64, 10.0 + i as f64, 20.0 + i as f64]).collect();
    MemoryFrame::new()
        .with_column("e", Column::F64(e))
        .unwrap()
        .with_column("n", Column::I64(n))
        .unwrap()
        .with_column("v", Column::Vector(JaggedCol::from_rows(&v)))
        .unwrap()
}

#[test]
fn max_rows_keeps_leading_rows() {
    let f = ten_row_frame();
    let full = to_table(&f, None, None).unwrap();
    let head = to_table(&f, None, Some(5)).unwrap();

    assert_eq!(full.n_rows(), 10);
    assert_eq!(head.n_rows(), 5);
    assert_eq!(head, full.head(5));
    assert_eq!(head.f64_column("e").unwrap(), full.f64_column("e").unwrap()[..5].to_vec());
}

#[test]
fn max_rows_larger_than_frame() {
    let t = to_table(&ten_row_frame(), Some(&["n"]), Some(50)).unwrap();
    assert_eq!(t.n_rows(), 10);
    assert_eq!(t.column_names(), vec!["n"]);
}

#[test]
fn expand_three_element_vector() {
    let (names, f) = expand_vector_column(ten_row_frame(), "v", 3).unwrap();
    assert_eq!(names, vec!["v_0", "v_1", "v_2"]);

    let t = to_table(&f, Some(&["v", "v_0", "v_1", "v_2"]), None).unwrap();
    let v = t.column("v").and_then(Column::as_vector).unwrap().clone();
    for (i, name) in names.iter().enumerate() {
        let expanded = t.f64_column(name).unwrap();
        for row in 0..t.n_rows() {
            assert_eq!(expanded[row], v.get(row, i, f64::NAN));
        }
    }
}

#[test]
fn expand_twice_collides() {
    let (_, f) = expand_vector_column(ten_row_frame(), "v", 1).unwrap();
    assert!(matches!(expand_vector_column(f, "v", 1), Err(Error::Validation(_))));
}

#[test]
fn expanded_columns_stack_into_rings() {
    let (names, f) = expand_vector_column(ten_row_frame(), "v", 3).unwrap();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let t = to_table(&f, Some(&refs), None).unwrap();
    let rings = t.to_rings_table(&refs).unwrap();
    assert_eq!(rings.shape(), (10, 3));
    assert_eq!(rings.row(4), vec![4.0, 14.0, 24.0]);
    assert_eq!(rings, to_table(&f, None, None).unwrap().vector_to_rings_table("v").unwrap());
}

/// Stand-in for a framework string type that is not `String`.
#[derive(Clone)]
struct NativeName(Vec<u8>);

impl fmt::Display for NativeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

/// A handle whose column names use the native string type.
struct NativeSource(MemoryFrame);

impl ColumnarSource for NativeSource {
    type Name = NativeName;

    fn column_names(&self) -> Vec<NativeName> {
        self.0.column_names().into_iter().map(|n| NativeName(n.into_bytes())).collect()
    }

    fn materialize(&self, columns: &[&str]) -> Result<Vec<(NativeName, Column)>> {
        Ok(self
            .0
            .materialize(columns)?
            .into_iter()
            .map(|(n, c)| (NativeName(n.into_bytes()), c))
            .collect())
    }

    fn define(self, name: &str, column: Column) -> Result<Self> {
        Ok(NativeSource(self.0.define(name, column)?))
    }
}

#[test]
fn native_names_are_normalized() {
    let src = NativeSource(ten_row_frame());
    assert_eq!(get_column_names(&src), vec!["e", "n", "v"]);

    let t = to_table(&src, None, Some(2)).unwrap();
    assert_eq!(t.column_names(), vec!["e", "n", "v"]);

    let (names, src) = expand_vector_column(src, "v", 2).unwrap();
    assert_eq!(names, vec!["v_0", "v_1"]);
    assert_eq!(get_column_names(&src).len(), 5);
}

#[test]
fn frame_and_table_survive_a_file_round_trip() {
    let frame = ten_row_frame();
    let path = tmp_path("frame.json");
    std::fs::write(&path, serde_json::to_string(&frame).unwrap()).unwrap();
    let back = MemoryFrame::from_json_path(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(back, frame);

    let table = to_table(&back, Some(&["e", "n"]), Some(4)).unwrap();
    let again = Table::from_json_str(&table.to_json_string().unwrap()).unwrap();
    assert_eq!(again, table);
    assert_eq!(again.values().unwrap().shape(), (4, 2));
}

#[test]
fn missing_frame_file_is_an_io_error() {
    let err = MemoryFrame::from_json_path(tmp_path("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
