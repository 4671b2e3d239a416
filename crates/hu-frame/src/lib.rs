//! # hu-frame
//!
//! Boundary between an external columnar data handle and in-memory tables.
//!
//! A handle is anything implementing [`ColumnarSource`]: it can list its
//! columns, materialize them, and derive new columns. [`MemoryFrame`] is the
//! in-process implementation; bindings to an analysis framework implement the
//! same trait.
//!
//! ## Example
//!
//! ```
//! use hu_frame::{Column, JaggedCol, MemoryFrame, expand_vector_column, to_table};
//!
//! let frame = MemoryFrame::new()
//!     .with_column("e", Column::F64(vec![1.0, 2.0]))
//!     .unwrap()
//!     .with_column("v", Column::Vector(JaggedCol::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]])))
//!     .unwrap();
//!
//! let (names, frame) = expand_vector_column(frame, "v", 2).unwrap();
//! assert_eq!(names, ["v_0", "v_1"]);
//!
//! let table = to_table(&frame, Some(&["e", "v_1"]), Some(1)).unwrap();
//! assert_eq!(table.n_rows(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod column;
pub mod convert;
pub mod lorenzetti;
pub mod memory;
pub mod source;
pub mod table;

pub use column::{Column, JaggedCol, NamedColumn};
pub use convert::{expand_vector_column, get_column_names, to_table};
pub use memory::MemoryFrame;
pub use source::ColumnarSource;
pub use table::Table;
