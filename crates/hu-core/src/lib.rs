//! # hu-core
//!
//! Core types and formulas for hep-utils.
//!
//! Holds the shared error type, the calorimeter rings layer partition, the
//! dense [`RingsTable`] container and the small closed-form formulas used
//! across the workspace (deltaR, row-wise L1 normalization).
//!
//! ## Example
//!
//! ```
//! use hu_core::{RingsTable, delta_r, norm1};
//!
//! let dr = delta_r(0.1, 0.2, 0.3, -0.1);
//! assert!(dr > 0.0);
//!
//! let table = RingsTable::from_rows(&[vec![1.0, 3.0], vec![0.0, 0.0]]).unwrap();
//! let normed = norm1(&table);
//! assert_eq!(normed.row(0), vec![0.25, 0.75]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod constants;
pub mod error;
pub mod formulas;
pub mod rings;

pub use constants::{N_RINGS, RINGS_LAYERS, RINGS_LIMITS, RingsLayer, layer_of};
pub use error::{Error, Result};
pub use formulas::{delta_r, delta_r_many, norm1, norm1_rows};
pub use rings::RingsTable;
