//! Lorenzetti simulation record layouts.
//!
//! Event files written by the simulation store `xAOD` collections whose C++
//! struct declarations must be handed to the analysis framework's
//! interpreter before the files can be read. Two generations of that
//! declaration exist:
//!
//! - [`dataframe`]: the original layout ([`DATAFRAME_H`]), including the
//!   minimal `cell_t` record.
//! - [`structs`]: the current layout ([`CPP_STRUCTS`]), which adds pulse
//!   shapes, timing, extra shower moments and the `Electron_t` and
//!   `EventSeed_t` records.
//!
//! The Rust structs in each submodule mirror their declaration field for
//! field; the framework stays the authority on the layout.

use serde::{Deserialize, Serialize};

/// A Rust mirror of one declared record.
pub trait Record {
    /// Struct name inside the `xAOD` namespace.
    const NAME: &'static str;
    /// Field names in declaration order.
    const FIELDS: &'static [&'static str];
}

/// One field of a declared struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    /// C++ type as written (`float`, `std::vector<int>`, ...).
    pub ty: String,
    /// Field name.
    pub name: String,
}

/// Which generation of the record declarations a file was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// [`DATAFRAME_H`].
    Dataframe,
    /// [`CPP_STRUCTS`].
    #[default]
    Structs,
}

impl Layout {
    /// Declaration text to register with the framework interpreter.
    pub fn declaration(self) -> &'static str {
        match self {
            Self::Dataframe => DATAFRAME_H,
            Self::Structs => CPP_STRUCTS,
        }
    }

    /// Declared struct names, in declaration order.
    pub fn record_names(self) -> &'static [&'static str] {
        match self {
            Self::Dataframe => &dataframe::RECORD_NAMES,
            Self::Structs => &structs::RECORD_NAMES,
        }
    }

    /// Fields of `record` as declared in this layout.
    pub fn declared_fields(self, record: &str) -> Option<Vec<FieldDecl>> {
        parse_fields(self.declaration(), record)
    }
}

fn parse_fields(declaration: &str, record: &str) -> Option<Vec<FieldDecl>> {
    let head = format!("struct {record}{{");
    let start = declaration.find(&head)? + head.len();
    let body = &declaration[start..];
    let body = &body[..body.find('}')?];
    body.split(';')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(|f| {
            let (ty, name) = f.rsplit_once(' ')?;
            Some(FieldDecl { ty: ty.trim().to_string(), name: name.to_string() })
        })
        .collect()
}

macro_rules! record {
    ($(#[$meta:meta])* $rust:ident => $decl:literal { $($field:ident : $ty:ty),* $(,)? }) => {
        $(#[$meta])*
        #[allow(missing_docs, non_snake_case)]
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $rust {
            $(pub $field: $ty),*
        }

        impl $crate::lorenzetti::Record for $rust {
            const NAME: &'static str = $decl;
            const FIELDS: &'static [&'static str] = &[$(stringify!($field)),*];
        }
    };
}

pub mod dataframe;
pub mod structs;

pub use dataframe::DATAFRAME_H;
pub use structs::CPP_STRUCTS;

#[cfg(test)]
pub(crate) fn assert_mirrors<R: Record>(layout: Layout) {
    let declared = layout
        .declared_fields(R::NAME)
        .unwrap_or_else(|| panic!("{} missing from {layout:?}", R::NAME));
    let names: Vec<&str> = declared.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, R::FIELDS, "field mismatch for {} in {layout:?}", R::NAME);
}
