pub mod histogram;
pub mod rings;

pub(crate) mod axes_draw;

pub use histogram::{categorical_histplot, histplot};
pub use rings::{
    AllRingsOptions, ErrorAreaOptions, RingsProfileOptions, errorarea, plot_all_rings, plot_rings_profile,
};
