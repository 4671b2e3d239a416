#[cfg(feature = "pdf")]
pub mod pdf;
#[cfg(feature = "png")]
pub mod png;
pub mod svg;

/// Rasterizer options with the host's fonts loaded. The SVG names generic
/// sans-serif families, so any installed sans face will do.
#[cfg(any(feature = "png", feature = "pdf"))]
fn usvg_options() -> usvg::Options<'static> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    opt
}
