use std::path::Path;

/// Write an SVG document to a file.
pub fn save_svg(svg: &str, path: &Path) -> crate::Result<()> {
    std::fs::write(path, svg)?;
    log::debug!("wrote {} bytes of SVG to {}", svg.len(), path.display());
    Ok(())
}
