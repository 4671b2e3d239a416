use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::theme::BuiltinTheme;

/// Top-level visualization configuration (YAML or programmatic).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    pub theme: String,
    pub figure: FigureConfig,
    pub font: FontConfig,
    pub axes: AxesConfig,
    pub grid: GridConfig,
    pub experiment: ExperimentConfig,
    pub colors: ColorsConfig,
    pub palette: String,
    pub output: OutputConfig,
}

impl Default for VizConfig {
    fn default() -> Self {
        BuiltinTheme::Hep.base_config()
    }
}

impl VizConfig {
    pub fn palette_colors(&self) -> Vec<Color> {
        crate::color::palette_colors(&self.palette)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: 460.8,  // 6.4" * 72
            height: 345.6, // 4.8" * 72
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub size: f64,
    pub label_size: f64,
    pub tick_size: f64,
    pub title_size: f64,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self { size: 10.0, label_size: 10.0, tick_size: 8.5, title_size: 12.0 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AxesConfig {
    pub tick_direction: String,
    pub show_top_ticks: bool,
    pub show_right_ticks: bool,
    pub tick_length: f64,
    pub line_width: f64,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            tick_direction: "out".into(),
            show_top_ticks: false,
            show_right_ticks: false,
            tick_length: 3.5,
            line_width: 0.8,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub show: bool,
    pub color: Color,
    pub alpha: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { show: false, color: Color::hex("#b0b0b0"), alpha: 0.5 }
    }
}

/// Experiment label drawn above the frame; an empty name disables it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    pub name: String,
    pub status: String,
    pub sqrt_s_tev: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    /// Opacity of error bands drawn around a line.
    pub band_alpha: f64,
    /// Opacity of histogram bars.
    pub bar_alpha: f64,
    /// Dashed guides: zero lines and layer boundaries.
    pub reference_line: Color,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self { band_alpha: 0.25, bar_alpha: 1.0, reference_line: Color::BLACK }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when the output path has no extension.
    pub format: String,
    pub dpi: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { format: "svg".into(), dpi: 150 }
    }
}

/// Resolve a VizConfig from an optional YAML string.
///
/// The `theme` key picks the base preset; the remaining keys override it
/// section by section.
pub fn resolve_config(user_yaml: Option<&str>) -> crate::Result<VizConfig> {
    let Some(yaml) = user_yaml else {
        return Ok(VizConfig::default());
    };
    let value: serde_yaml_ng::Value =
        serde_yaml_ng::from_str(yaml).map_err(|e| crate::RenderError::Config(e.to_string()))?;
    let theme = value.get("theme").and_then(|t| t.as_str()).map(BuiltinTheme::parse).unwrap_or_default();

    let mut config = theme.base_config();
    let Some(map) = value.as_mapping() else {
        return Ok(config);
    };
    for (key, section) in map {
        let Some(key) = key.as_str() else { continue };
        apply_section(&mut config, key, section.clone())?;
    }
    Ok(config)
}

fn apply_section(config: &mut VizConfig, key: &str, section: serde_yaml_ng::Value) -> crate::Result<()> {
    fn parse<T: serde::de::DeserializeOwned>(v: serde_yaml_ng::Value) -> crate::Result<T> {
        serde_yaml_ng::from_value(v).map_err(|e| crate::RenderError::Config(e.to_string()))
    }
    match key {
        "theme" => {}
        "figure" => config.figure = merge(&config.figure, section, parse)?,
        "font" => config.font = merge(&config.font, section, parse)?,
        "axes" => config.axes = merge(&config.axes, section, parse)?,
        "grid" => config.grid = merge(&config.grid, section, parse)?,
        "experiment" => config.experiment = merge(&config.experiment, section, parse)?,
        "colors" => config.colors = merge(&config.colors, section, parse)?,
        "output" => config.output = merge(&config.output, section, parse)?,
        "palette" => config.palette = parse(section)?,
        other => log::warn!("ignoring unknown config section '{other}'"),
    }
    Ok(())
}

/// Overlay the keys present in `section` on top of `base`.
fn merge<T, F>(base: &T, section: serde_yaml_ng::Value, parse: F) -> crate::Result<T>
where
    T: Serialize,
    F: Fn(serde_yaml_ng::Value) -> crate::Result<T>,
{
    let mut merged =
        serde_yaml_ng::to_value(base).map_err(|e| crate::RenderError::Config(e.to_string()))?;
    if let (Some(dst), Some(src)) = (merged.as_mapping_mut(), section.as_mapping()) {
        for (k, v) in src {
            dst.insert(k.clone(), v.clone());
        }
    }
    parse(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_hep_theme() {
        let cfg = resolve_config(None).unwrap();
        assert_eq!(cfg.theme, "hep");
        assert_eq!(cfg.palette, "tab10");
        assert!(!cfg.grid.show);
    }

    #[test]
    fn yaml_overrides_single_key() {
        let cfg = resolve_config(Some("figure:\n  width: 300\n")).unwrap();
        assert_eq!(cfg.figure.width, 300.0);
        assert_eq!(cfg.figure.height, FigureConfig::default().height);
    }

    #[test]
    fn theme_key_selects_base() {
        let cfg = resolve_config(Some("theme: atlas\ngrid:\n  show: true\n")).unwrap();
        assert_eq!(cfg.experiment.name, "ATLAS");
        assert_eq!(cfg.palette, "atlas_wong");
        assert!(cfg.grid.show);
    }

    #[test]
    fn malformed_yaml_is_config_error() {
        let err = resolve_config(Some("figure: [1, 2")).unwrap_err();
        assert!(matches!(err, crate::RenderError::Config(_)));
    }
}
