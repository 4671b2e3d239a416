use crate::color::Color;
use crate::config::*;

/// Built-in theme presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuiltinTheme {
    /// Plain matplotlib look: tab10 cycle, no grid, no experiment label.
    #[default]
    Hep,
    Atlas,
    Minimal,
}

impl BuiltinTheme {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "hep" => Self::Hep,
            "atlas" => Self::Atlas,
            "minimal" => Self::Minimal,
            other => {
                log::warn!("unknown theme '{other}', using 'hep'");
                Self::Hep
            }
        }
    }

    pub fn base_config(self) -> VizConfig {
        match self {
            Self::Hep => hep(),
            Self::Atlas => atlas(),
            Self::Minimal => minimal(),
        }
    }
}

fn hep() -> VizConfig {
    VizConfig {
        theme: "hep".into(),
        figure: FigureConfig::default(),
        font: FontConfig::default(),
        axes: AxesConfig::default(),
        grid: GridConfig::default(),
        experiment: ExperimentConfig::default(),
        colors: ColorsConfig::default(),
        palette: "tab10".into(),
        output: OutputConfig::default(),
    }
}

fn atlas() -> VizConfig {
    VizConfig {
        theme: "atlas".into(),
        figure: FigureConfig { width: 576.0, height: 432.0 },
        font: FontConfig { size: 11.0, label_size: 12.0, tick_size: 9.5, title_size: 12.0 },
        axes: AxesConfig {
            tick_direction: "in".into(),
            show_top_ticks: true,
            show_right_ticks: true,
            tick_length: 6.0,
            line_width: 1.0,
        },
        experiment: ExperimentConfig {
            name: "ATLAS".into(),
            status: "Simulation Internal".into(),
            sqrt_s_tev: 13.6,
        },
        palette: "atlas_wong".into(),
        ..hep()
    }
}

fn minimal() -> VizConfig {
    VizConfig {
        theme: "minimal".into(),
        figure: FigureConfig { width: 432.0, height: 302.4 },
        font: FontConfig { size: 9.0, label_size: 9.5, tick_size: 8.0, title_size: 10.5 },
        grid: GridConfig { show: true, color: Color::hex("#CBD5E1"), alpha: 0.55 },
        palette: "muted".into(),
        ..hep()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(BuiltinTheme::parse("ATLAS"), BuiltinTheme::Atlas);
        assert_eq!(BuiltinTheme::parse("minimal"), BuiltinTheme::Minimal);
        assert_eq!(BuiltinTheme::parse("unknown"), BuiltinTheme::Hep);
    }

    #[test]
    fn presets_keep_their_name() {
        for t in [BuiltinTheme::Hep, BuiltinTheme::Atlas, BuiltinTheme::Minimal] {
            let cfg = t.base_config();
            assert_eq!(BuiltinTheme::parse(&cfg.theme), t);
        }
    }
}
