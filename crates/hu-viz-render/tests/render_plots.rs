use approx::assert_abs_diff_eq;
use hu_core::{N_RINGS, RINGS_LAYERS, RingsTable};
use hu_viz::{AllRingsArtifact, CategoricalHistogramArtifact, RingsProfileArtifact};
use hu_viz_render::{
    Axes, CategoricalHistOptions, HistOptions, RenderError, RingsProfileOptions, VizConfig, categorical_histplot,
    histplot, plot_rings_profile, render_svg, render_to_bytes, render_to_file, resolve_config, save_axes,
};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn tmp_path(filename: &str) -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    let mut p = std::env::temp_dir();
    p.push(format!("hep_utils_render_{}_{}_{}", std::process::id(), nanos, filename));
    p
}

fn ramp_rows(n: usize) -> Vec<Vec<f64>> {
    (0..n).map(|k| (0..N_RINGS).map(|i| (k + 1) as f64 * (N_RINGS - i) as f64).collect()).collect()
}

#[test]
fn identical_rows_have_zero_spread() {
    let row: Vec<f64> = (0..N_RINGS).map(|i| (i % 7) as f64).collect();
    let table = RingsTable::from_rows(&vec![row.clone(); 4]).unwrap();
    let total: f64 = row.iter().sum();

    let mut ax = Axes::new(&VizConfig::default());
    let (mean, std) = plot_rings_profile(&mut ax, &table, &RingsProfileOptions::default()).unwrap();
    for i in 0..N_RINGS {
        assert_abs_diff_eq!(mean[i], row[i] / total, epsilon = 1e-12);
        assert_abs_diff_eq!(std[i], 0.0, epsilon = 1e-12);
    }
}

#[test]
fn profile_svg_names_every_layer() {
    let table = RingsTable::from_rows(&ramp_rows(3)).unwrap();
    let mut ax = Axes::new(&VizConfig::default());
    plot_rings_profile(&mut ax, &table, &RingsProfileOptions::default()).unwrap();
    let svg = ax.render_svg(&VizConfig::default());

    for layer in RINGS_LAYERS {
        assert!(svg.contains(&format!(">{}</text>", layer.name)), "missing {}", layer.name);
    }
    assert!(svg.contains(">Rings mean profile</text>"));
    assert!(svg.contains(">Ring index</text>"));
    // One dashed line per layer plus the zero line.
    assert_eq!(svg.matches("stroke-dasharray=\"6 3\"").count(), RINGS_LAYERS.len() + 1);
}

#[test]
fn layer_labels_can_be_disabled() {
    let table = RingsTable::from_rows(&ramp_rows(2)).unwrap();
    let mut ax = Axes::new(&VizConfig::default());
    let opts = RingsProfileOptions { add_rings_labels: false, ..Default::default() };
    plot_rings_profile(&mut ax, &table, &opts).unwrap();
    let svg = ax.render_svg(&VizConfig::default());
    assert!(!svg.contains(">EM1</text>"));
    assert_eq!(svg.matches("stroke-dasharray=\"6 3\"").count(), 1);
}

#[test]
fn empty_table_profile_still_renders() {
    let mut ax = Axes::new(&VizConfig::default());
    let (mean, std) = plot_rings_profile(&mut ax, &RingsTable::empty(N_RINGS), &RingsProfileOptions::default()).unwrap();
    assert_eq!(mean.len(), N_RINGS);
    assert!(mean.iter().chain(&std).all(|v| v.is_nan()));
    let svg = ax.render_svg(&VizConfig::default());
    assert!(svg.starts_with("<svg"));
    assert!(!svg.contains("<polyline"));
}

#[test]
fn two_profiles_share_one_surface() {
    let config = VizConfig::default();
    let a = RingsTable::from_rows(&ramp_rows(2)).unwrap();
    let b = RingsTable::from_rows(&[vec![1.0; N_RINGS]]).unwrap();

    let mut ax = Axes::new(&config);
    let opts = RingsProfileOptions { label: "electrons".into(), ..Default::default() };
    plot_rings_profile(&mut ax, &a, &opts).unwrap();
    let opts = RingsProfileOptions { label: "jets".into(), add_rings_labels: false, ..Default::default() };
    plot_rings_profile(&mut ax, &b, &opts).unwrap();

    let labels: Vec<&str> = ax.legend_entries().iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, ["electrons", "jets"]);
    assert_ne!(ax.legend_entries()[0].color, ax.legend_entries()[1].color);
    let svg = ax.render_svg(&config);
    assert_eq!(svg.matches("<polyline").count(), 2);
}

#[test]
fn histogram_metrics_in_legend() {
    let data: Vec<f64> = (0..10).map(f64::from).collect();
    let mut ax = Axes::new(&VizConfig::default());
    let opts = HistOptions { nbins: 5, metrics: true, ..Default::default() };
    histplot(&mut ax, &data, &opts).unwrap();
    let svg = ax.render_svg(&VizConfig::default());
    assert!(svg.contains(">Samples: 10</text>"));
    assert!(svg.contains(">Mean: 4.50</text>"));
    assert!(svg.contains(">Max: 9.00</text>"));
}

#[test]
fn categorical_percentages() {
    let data = [1.0, 1.0, 2.0, 3.0, 3.0, 3.0];
    let opts = CategoricalHistOptions { percentage: true, metrics: false };
    let mut ax = Axes::new(&VizConfig::default());
    let metrics = categorical_histplot(&mut ax, &data, &opts).unwrap();
    assert!(metrics.is_empty());

    let art = hu_viz::categorical_histogram_artifact(&data, &opts);
    assert_eq!(art.categories, vec![1.0, 2.0, 3.0]);
    assert_abs_diff_eq!(art.heights[0], 33.33, epsilon = 0.01);
    assert_abs_diff_eq!(art.heights[1], 16.67, epsilon = 0.01);
    assert_abs_diff_eq!(art.heights[2], 50.0, epsilon = 1e-12);
    let (_, y_hi) = ax.y_limits();
    assert_abs_diff_eq!(y_hi, 52.5, epsilon = 1e-9);
}

#[test]
fn dispatch_by_kind() {
    let config = VizConfig::default();
    let table = RingsTable::from_rows(&ramp_rows(2)).unwrap();

    let profile = RingsProfileArtifact::from_table(&table, true, "e");
    let svg = render_svg(&serde_json::to_string(&profile).unwrap(), "rings_profile", &config).unwrap();
    assert!(svg.contains(">Rings mean profile</text>"));

    let all = AllRingsArtifact::from_table(&table, false);
    let svg = render_svg(&serde_json::to_string(&all).unwrap(), "all_rings", &config).unwrap();
    assert!(svg.contains(">Energy</text>"));

    let cat = hu_viz::categorical_histogram_artifact(&[1.0, 2.0], &CategoricalHistOptions::default());
    let json = serde_json::to_string::<CategoricalHistogramArtifact>(&cat).unwrap();
    assert!(render_svg(&json, "categorical_histogram", &config).is_ok());
}

#[test]
fn empty_profile_artifact_roundtrips_through_json() {
    let profile = RingsProfileArtifact::from_table(&RingsTable::empty(4), true, "");
    let json = serde_json::to_string(&profile).unwrap();
    assert!(json.contains("null"));
    assert!(render_svg(&json, "rings_profile", &VizConfig::default()).is_ok());
}

#[test]
fn unknown_kind_and_format() {
    let config = VizConfig::default();
    assert!(matches!(render_svg("{}", "pulls", &config), Err(RenderError::UnknownKind(_))));
    let all = AllRingsArtifact::from_table(&RingsTable::from_rows(&[vec![1.0]]).unwrap(), true);
    let json = serde_json::to_string(&all).unwrap();
    assert!(matches!(render_to_bytes(&json, "all_rings", "bmp", &config), Err(RenderError::UnsupportedFormat(_))));
    assert!(render_to_bytes(&json, "all_rings", "svg", &config).unwrap().starts_with(b"<svg"));
}

#[test]
fn themed_header_is_drawn() {
    let config = resolve_config(Some("theme: atlas\n")).unwrap();
    let mut ax = Axes::new(&config);
    histplot(&mut ax, &[1.0, 2.0, 2.5], &HistOptions { nbins: 3, ..Default::default() }).unwrap();
    let svg = ax.render_svg(&config);
    assert!(svg.contains(">ATLAS</text>"));
    assert!(svg.contains("width=\"576\""));
}

#[test]
fn save_axes_writes_svg_file() {
    let table = RingsTable::from_rows(&ramp_rows(2)).unwrap();
    let mut ax = Axes::new(&VizConfig::default());
    plot_rings_profile(&mut ax, &table, &RingsProfileOptions::default()).unwrap();

    let path = tmp_path("profile.svg");
    save_axes(&ax, &path, &VizConfig::default()).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, ax.render_svg(&VizConfig::default()));
    std::fs::remove_file(&path).ok();
}

#[test]
fn extensionless_path_uses_configured_format() {
    let artifact = RingsProfileArtifact::from_table(&RingsTable::from_rows(&ramp_rows(2)).unwrap(), true, "e");
    let json = serde_json::to_string(&artifact).unwrap();

    let path = tmp_path("profile");
    render_to_file(&json, "rings_profile", &path, &VizConfig::default()).unwrap();
    assert!(std::fs::read_to_string(&path).unwrap().starts_with("<svg"));
    std::fs::remove_file(&path).ok();

    let config = resolve_config(Some("output:\n  format: bmp\n")).unwrap();
    let err = render_to_file(&json, "rings_profile", &tmp_path("profile_bmp"), &config).unwrap_err();
    assert!(matches!(err, RenderError::UnsupportedFormat(f) if f == "bmp"));
}
