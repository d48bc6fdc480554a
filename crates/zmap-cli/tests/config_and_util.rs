//! Integration tests for CLI config parsing and util helpers.

use std::io::Write;

use zmap::TransformKind;
use zmap_cli::config::{PathSpec, PlotConfig};
use zmap_cli::util::{ensure_dir, validate_html_path, write_bytes_to_file};

// ---------------------------------------------------------------------------
// PlotConfig
// ---------------------------------------------------------------------------

#[test]
fn config_from_file_full() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        r#"{{
            "path": {{"kind": "horizontal_line", "imag": 1.5, "from": -2.5, "to": 2.5, "samples": 200}},
            "transform": "square",
            "sample_count": 11,
            "path_label": "Horizontal Line",
            "output_file": "parabola.html",
            "options": {{"width": 800}}
        }}"#
    )
    .unwrap();

    let config = PlotConfig::from_file(&path).unwrap();
    assert_eq!(config.transform, TransformKind::Square);
    assert_eq!(
        config.path,
        PathSpec::HorizontalLine {
            imag: 1.5,
            from: -2.5,
            to: 2.5,
            samples: 200
        }
    );
    assert_eq!(config.path_label(), "Horizontal Line");
    assert_eq!(config.image_label(), "Transformed: w = z²");
    assert_eq!(config.options.width, 800);
    assert_eq!(config.options.height, 600);
    assert_eq!(config.output_file, "parabola.html");
    assert_eq!(config.path.build().unwrap().len(), 200);
}

#[test]
fn config_invalid_json_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(PlotConfig::from_file(&path).is_err());
}

#[test]
fn config_unknown_path_kind_falls_back() {
    let config = PlotConfig::from_json(r#"{"path": {"kind": "spiral"}}"#).unwrap();
    assert_eq!(config.path, PathSpec::default());
}

#[test]
fn config_round_trips_through_json() {
    let config = PlotConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let parsed = PlotConfig::from_json(&json).unwrap();
    assert_eq!(parsed.path, config.path);
    assert_eq!(parsed.transform, config.transform);
    assert_eq!(parsed.options, config.options);
}

// ---------------------------------------------------------------------------
// util
// ---------------------------------------------------------------------------

#[test]
fn validate_html_extension() {
    assert!(validate_html_path("plot.html").is_ok());
    assert!(validate_html_path("plot.csv").is_err());
}

#[test]
fn ensure_dir_creates_nested() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    ensure_dir(&nested).unwrap();
    assert!(nested.is_dir());
}

#[test]
fn write_bytes_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");
    write_bytes_to_file(path.to_str().unwrap(), b"{}").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
}
