//! Integration tests for the two-panel figure and its highlight contract.

use serde_json::Value;

use zmap::plot::{plot_mapping, render_with_options};
use zmap::{render, Complex64, Mapping, PlotOptions, SamplePath, TransformKind, DEFAULT_SAMPLE_COUNT};

fn traces(plot: &plotly::Plot) -> Vec<Value> {
    let json: Value = serde_json::from_str(&plot.to_json()).unwrap();
    json["data"].as_array().unwrap().clone()
}

#[test]
fn highlight_counts_match_between_planes() {
    let path = SamplePath::circle(Complex64::new(2.5, 0.0), 1.0, 200).unwrap();
    for count in [1usize, 2, 11, 25] {
        let plot = render(&path, &TransformKind::Inverse, count, "circle", "image").unwrap();
        let data = traces(&plot);
        let z_markers = data[1]["x"].as_array().unwrap().len();
        let w_markers = data[3]["x"].as_array().unwrap().len();
        assert_eq!(z_markers, count);
        assert_eq!(w_markers, count);
        assert_eq!(data[1]["marker"]["color"], data[3]["marker"]["color"]);
    }
}

#[test]
fn highlight_markers_sit_on_the_curves() {
    let path = SamplePath::vertical_line(1.0, -3.5, 3.5, 200).unwrap();
    let mapping = Mapping::compute(&path, &TransformKind::Cube, DEFAULT_SAMPLE_COUNT).unwrap();
    let plot = plot_mapping(&mapping, "z", "w", &PlotOptions::default());
    let data = traces(&plot);

    let first_w = mapping.image()[0];
    let last_w = mapping.image()[199];
    let w_x = data[3]["x"].as_array().unwrap();
    let w_y = data[3]["y"].as_array().unwrap();
    let close = |v: &Value, expected: f64| (v.as_f64().unwrap() - expected).abs() < 1e-9;
    assert!(close(&w_x[0], first_w.re));
    assert!(close(&w_y[0], first_w.im));
    assert!(close(&w_x[10], last_w.re));
    assert!(close(&w_y[10], last_w.im));
}

#[test]
fn oversampling_is_not_an_error() {
    let path = SamplePath::from_vec(vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 1.0)]).unwrap();
    let plot = render(&path, &TransformKind::Square, 11, "two points", "image").unwrap();
    let data = traces(&plot);
    assert_eq!(data[1]["x"].as_array().unwrap().len(), 11);
}

#[test]
fn zero_highlights_rejected() {
    let path = SamplePath::vertical_line(1.0, -1.0, 1.0, 10).unwrap();
    assert!(render(&path, &TransformKind::Square, 0, "a", "b").is_err());
}

#[test]
fn singular_samples_still_render() {
    let path = SamplePath::horizontal_line(0.0, -1.0, 1.0, 3).unwrap();
    let plot = render(&path, &|z: Complex64| 1.0 / z, 3, "through origin", "1/z").unwrap();
    let json: Value = serde_json::from_str(&plot.to_json()).unwrap();
    let range = json["layout"]["xaxis2"]["range"].as_array().unwrap();
    assert!(range.iter().all(|v| v.as_f64().map_or(false, f64::is_finite)));
}

#[test]
fn custom_options_flow_into_figure() {
    let options = PlotOptions {
        width: 900,
        height: 450,
        path_color: "green".to_string(),
        ..PlotOptions::default()
    };
    let path = SamplePath::horizontal_line(1.5, -2.5, 2.5, 50).unwrap();
    let plot = render_with_options(&path, &TransformKind::Square, 5, "a", "b", &options).unwrap();
    let json: Value = serde_json::from_str(&plot.to_json()).unwrap();
    assert_eq!(json["layout"]["width"], 900);
    assert_eq!(json["data"][0]["line"]["color"], "green");
    assert_eq!(json["data"][2]["line"]["color"], "blue");
}
