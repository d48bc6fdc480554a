//! Worksheet demonstrations: fixed paths and transforms rendered to HTML.
use std::f64::consts::PI;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use maud::html;
use plotly::Plot;

use zmap::family::{horizontal_lines, render_family};
use zmap::plot::{plot_mapping_with_reference, render_with_options, save_html, ReferenceCurve};
use zmap::table::render_point_table;
use zmap::{
    Complex64, Mapping, PlotOptions, PointTable, Report, ReportSection, SamplePath, TransformKind,
    DEFAULT_SAMPLE_COUNT,
};

use crate::util::ensure_dir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    HorizontalSquare,
    VerticalSquare,
    VerticalCube,
    CircleInverse,
    VerticalExp,
    LineFamily,
    LineMapping,
    PointMapping,
}

impl Demo {
    pub const ALL: [Demo; 8] = [
        Demo::HorizontalSquare,
        Demo::VerticalSquare,
        Demo::VerticalCube,
        Demo::CircleInverse,
        Demo::VerticalExp,
        Demo::LineFamily,
        Demo::LineMapping,
        Demo::PointMapping,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Demo::HorizontalSquare => "horizontal-square",
            Demo::VerticalSquare => "vertical-square",
            Demo::VerticalCube => "vertical-cube",
            Demo::CircleInverse => "circle-inverse",
            Demo::VerticalExp => "vertical-exp",
            Demo::LineFamily => "line-family",
            Demo::LineMapping => "line-mapping",
            Demo::PointMapping => "point-mapping",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Demo::HorizontalSquare => "A horizontal line z = x + ci maps to a parabola under w = z².",
            Demo::VerticalSquare => "A vertical line z = c + iy also maps to a parabola under w = z².",
            Demo::VerticalCube => "A vertical line z = 1 + iy under w = z³.",
            Demo::CircleInverse => {
                "A circle not passing through the origin maps to another circle under w = 1/z."
            }
            Demo::VerticalExp => {
                "A vertical segment z = c + iy maps to a circle of radius e^c under w = eᶻ; \
                 the imaginary part sets the angle."
            }
            Demo::LineFamily => "Horizontal lines at different heights map to nested parabolas under w = z².",
            Demo::LineMapping => {
                "The line z = x + i under w = z², drawn against the parabola Re(w) = Im(w)²/4 - 1."
            }
            Demo::PointMapping => {
                "Points z = x + i map to w = (x² - 1) + 2xi, on the parabola Re(w) = Im(w)²/4 - 1."
            }
        }
    }

    pub fn build_plot(&self, options: &PlotOptions) -> zmap::Result<Plot> {
        match self {
            Demo::HorizontalSquare => render_with_options(
                &SamplePath::horizontal_line(1.5, -2.5, 2.5, 200)?,
                &TransformKind::Square,
                DEFAULT_SAMPLE_COUNT,
                "Horizontal Line: z = x + 1.5i",
                "Transformed Parabola: w = z²",
                options,
            ),
            Demo::VerticalSquare => render_with_options(
                &SamplePath::vertical_line(1.0, -2.5, 2.5, 200)?,
                &TransformKind::Square,
                DEFAULT_SAMPLE_COUNT,
                "Vertical Line: z = 1 + iy",
                "Transformed Parabola: w = z²",
                options,
            ),
            Demo::VerticalCube => render_with_options(
                &SamplePath::vertical_line(1.0, -3.5, 3.5, 200)?,
                &TransformKind::Cube,
                DEFAULT_SAMPLE_COUNT,
                "Vertical Line: z = 1 + iy",
                "Transformed: w = z³",
                options,
            ),
            Demo::CircleInverse => render_with_options(
                &SamplePath::circle(Complex64::new(2.5, 0.0), 1.0, 200)?,
                &TransformKind::Inverse,
                DEFAULT_SAMPLE_COUNT,
                "Original Circle: |z - 2.5| = 1",
                "Transformed Circle: w = 1/z",
                options,
            ),
            Demo::VerticalExp => render_with_options(
                &SamplePath::vertical_line(0.5, -PI, PI, 200)?,
                &TransformKind::Exp,
                15,
                "Vertical Line: z = 0.5 + iy for y ∈ [-π, π]",
                "Transformed Circle: w = eᶻ",
                options,
            ),
            Demo::LineFamily => {
                let (paths, labels) = horizontal_lines(&[-2.0, -1.0, 0.0, 1.0, 2.0], -3.0, 3.0, 100)?;
                render_family(
                    &paths,
                    &labels,
                    &TransformKind::Square,
                    ["Original Horizontal Lines", "Transformed Parabolas w = z²"],
                    options,
                )
            }
            Demo::LineMapping => {
                let line = SamplePath::horizontal_line(1.0, -3.0, 3.0, 100)?;
                let mapping = Mapping::compute(&line, &TransformKind::Square, DEFAULT_SAMPLE_COUNT)?;
                Ok(plot_mapping_with_reference(
                    &mapping,
                    "Original Line in z-plane: z = x + i",
                    "Transformed Line in w-plane: w = z²",
                    &line_mapping_parabola(),
                    options,
                ))
            }
            Demo::PointMapping => {
                let table = PointTable::on_horizontal_line(
                    1.0,
                    [-2.0, -1.0, 0.0, 1.0, 2.0],
                    &TransformKind::Square,
                );
                let line = SamplePath::horizontal_line(1.0, -3.0, 3.0, 100)?;
                let background = Mapping::compute(&line, &TransformKind::Square, table.len())?;
                Ok(render_point_table(
                    &table,
                    Some(&background),
                    ["Points on Line z = x + i", "Transformed Points w = z²"],
                    0,
                    options,
                ))
            }
        }
    }
}

/// The image of `z = x + i` under `z²`, written as `Re(w) = Im(w)²/4 - 1`.
pub fn line_mapping_parabola() -> ReferenceCurve {
    ReferenceCurve::parametric(
        "Theoretical parabola: Re(w) = Im(w)²/4 - 1",
        |v| Complex64::new(v * v / 4.0 - 1.0, v),
        -6.0,
        6.0,
        100,
    )
}

impl FromStr for Demo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Demo::ALL
            .iter()
            .copied()
            .find(|demo| demo.name() == s.to_lowercase())
            .ok_or_else(|| {
                let names: Vec<&str> = Demo::ALL.iter().map(|d| d.name()).collect();
                format!("Unknown demo: {}. Available demos: {}", s, names.join(", "))
            })
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Render `demos` into `out_dir`, one HTML file each plus an `index.html`
/// gallery. Returns the written paths, gallery last.
pub fn run_demos(demos: &[Demo], out_dir: &Path, show: bool, options: &PlotOptions) -> Result<Vec<PathBuf>> {
    ensure_dir(out_dir)?;

    let mut written = Vec::with_capacity(demos.len() + 1);
    let mut report = Report::new("zmap demonstrations", clap::crate_version!());

    for demo in demos {
        log::info!("[zmap::demo] Plotting transformation for: {}", demo);
        let plot = demo
            .build_plot(options)
            .with_context(|| format!("Failed to build demo '{}'", demo))?;

        let out = out_dir.join(format!("{}.html", demo.name()));
        save_html(&plot, &out).with_context(|| format!("Failed to write {}", out.display()))?;
        written.push(out);

        if show {
            plot.show();
        }

        let mut section = ReportSection::new(demo.name());
        section.add_content(html! { (demo.description()) });
        section.add_plot(plot);
        report.add_section(section);
    }

    let index = out_dir.join("index.html");
    report
        .save_to_file(&index)
        .with_context(|| format!("Failed to write {}", index.display()))?;
    written.push(index);

    log::info!("[zmap::demo] All demonstrations complete ({} plots)", demos.len());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_names_round_trip() {
        for demo in Demo::ALL {
            assert_eq!(demo.name().parse::<Demo>().unwrap(), demo);
        }
        assert!("spiral".parse::<Demo>().is_err());
    }

    #[test]
    fn test_every_demo_builds() {
        let options = PlotOptions::default();
        for demo in Demo::ALL {
            assert!(demo.build_plot(&options).is_ok(), "demo {} failed", demo);
        }
    }

    #[test]
    fn test_line_mapping_parabola_matches_image() {
        let parabola = line_mapping_parabola();
        // x = v / 2 maps to v²/4 - 1 + vi
        for w in parabola.points() {
            let z = Complex64::new(w.im / 2.0, 1.0);
            assert!((z * z - w).norm() < 1e-9);
        }

        let line = SamplePath::horizontal_line(1.0, -3.0, 3.0, 100).unwrap();
        for z in line.iter() {
            let w = z * z;
            assert!((w.re - (w.im * w.im / 4.0 - 1.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_line_mapping_has_reference_trace() {
        let plot = Demo::LineMapping.build_plot(&PlotOptions::default()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&plot.to_json()).unwrap();
        let data = json["data"].as_array().unwrap();
        assert_eq!(data.len(), 5);
        let reference = &data[4];
        assert_eq!(reference["line"]["dash"], "dash");
        assert_eq!(reference["xaxis"], "x2");
        assert!(reference["name"].as_str().unwrap().contains("Theoretical parabola"));
        assert_eq!(json["layout"]["showlegend"], true);

        // every plotted reference point lies on the image of the line
        let xs = reference["x"].as_array().unwrap();
        let ys = reference["y"].as_array().unwrap();
        for (x, y) in xs.iter().zip(ys) {
            let (re, im) = (x.as_f64().unwrap(), y.as_f64().unwrap());
            let z = Complex64::new(im / 2.0, 1.0);
            assert!((z * z - Complex64::new(re, im)).norm() < 1e-9);
        }
    }

    #[test]
    fn test_run_demos_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let written = run_demos(
            &[Demo::VerticalCube, Demo::CircleInverse],
            dir.path(),
            false,
            &PlotOptions::default(),
        )
        .unwrap();
        assert_eq!(written.len(), 3);
        assert!(dir.path().join("vertical-cube.html").exists());
        assert!(dir.path().join("circle-inverse.html").exists());
        let index = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(index.contains("circle-inverse"));
    }
}
