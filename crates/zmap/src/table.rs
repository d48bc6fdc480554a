//! Point-by-point mappings: a handful of z values, their images, and a
//! labelled plot of both.
use std::fmt;

use num_complex::Complex64;
use plotly::common::{DashType, Line, Mode, Position};
use plotly::{Plot, Scatter};

use crate::colormap::{highlight_colors, highlight_marker};
use crate::mapping::Mapping;
use crate::path::split_parts;
use crate::plot::{curve_trace, pair_layout, panel_ranges, Panel, PlotOptions};
use crate::transform::Transform;

/// Opacity-reduced colours for the background curve behind labelled points.
const BACKGROUND_PATH_COLOR: &str = "rgba(255, 0, 0, 0.35)";
const BACKGROUND_IMAGE_COLOR: &str = "rgba(0, 0, 255, 0.35)";

/// Rows of `(z, w)` pairs with `w = transform(z)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PointTable {
    rows: Vec<(Complex64, Complex64)>,
}

impl PointTable {
    pub fn compute<T>(points: &[Complex64], transform: &T) -> Self
    where
        T: Transform + ?Sized,
    {
        let rows = points.iter().map(|&z| (z, transform.eval(z))).collect();
        Self { rows }
    }

    /// Points `x + i*imag` for each `x` in `xs`.
    pub fn on_horizontal_line<T, I>(imag: f64, xs: I, transform: &T) -> Self
    where
        T: Transform + ?Sized,
        I: IntoIterator<Item = f64>,
    {
        let points: Vec<Complex64> = xs.into_iter().map(|x| Complex64::new(x, imag)).collect();
        Self::compute(&points, transform)
    }

    pub fn rows(&self) -> &[(Complex64, Complex64)] {
        &self.rows
    }

    pub fn inputs(&self) -> Vec<Complex64> {
        self.rows.iter().map(|(z, _)| *z).collect()
    }

    pub fn outputs(&self) -> Vec<Complex64> {
        self.rows.iter().map(|(_, w)| *w).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn format_rows(&self, precision: usize) -> Vec<String> {
        self.rows
            .iter()
            .map(|(z, w)| {
                format!(
                    "z = {}  →  w = {}",
                    format_complex(*z, precision),
                    format_complex(*w, precision)
                )
            })
            .collect()
    }
}

impl fmt::Display for PointTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        for row in self.format_rows(precision) {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// `a + bi` / `a - bi` with a fixed number of decimals. Negative zero prints
/// as zero.
pub fn format_complex(z: Complex64, precision: usize) -> String {
    let re = if z.re == 0.0 { 0.0 } else { z.re };
    let im = if z.im == 0.0 { 0.0 } else { z.im };
    let sign = if im < 0.0 { '-' } else { '+' };
    format!("{:.*} {} {:.*}i", precision, re, sign, precision, im.abs())
}

/// Plot labelled points in both planes, with a dashed ray from the origin to
/// each image. An optional background mapping draws the curve the points lie on.
pub fn render_point_table(
    table: &PointTable,
    background: Option<&Mapping>,
    titles: [&str; 2],
    precision: usize,
    options: &PlotOptions,
) -> Plot {
    let inputs = table.inputs();
    let outputs = table.outputs();
    let colors = highlight_colors(table.len());
    let mut plot = Plot::new();

    let mut z_extent = inputs.clone();
    let mut w_extent = outputs.clone();
    w_extent.push(Complex64::new(0.0, 0.0));

    if let Some(mapping) = background {
        let image = mapping.image().to_vec();
        plot.add_trace(curve_trace(
            mapping.path().iter(),
            "Path",
            BACKGROUND_PATH_COLOR,
            options.line_width,
            Panel::Z,
        ));
        plot.add_trace(curve_trace(
            image.iter(),
            "Image",
            BACKGROUND_IMAGE_COLOR,
            options.line_width,
            Panel::W,
        ));
        z_extent.extend(mapping.path().iter());
        w_extent.extend(image);
    }

    for (w, color) in outputs.iter().zip(&colors) {
        let ray = [Complex64::new(0.0, 0.0), *w];
        let (re, im) = split_parts(&ray);
        plot.add_trace(
            Scatter::new(re, im)
                .mode(Mode::Lines)
                .line(Line::new().color(color.clone()).width(1.0).dash(DashType::Dash))
                .x_axis("x2")
                .y_axis("y2")
                .show_legend(false),
        );
    }

    let z_labels: Vec<String> = inputs
        .iter()
        .map(|z| format!("z = {}", format_complex(*z, precision)))
        .collect();
    let w_labels: Vec<String> = outputs
        .iter()
        .map(|w| format!("w = {}", format_complex(*w, precision)))
        .collect();
    plot.add_trace(labelled_points(&inputs, z_labels, options, ("x", "y")));
    plot.add_trace(labelled_points(&outputs, w_labels, options, ("x2", "y2")));

    let ranges = [panel_ranges(&z_extent), panel_ranges(&w_extent)];
    plot.set_layout(pair_layout(options, titles, ranges, false));
    plot
}

fn labelled_points(
    points: &[Complex64],
    labels: Vec<String>,
    options: &PlotOptions,
    (x_axis, y_axis): (&str, &str),
) -> Box<Scatter<f64, f64>> {
    let (re, im) = split_parts(points);
    Scatter::new(re, im)
        .mode(Mode::MarkersText)
        .text_array(labels)
        .text_position(Position::TopRight)
        .marker(highlight_marker(points.len(), options.marker_size + 3))
        .x_axis(x_axis)
        .y_axis(y_axis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::SamplePath;
    use crate::transform::TransformKind;

    #[test]
    fn test_format_complex() {
        assert_eq!(format_complex(Complex64::new(3.0, -4.0), 0), "3 - 4i");
        assert_eq!(format_complex(Complex64::new(-1.0, 0.0), 0), "-1 + 0i");
        assert_eq!(format_complex(Complex64::new(-0.0, -0.0), 1), "0.0 + 0.0i");
        assert_eq!(format_complex(Complex64::new(0.5, 2.25), 2), "0.50 + 2.25i");
    }

    #[test]
    fn test_table_rows() {
        let table = PointTable::on_horizontal_line(1.0, [0.0, 1.0], &TransformKind::Square);
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.format_rows(0),
            vec!["z = 0 + 1i  →  w = -1 + 0i", "z = 1 + 1i  →  w = 0 + 2i"]
        );
        assert_eq!(format!("{:.0}", table), "z = 0 + 1i  →  w = -1 + 0i\nz = 1 + 1i  →  w = 0 + 2i\n");
    }

    #[test]
    fn test_point_plot_with_background() {
        let table = PointTable::on_horizontal_line(
            1.0,
            [-2.0, -1.0, 0.0, 1.0, 2.0],
            &TransformKind::Square,
        );
        let line = SamplePath::horizontal_line(1.0, -3.0, 3.0, 100).unwrap();
        let mapping = Mapping::compute(&line, &TransformKind::Square, 5).unwrap();
        let plot = render_point_table(
            &table,
            Some(&mapping),
            ["Points on Line z = x + i", "Transformed Points w = z²"],
            0,
            &PlotOptions::default(),
        );
        let json: serde_json::Value = serde_json::from_str(&plot.to_json()).unwrap();
        let data = json["data"].as_array().unwrap();
        // background pair + one ray per point + two labelled point traces
        assert_eq!(data.len(), 2 + 5 + 2);
        let w_points = &data[data.len() - 1];
        assert_eq!(w_points["text"][0], "w = 3 - 4i");
        assert_eq!(w_points["marker"]["color"], data[data.len() - 2]["marker"]["color"]);
    }
}
