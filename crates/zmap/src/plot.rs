//! Plot pair rendering: Mapping → side-by-side z-plane / w-plane figure.
use std::path::Path;

use itertools_num::linspace;
use num_complex::Complex64;
use plotly::common::{DashType, Line, Mode};
use plotly::layout::{Annotation, Axis, GridPattern, LayoutGrid, Margin};
use plotly::{Layout, Plot, Scatter};
use serde::{Deserialize, Serialize};

use crate::colormap::highlight_marker;
use crate::error::Result;
use crate::mapping::Mapping;
use crate::path::{split_parts, SamplePath};
use crate::transform::Transform;

/// Default number of highlighted points per plane.
pub const DEFAULT_SAMPLE_COUNT: usize = 11;

const MARGIN_LEFT: usize = 60;
const MARGIN_RIGHT: usize = 30;
const MARGIN_TOP: usize = 70;
const MARGIN_BOTTOM: usize = 60;
/// Horizontal gap between the two panels, as a fraction of one panel's width.
const GRID_X_GAP: f64 = 0.15;
/// Fraction of the data span added around each panel.
const RANGE_PADDING: f64 = 0.1;

const GRID_COLOR: &str = "rgba(0, 0, 0, 0.12)";
const ORIGIN_AXIS_COLOR: &str = "black";
const REFERENCE_COLOR: &str = "rgba(128, 128, 128, 0.7)";

/// Figure appearance shared by all plot pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    /// Figure width in pixels.
    pub width: usize,
    /// Figure height in pixels.
    pub height: usize,
    pub path_color: String,
    pub image_color: String,
    pub line_width: f64,
    pub marker_size: usize,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: 1300,
            height: 600,
            path_color: "red".to_string(),
            image_color: "blue".to_string(),
            line_width: 2.0,
            marker_size: 11,
        }
    }
}

/// Transform `path`, pick `sample_count` highlights and draw both planes.
///
/// This is the one-call entry point; see [`plot_mapping`] to draw an already
/// computed [`Mapping`] or to customise the figure.
pub fn render<T>(
    path: &SamplePath,
    transform: &T,
    sample_count: usize,
    path_label: &str,
    image_label: &str,
) -> Result<Plot>
where
    T: Transform + ?Sized,
{
    render_with_options(
        path,
        transform,
        sample_count,
        path_label,
        image_label,
        &PlotOptions::default(),
    )
}

pub fn render_with_options<T>(
    path: &SamplePath,
    transform: &T,
    sample_count: usize,
    path_label: &str,
    image_label: &str,
    options: &PlotOptions,
) -> Result<Plot>
where
    T: Transform + ?Sized,
{
    log::debug!(
        "Rendering mapping: {} ({} samples, {} highlights)",
        path_label,
        path.len(),
        sample_count
    );
    let mapping = Mapping::compute(path, transform, sample_count)?;
    Ok(plot_mapping(&mapping, path_label, image_label, options))
}

/// Draw a computed mapping as a two-panel figure.
///
/// Trace order is fixed: z-plane curve, z-plane highlights, w-plane curve,
/// w-plane highlights. Both highlight traces use the same colour positions, so
/// markers correspond by position rather than by value.
pub fn plot_mapping(mapping: &Mapping, path_label: &str, image_label: &str, options: &PlotOptions) -> Plot {
    pair_plot(mapping, [path_label, image_label], None, options)
}

/// Like [`plot_mapping`], with a known curve drawn dashed on the w-plane as a
/// fifth trace, so the computed image can be checked against it by eye.
pub fn plot_mapping_with_reference(
    mapping: &Mapping,
    path_label: &str,
    image_label: &str,
    reference: &ReferenceCurve,
    options: &PlotOptions,
) -> Plot {
    pair_plot(mapping, [path_label, image_label], Some(reference), options)
}

fn pair_plot(
    mapping: &Mapping,
    titles: [&str; 2],
    reference: Option<&ReferenceCurve>,
    options: &PlotOptions,
) -> Plot {
    let count = mapping.highlights().len();
    let image: Vec<Complex64> = mapping.image().to_vec();

    let mut plot = Plot::new();
    plot.add_trace(curve_trace(
        mapping.path().iter(),
        "Original Path",
        &options.path_color,
        options.line_width,
        Panel::Z,
    ));
    plot.add_trace(highlight_trace(&mapping.highlighted_inputs(), count, options, Panel::Z));
    plot.add_trace(curve_trace(
        image.iter(),
        "Transformed Path",
        &options.image_color,
        options.line_width,
        Panel::W,
    ));
    plot.add_trace(highlight_trace(&mapping.highlighted_outputs(), count, options, Panel::W));

    let z_ranges = panel_ranges(mapping.path().iter());
    let w_ranges = match reference {
        Some(reference) => {
            plot.add_trace(
                curve_trace(
                    reference.points(),
                    reference.name(),
                    REFERENCE_COLOR,
                    options.line_width,
                    Panel::W,
                )
                .line(
                    Line::new()
                        .color(REFERENCE_COLOR)
                        .width(options.line_width)
                        .dash(DashType::Dash),
                ),
            );
            panel_ranges(image.iter().chain(reference.points()))
        }
        None => panel_ranges(image.iter()),
    };

    plot.set_layout(pair_layout(
        options,
        titles,
        [z_ranges, w_ranges],
        reference.is_some(),
    ));
    plot
}

/// A known curve in the w-plane to compare a computed image against.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceCurve {
    name: String,
    points: Vec<Complex64>,
}

impl ReferenceCurve {
    pub fn new(name: &str, points: Vec<Complex64>) -> Self {
        Self {
            name: name.to_string(),
            points,
        }
    }

    /// Sample `curve(t)` at `n` evenly spaced `t` in `[t_start, t_end]`.
    pub fn parametric<F>(name: &str, curve: F, t_start: f64, t_end: f64, n: usize) -> Self
    where
        F: Fn(f64) -> Complex64,
    {
        Self::new(name, linspace(t_start, t_end, n).map(curve).collect())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[Complex64] {
        &self.points
    }
}

/// Write a standalone HTML page for `plot`.
pub fn save_html<P: AsRef<Path>>(plot: &Plot, path: P) -> Result<()> {
    std::fs::write(path.as_ref(), plot.to_html())?;
    log::info!("Plot written to {}", path.as_ref().display());
    Ok(())
}

/// Which half of the figure a trace belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Panel {
    Z,
    W,
}

impl Panel {
    fn axes(self) -> (&'static str, &'static str) {
        match self {
            Panel::Z => ("x", "y"),
            Panel::W => ("x2", "y2"),
        }
    }
}

pub(crate) fn curve_trace<'a, I>(
    values: I,
    name: &str,
    color: &str,
    width: f64,
    panel: Panel,
) -> Box<Scatter<f64, f64>>
where
    I: IntoIterator<Item = &'a Complex64>,
{
    let (re, im) = split_parts(values);
    let (x_axis, y_axis) = panel.axes();
    Scatter::new(re, im)
        .name(name)
        .mode(Mode::Lines)
        .line(Line::new().color(color.to_string()).width(width))
        .x_axis(x_axis)
        .y_axis(y_axis)
}

fn highlight_trace(
    points: &[Complex64],
    count: usize,
    options: &PlotOptions,
    panel: Panel,
) -> Box<Scatter<f64, f64>> {
    let (re, im) = split_parts(points);
    let (x_axis, y_axis) = panel.axes();
    let labels: Vec<String> = (0..points.len()).map(|i| format!("#{}", i)).collect();
    Scatter::new(re, im)
        .name("Highlights")
        .mode(Mode::Markers)
        .text_array(labels)
        .show_legend(false)
        .marker(highlight_marker(count, options.marker_size))
        .x_axis(x_axis)
        .y_axis(y_axis)
}

/// Axis ranges covering every finite value, padded on each side.
///
/// Equal scaling of the two axes is left to the layout (`scaleanchor`), so
/// the ranges only need to contain the data.
pub fn panel_ranges<'a, I>(values: I) -> ([f64; 2], [f64; 2])
where
    I: IntoIterator<Item = &'a Complex64>,
{
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for z in values {
        if z.re.is_finite() && z.im.is_finite() {
            x_min = x_min.min(z.re);
            x_max = x_max.max(z.re);
            y_min = y_min.min(z.im);
            y_max = y_max.max(z.im);
        }
    }

    // No finite data: unit box around the origin
    if !x_min.is_finite() {
        return ([-1.0, 1.0], [-1.0, 1.0]);
    }

    (padded(x_min, x_max), padded(y_min, y_max))
}

fn padded(min: f64, max: f64) -> [f64; 2] {
    let span = max - min;
    let pad = if span < 1e-10 { 1.0 } else { span * RANGE_PADDING };
    [min - pad, max + pad]
}

fn panel_axis(title: &str, range: [f64; 2]) -> Axis {
    Axis::new()
        .title(title)
        .range(vec![range[0], range[1]])
        .show_grid(true)
        .grid_color(GRID_COLOR)
        .zero_line(true)
        .zero_line_color(ORIGIN_AXIS_COLOR)
        .zero_line_width(1)
}

fn panel_title(text: &str, x_ref: &str, y_ref: &str) -> Annotation {
    Annotation::new()
        .text(text)
        .x_ref(x_ref)
        .y_ref(y_ref)
        .x(0.5)
        .y(1.06)
        .show_arrow(false)
}

/// One-row, two-column layout with independent z-plane and w-plane axes.
pub(crate) fn pair_layout(
    options: &PlotOptions,
    titles: [&str; 2],
    ranges: [([f64; 2], [f64; 2]); 2],
    show_legend: bool,
) -> Layout {
    let [(zx, zy), (wx, wy)] = ranges;
    Layout::new()
        .grid(
            LayoutGrid::new()
                .rows(1)
                .columns(2)
                .pattern(GridPattern::Independent)
                .x_gap(GRID_X_GAP),
        )
        .width(options.width)
        .height(options.height)
        .margin(
            Margin::new()
                .left(MARGIN_LEFT)
                .right(MARGIN_RIGHT)
                .top(MARGIN_TOP)
                .bottom(MARGIN_BOTTOM),
        )
        .show_legend(show_legend)
        .x_axis(panel_axis("Re(z)", zx))
        .y_axis(panel_axis("Im(z)", zy).scale_anchor("x"))
        .x_axis2(panel_axis("Re(w)", wx))
        .y_axis2(panel_axis("Im(w)", wy).scale_anchor("x2"))
        .annotations(vec![
            panel_title(titles[0], "x domain", "y domain"),
            panel_title(titles[1], "x2 domain", "y2 domain"),
        ])
}
