//! Families of curves drawn together under one transform, e.g. a set of
//! horizontal lines and the parabolas they map to under `z²`.
use num_complex::Complex64;
use plotly::Plot;

use crate::colormap::FAMILY_COLORS;
use crate::error::{Result, ZmapError};
use crate::path::SamplePath;
use crate::plot::{curve_trace, pair_layout, panel_ranges, Panel, PlotOptions};
use crate::transform::Transform;

/// Draw every path in the z-plane and its image in the w-plane.
///
/// Curve `k` uses the `k`-th palette colour in both planes and is listed in
/// the legend under `labels[k]`.
pub fn render_family<T>(
    paths: &[SamplePath],
    labels: &[String],
    transform: &T,
    titles: [&str; 2],
    options: &PlotOptions,
) -> Result<Plot>
where
    T: Transform + ?Sized,
{
    if paths.is_empty() {
        return Err(ZmapError::EmptyPath);
    }
    if labels.len() != paths.len() {
        return Err(ZmapError::InvalidSegment(format!(
            "{} labels given for {} paths",
            labels.len(),
            paths.len()
        )));
    }

    let images: Vec<Vec<Complex64>> = paths.iter().map(|p| transform.apply(p).to_vec()).collect();
    let mut plot = Plot::new();

    for (k, ((path, image), label)) in paths.iter().zip(&images).zip(labels).enumerate() {
        let color = FAMILY_COLORS[k % FAMILY_COLORS.len()];
        plot.add_trace(
            curve_trace(path.iter(), label, color, options.line_width, Panel::Z)
                .legend_group(label.as_str()),
        );
        plot.add_trace(
            curve_trace(image.iter(), label, color, options.line_width, Panel::W)
                .legend_group(label.as_str())
                .show_legend(false),
        );
    }

    let z_ranges = panel_ranges(paths.iter().flat_map(|p| p.iter()));
    let w_ranges = panel_ranges(images.iter().flatten());
    plot.set_layout(pair_layout(options, titles, [z_ranges, w_ranges], true));
    Ok(plot)
}

/// Horizontal lines `z = x + i*y` for each `y` in `imag_values`, sharing one
/// x-range and sample count.
pub fn horizontal_lines(
    imag_values: &[f64],
    x_start: f64,
    x_end: f64,
    n: usize,
) -> Result<(Vec<SamplePath>, Vec<String>)> {
    let paths = imag_values
        .iter()
        .map(|&y| SamplePath::horizontal_line(y, x_start, x_end, n))
        .collect::<Result<Vec<_>>>()?;
    let labels = imag_values.iter().map(|y| format!("Im(z) = {}", y)).collect();
    Ok((paths, labels))
}
