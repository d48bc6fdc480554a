//! Sequential colour scale used to tie highlighted z-points to their images.
//!
//! Highlight markers are coloured by plotly's own Viridis palette, indexed by
//! highlight position. The RGB samples below follow the same scale and are
//! used where plotly needs a concrete colour per trace (e.g. the rays of a
//! point table).
use plotly::common::{ColorScale, ColorScalePalette, Line, Marker};

/// Viridis anchor colours at `k / 9` for `k = 0..=9` (RGB), as in plotly.js.
const VIRIDIS_STOPS: &[(u8, u8, u8)] = &[
    (68, 1, 84),
    (72, 40, 120),
    (62, 73, 137),
    (49, 104, 142),
    (38, 130, 142),
    (31, 158, 137),
    (53, 183, 121),
    (110, 206, 88),
    (181, 222, 43),
    (253, 231, 37),
];

/// Categorical palette for curve families (one colour per curve).
pub const FAMILY_COLORS: &[&str] = &["red", "orange", "green", "blue", "purple", "brown", "teal"];

const MARKER_EDGE_COLOR: &str = "black";

/// Sample the viridis scale at `t`, clamped to `[0, 1]`.
pub fn viridis(t: f64) -> (u8, u8, u8) {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let segments = (VIRIDIS_STOPS.len() - 1) as f64;
    let pos = t * segments;
    let lo = (pos.floor() as usize).min(VIRIDIS_STOPS.len() - 2);
    let frac = pos - lo as f64;

    let (r0, g0, b0) = VIRIDIS_STOPS[lo];
    let (r1, g1, b1) = VIRIDIS_STOPS[lo + 1];
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    (lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

pub fn css_rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("rgb({}, {}, {})", r, g, b)
}

/// Scale position of each of `count` highlights: `0, 1, ..., count - 1`.
pub fn highlight_positions(count: usize) -> Vec<f64> {
    (0..count).map(|i| i as f64).collect()
}

/// Marker for `count` highlights coloured by position on the Viridis palette.
///
/// The colour range is pinned to `[0, count - 1]` so the first highlight sits
/// at the start of the scale and the last at its end, whatever the values.
pub fn highlight_marker(count: usize, size: usize) -> Marker {
    let cmax = count.saturating_sub(1).max(1) as f64;
    Marker::new()
        .size(size)
        .color_array(highlight_positions(count))
        .color_scale(ColorScale::Palette(ColorScalePalette::Viridis))
        .cmin(0.0)
        .cmax(cmax)
        .line(Line::new().color(MARKER_EDGE_COLOR).width(1.0))
}

/// CSS colours for `count` highlights, matching [`highlight_marker`]: the
/// first highlight gets the start of the scale and the last gets the end.
pub fn highlight_colors(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let t = if count > 1 {
                i as f64 / (count - 1) as f64
            } else {
                0.0
            };
            css_rgb(viridis(t))
        })
        .collect()
}
