//! zmap: visualize complex-valued functions as curve mappings.
//!
//! A curve in the input plane (the z-plane) is sampled into a [`SamplePath`],
//! a pointwise [`Transform`] maps it into the output plane (the w-plane), and
//! [`render`] draws both planes side by side. Evenly spaced highlight points
//! are coloured by their position along the path, so the i-th marker in the
//! z-plane and the i-th marker in the w-plane always share a colour.
//!
//! Figures are `plotly::Plot` values; showing or saving them is left to the
//! caller (see [`plot::save_html`] and [`report::Report`]).
pub mod colormap;
pub mod error;
pub mod family;
pub mod highlight;
pub mod mapping;
pub mod path;
pub mod plot;
pub mod report;
pub mod table;
pub mod transform;

pub use error::{Result, ZmapError};
pub use family::render_family;
pub use highlight::highlight_indices;
pub use mapping::Mapping;
pub use num_complex::Complex64;
pub use path::SamplePath;
pub use plot::{render, PlotOptions, DEFAULT_SAMPLE_COUNT};
pub use report::{Report, ReportSection};
pub use table::PointTable;
pub use transform::{Transform, TransformKind};
