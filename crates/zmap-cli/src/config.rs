use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use zmap::{Complex64, PlotOptions, SamplePath, TransformKind, DEFAULT_SAMPLE_COUNT};

use crate::util::validate_html_path;

/// The curve to sample in the z-plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathSpec {
    Line {
        start: [f64; 2],
        end: [f64; 2],
        samples: usize,
    },
    HorizontalLine {
        imag: f64,
        from: f64,
        to: f64,
        samples: usize,
    },
    VerticalLine {
        real: f64,
        from: f64,
        to: f64,
        samples: usize,
    },
    Circle {
        center: [f64; 2],
        radius: f64,
        samples: usize,
    },
    Points {
        points: Vec<[f64; 2]>,
    },
}

impl Default for PathSpec {
    fn default() -> Self {
        PathSpec::VerticalLine {
            real: 1.0,
            from: -3.5,
            to: 3.5,
            samples: 200,
        }
    }
}

fn complex([re, im]: [f64; 2]) -> Complex64 {
    Complex64::new(re, im)
}

impl PathSpec {
    pub fn build(&self) -> zmap::Result<SamplePath> {
        match self {
            PathSpec::Line { start, end, samples } => {
                SamplePath::line(complex(*start), complex(*end), *samples)
            }
            PathSpec::HorizontalLine { imag, from, to, samples } => {
                SamplePath::horizontal_line(*imag, *from, *to, *samples)
            }
            PathSpec::VerticalLine { real, from, to, samples } => {
                SamplePath::vertical_line(*real, *from, *to, *samples)
            }
            PathSpec::Circle { center, radius, samples } => {
                SamplePath::circle(complex(*center), *radius, *samples)
            }
            PathSpec::Points { points } => {
                SamplePath::from_vec(points.iter().copied().map(complex).collect())
            }
        }
    }

    /// Human readable description used as the default z-plane title.
    pub fn describe(&self) -> String {
        match self {
            PathSpec::Line { start, end, .. } => format!(
                "Segment from {} to {}",
                zmap::table::format_complex(complex(*start), 2),
                zmap::table::format_complex(complex(*end), 2)
            ),
            PathSpec::HorizontalLine { imag, .. } => format!("Horizontal Line: z = x + {}i", imag),
            PathSpec::VerticalLine { real, .. } => format!("Vertical Line: z = {} + iy", real),
            PathSpec::Circle { center, radius, .. } => format!(
                "Circle: |z - ({})| = {}",
                zmap::table::format_complex(complex(*center), 2),
                radius
            ),
            PathSpec::Points { points } => format!("{} points", points.len()),
        }
    }
}

/// Configuration for a single `zmap plot` invocation.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PlotConfig {
    pub version: String,
    pub path: PathSpec,
    pub transform: TransformKind,
    pub sample_count: usize,
    pub path_label: Option<String>,
    pub image_label: Option<String>,
    pub output_file: String,
    pub options: PlotOptions,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            version: clap::crate_version!().to_string(),
            path: PathSpec::default(),
            transform: TransformKind::Cube,
            sample_count: DEFAULT_SAMPLE_COUNT,
            path_label: None,
            image_label: None,
            output_file: String::from("zmap_plot.html"),
            options: PlotOptions::default(),
        }
    }
}

impl PlotConfig {
    /// Load a config file (if given), falling back to defaults field by field,
    /// then apply command line overrides.
    pub fn from_arguments(config_path: Option<&PathBuf>, matches: &ArgMatches) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => PlotConfig::default(),
        };

        if let Some(transform) = matches.get_one::<String>("transform") {
            config.transform = transform.parse::<TransformKind>()?;
        }
        if let Some(sample_count) = matches.get_one::<usize>("samples") {
            config.sample_count = *sample_count;
        }
        if let Some(output_file) = matches.get_one::<String>("output_file") {
            config.output_file = output_file.clone();
        }
        if let Some(label) = matches.get_one::<String>("path_label") {
            config.path_label = Some(label.clone());
        }
        if let Some(label) = matches.get_one::<String>("image_label") {
            config.image_label = Some(label.clone());
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(config_path: &PathBuf) -> Result<Self> {
        let config_json = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
        Self::from_json(&config_json)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))
    }

    pub fn from_json(config_json: &str) -> Result<Self> {
        let partial: serde_json::Value = serde_json::from_str(config_json)?;
        let mut config = PlotConfig::default();

        macro_rules! load_or_default {
            ($field:ident) => {
                if let Some(val) = partial.get(stringify!($field)) {
                    if let Ok(parsed) = serde_json::from_value(val.clone()) {
                        config.$field = parsed;
                    } else {
                        log::warn!(
                            "Config Invalid value for '{}', using default: {:?}",
                            stringify!($field), config.$field
                        );
                    }
                } else {
                    log::debug!(
                        "Config Missing field '{}', using default: {:?}",
                        stringify!($field), config.$field
                    );
                }
            };
        }

        load_or_default!(path);
        load_or_default!(transform);
        load_or_default!(sample_count);
        load_or_default!(path_label);
        load_or_default!(image_label);
        load_or_default!(output_file);
        load_or_default!(options);

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_count == 0 {
            anyhow::bail!("sample_count must be at least 1");
        }
        validate_html_path(&self.output_file)?;
        Ok(())
    }

    pub fn path_label(&self) -> String {
        self.path_label.clone().unwrap_or_else(|| self.path.describe())
    }

    pub fn image_label(&self) -> String {
        self.image_label
            .clone()
            .unwrap_or_else(|| format!("Transformed: {}", self.transform.formula()))
    }
}
