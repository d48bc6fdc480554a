//! Sample paths: ordered complex samples approximating a curve in the z-plane.
use std::f64::consts::TAU;

use itertools_num::linspace;
use ndarray::Array1;
use num_complex::Complex64;

use crate::error::{Result, ZmapError};

/// A non-empty, ordered sequence of complex samples.
///
/// Order defines the traversal direction of the curve, and therefore which
/// end of the path receives the first highlight colour.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplePath {
    samples: Array1<Complex64>,
}

impl SamplePath {
    pub fn new(samples: Array1<Complex64>) -> Result<Self> {
        if samples.is_empty() {
            return Err(ZmapError::EmptyPath);
        }
        Ok(Self { samples })
    }

    pub fn from_vec(samples: Vec<Complex64>) -> Result<Self> {
        Self::new(Array1::from_vec(samples))
    }

    /// Straight segment from `start` to `end` with `n` evenly spaced samples.
    pub fn line(start: Complex64, end: Complex64, n: usize) -> Result<Self> {
        let samples: Vec<Complex64> = linspace(0.0, 1.0, n)
            .map(|t| start + (end - start) * t)
            .collect();
        Self::from_vec(samples)
    }

    /// Horizontal line `z = x + i*imag` for `x` in `[x_start, x_end]`.
    pub fn horizontal_line(imag: f64, x_start: f64, x_end: f64, n: usize) -> Result<Self> {
        let samples: Vec<Complex64> = linspace(x_start, x_end, n)
            .map(|x| Complex64::new(x, imag))
            .collect();
        Self::from_vec(samples)
    }

    /// Vertical line `z = real + i*y` for `y` in `[y_start, y_end]`.
    pub fn vertical_line(real: f64, y_start: f64, y_end: f64, n: usize) -> Result<Self> {
        let samples: Vec<Complex64> = linspace(y_start, y_end, n)
            .map(|y| Complex64::new(real, y))
            .collect();
        Self::from_vec(samples)
    }

    /// Full circle `|z - center| = radius`, traversed counter-clockwise from
    /// angle 0 to 2π. The first and last samples coincide.
    pub fn circle(center: Complex64, radius: f64, n: usize) -> Result<Self> {
        Self::arc(center, radius, 0.0, TAU, n)
    }

    /// Circular arc `center + radius * e^{iθ}` for `θ` in `[theta_start, theta_end]`.
    pub fn arc(
        center: Complex64,
        radius: f64,
        theta_start: f64,
        theta_end: f64,
        n: usize,
    ) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ZmapError::InvalidSegment(format!(
                "circle radius must be a positive finite number, got {}",
                radius
            )));
        }
        let samples: Vec<Complex64> = linspace(theta_start, theta_end, n)
            .map(|theta| center + Complex64::from_polar(radius, theta))
            .collect();
        Self::from_vec(samples)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false`: construction rejects empty paths.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &Array1<Complex64> {
        &self.samples
    }

    pub fn iter(&self) -> impl Iterator<Item = &Complex64> {
        self.samples.iter()
    }

    pub fn first(&self) -> Complex64 {
        self.samples[0]
    }

    pub fn last(&self) -> Complex64 {
        self.samples[self.samples.len() - 1]
    }

    /// Samples at the given positions, in the given order.
    pub fn select(&self, indices: &[usize]) -> Vec<Complex64> {
        indices.iter().map(|&i| self.samples[i]).collect()
    }

    pub fn to_vec(&self) -> Vec<Complex64> {
        self.samples.to_vec()
    }
}

/// Split complex values into separate real and imaginary coordinate vectors.
pub fn split_parts<'a, I>(values: I) -> (Vec<f64>, Vec<f64>)
where
    I: IntoIterator<Item = &'a Complex64>,
{
    values.into_iter().map(|z| (z.re, z.im)).unzip()
}
