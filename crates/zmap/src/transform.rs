//! Pointwise complex transformations w = g(z).
use std::fmt;
use std::str::FromStr;

use ndarray::Array1;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::ZmapError;
use crate::path::SamplePath;

/// Offset added before inversion so that `1/z` stays finite at `z = 0`.
pub const INVERSION_EPSILON: f64 = 1e-8;

/// A pure map from the z-plane to the w-plane.
///
/// Any `Fn(Complex64) -> Complex64` is a transform, so closures can be passed
/// wherever a `Transform` is expected.
pub trait Transform {
    fn eval(&self, z: Complex64) -> Complex64;

    /// Apply the transform to every sample of `path`, preserving order.
    fn apply(&self, path: &SamplePath) -> Array1<Complex64> {
        path.samples().mapv(|z| self.eval(z))
    }
}

impl<F> Transform for F
where
    F: Fn(Complex64) -> Complex64,
{
    fn eval(&self, z: Complex64) -> Complex64 {
        self(z)
    }
}

pub fn square(z: Complex64) -> Complex64 {
    z * z
}

pub fn cube(z: Complex64) -> Complex64 {
    z * z * z
}

pub fn exp(z: Complex64) -> Complex64 {
    z.exp()
}

/// `1 / (z + epsilon)`.
pub fn inversion(epsilon: f64) -> impl Fn(Complex64) -> Complex64 {
    move |z| Complex64::new(1.0, 0.0) / (z + epsilon)
}

/// The built-in transforms, selectable by name from configs and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformKind {
    Square,
    Cube,
    Inverse,
    Exp,
}

impl TransformKind {
    pub const ALL: [TransformKind; 4] = [
        TransformKind::Square,
        TransformKind::Cube,
        TransformKind::Inverse,
        TransformKind::Exp,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TransformKind::Square => "square",
            TransformKind::Cube => "cube",
            TransformKind::Inverse => "inverse",
            TransformKind::Exp => "exp",
        }
    }

    /// Formula used in default panel titles.
    pub fn formula(&self) -> &'static str {
        match self {
            TransformKind::Square => "w = z²",
            TransformKind::Cube => "w = z³",
            TransformKind::Inverse => "w = 1/z",
            TransformKind::Exp => "w = eᶻ",
        }
    }
}

impl Transform for TransformKind {
    fn eval(&self, z: Complex64) -> Complex64 {
        match self {
            TransformKind::Square => square(z),
            TransformKind::Cube => cube(z),
            TransformKind::Inverse => inversion(INVERSION_EPSILON)(z),
            TransformKind::Exp => exp(z),
        }
    }
}

impl FromStr for TransformKind {
    type Err = ZmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "square" | "z2" | "z^2" => Ok(TransformKind::Square),
            "cube" | "z3" | "z^3" => Ok(TransformKind::Cube),
            "inverse" | "inversion" | "1/z" => Ok(TransformKind::Inverse),
            "exp" | "e^z" => Ok(TransformKind::Exp),
            _ => Err(ZmapError::UnknownTransform(s.to_string())),
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
