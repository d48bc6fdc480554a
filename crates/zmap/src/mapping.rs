//! The computed half of a plot: a path, its image and the shared highlights.
use ndarray::Array1;
use num_complex::Complex64;

use crate::colormap::highlight_colors;
use crate::error::Result;
use crate::highlight::highlight_indices;
use crate::path::SamplePath;
use crate::transform::Transform;

/// A sampled path together with its image under a transform and the
/// highlight positions shared by both planes.
#[derive(Debug, Clone)]
pub struct Mapping {
    path: SamplePath,
    image: Array1<Complex64>,
    highlights: Vec<usize>,
}

impl Mapping {
    /// Compute `image[i] = transform(path[i])` and choose `sample_count`
    /// evenly spaced highlight indices.
    ///
    /// Non-finite image values (from a transform evaluated at or near a
    /// singularity) are kept as-is; callers that care should offset the
    /// path or the transform away from the singular point.
    pub fn compute<T>(path: &SamplePath, transform: &T, sample_count: usize) -> Result<Self>
    where
        T: Transform + ?Sized,
    {
        let highlights = highlight_indices(path.len(), sample_count)?;
        let image = transform.apply(path);

        let non_finite = image
            .iter()
            .filter(|w| !(w.re.is_finite() && w.im.is_finite()))
            .count();
        if non_finite > 0 {
            log::warn!(
                "{} of {} transformed samples are not finite; they will not be drawn",
                non_finite,
                image.len()
            );
        }

        Ok(Self {
            path: path.clone(),
            image,
            highlights,
        })
    }

    pub fn path(&self) -> &SamplePath {
        &self.path
    }

    pub fn image(&self) -> &Array1<Complex64> {
        &self.image
    }

    pub fn highlights(&self) -> &[usize] {
        &self.highlights
    }

    pub fn highlighted_inputs(&self) -> Vec<Complex64> {
        self.path.select(&self.highlights)
    }

    pub fn highlighted_outputs(&self) -> Vec<Complex64> {
        self.highlights.iter().map(|&i| self.image[i]).collect()
    }

    /// CSS colour of each highlight, in highlight order, on the same Viridis
    /// scale the plotted markers use.
    pub fn highlight_colors(&self) -> Vec<String> {
        highlight_colors(self.highlights.len())
    }
}
