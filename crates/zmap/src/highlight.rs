//! Evenly spaced highlight positions along a sample path.
use itertools_num::linspace;

use crate::error::{Result, ZmapError};

/// Pick `count` indices evenly spaced over `[0, len - 1]`.
///
/// Positions are linearly interpolated and rounded to the nearest index. When
/// `count >= 2` the first index is `0` and the last is `len - 1`; a single
/// highlight lands on index `0`. Asking for more highlights than samples
/// yields repeated indices rather than an error.
pub fn highlight_indices(len: usize, count: usize) -> Result<Vec<usize>> {
    if len == 0 {
        return Err(ZmapError::EmptyPath);
    }
    if count == 0 {
        return Err(ZmapError::InvalidSampleCount(count));
    }

    let last = (len - 1) as f64;
    let indices = linspace(0.0, last, count)
        .map(|pos: f64| (pos.round() as usize).min(len - 1))
        .collect();
    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_included() {
        for len in [2usize, 3, 10, 200, 1001] {
            for count in 2..=len.min(25) {
                let idx = highlight_indices(len, count).unwrap();
                assert_eq!(idx.len(), count);
                assert_eq!(idx[0], 0);
                assert_eq!(*idx.last().unwrap(), len - 1);
                assert!(
                    idx.windows(2).all(|w| w[0] < w[1]),
                    "indices repeat for len {} count {}",
                    len,
                    count
                );
            }
        }
    }

    #[test]
    fn test_strictly_increasing_when_count_fits() {
        let idx = highlight_indices(200, 11).unwrap();
        assert!(idx.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_rounds_to_nearest() {
        // 199 / 10 = 19.9 per step
        let idx = highlight_indices(200, 11).unwrap();
        assert_eq!(idx, vec![0, 20, 40, 60, 80, 100, 119, 139, 159, 179, 199]);
    }

    #[test]
    fn test_single_highlight() {
        assert_eq!(highlight_indices(50, 1).unwrap(), vec![0]);
    }

    #[test]
    fn test_oversampling_repeats_indices() {
        let idx = highlight_indices(3, 5).unwrap();
        assert_eq!(idx, vec![0, 1, 1, 2, 2]);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(highlight_indices(0, 11), Err(ZmapError::EmptyPath)));
        assert!(matches!(
            highlight_indices(10, 0),
            Err(ZmapError::InvalidSampleCount(0))
        ));
    }
}
