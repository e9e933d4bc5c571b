//! Voxel grid geometry.

use crate::error::ScoreError;
use kerma_core::Vec3;

/// The fixed geometry of a voxel grid: dimension counts, bounds, and
/// the per-axis resolutions derived from them.
///
/// Immutable for the lifetime of a run. Resolution per axis is
/// `(max - min) / dim`; voxel volume is the product of the three
/// resolutions.
///
/// # Examples
///
/// ```
/// use kerma_core::Vec3;
/// use kerma_score::GridGeometry;
///
/// // 101 x 101 x 100 water-tank grid, 1.5 mm transverse resolution.
/// let geometry = GridGeometry::new(
///     [101, 101, 100],
///     Vec3::new(-75.75, -75.75, -50.0),
///     Vec3::new(75.75, 75.75, 0.0),
/// )
/// .unwrap();
/// assert!((geometry.resolution()[0] - 1.5).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GridGeometry {
    dims: [usize; 3],
    min: Vec3,
    max: Vec3,
    resolution: [f64; 3],
    voxel_volume: f64,
}

impl GridGeometry {
    /// Create a grid geometry, validating the configuration.
    ///
    /// # Errors
    ///
    /// Fails fast on any axis with zero voxels or with bounds that are
    /// not finite and strictly increasing; a violation here is a
    /// configuration error, never coerced.
    pub fn new(dims: [usize; 3], min: Vec3, max: Vec3) -> Result<Self, ScoreError> {
        const AXES: [&str; 3] = ["x", "y", "z"];
        let mins = [min.x, min.y, min.z];
        let maxs = [max.x, max.y, max.z];

        let mut resolution = [0.0; 3];
        for axis in 0..3 {
            if dims[axis] == 0 {
                return Err(ScoreError::EmptyAxis { axis: AXES[axis] });
            }
            if !mins[axis].is_finite() || !maxs[axis].is_finite() || mins[axis] >= maxs[axis] {
                return Err(ScoreError::InvalidBounds {
                    axis: AXES[axis],
                    min: mins[axis],
                    max: maxs[axis],
                });
            }
            resolution[axis] = (maxs[axis] - mins[axis]) / dims[axis] as f64;
        }

        Ok(Self {
            dims,
            min,
            max,
            resolution,
            voxel_volume: resolution[0] * resolution[1] * resolution[2],
        })
    }

    /// Voxel counts per axis.
    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Total voxel count.
    pub fn voxel_count(&self) -> usize {
        self.dims[0] * self.dims[1] * self.dims[2]
    }

    /// Lower grid corner.
    pub fn min(&self) -> Vec3 {
        self.min
    }

    /// Upper grid corner.
    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// Per-axis voxel edge lengths.
    pub fn resolution(&self) -> [f64; 3] {
        self.resolution
    }

    /// Volume of one voxel.
    pub fn voxel_volume(&self) -> f64 {
        self.voxel_volume
    }

    /// Map a position to its voxel index triple, or `None` when any
    /// axis falls outside `[0, dim)`.
    pub fn voxel_index(&self, position: Vec3) -> Option<[usize; 3]> {
        let coords = [position.x, position.y, position.z];
        let mins = [self.min.x, self.min.y, self.min.z];

        let mut index = [0usize; 3];
        for axis in 0..3 {
            let i = ((coords[axis] - mins[axis]) / self.resolution[axis]).floor();
            // Negated so NaN positions are discarded too.
            if !(i >= 0.0 && i < self.dims[axis] as f64) {
                return None;
            }
            index[axis] = i as usize;
        }
        Some(index)
    }

    /// Flat row-major offset for a validated index triple.
    pub(crate) fn offset(&self, index: [usize; 3]) -> usize {
        (index[0] * self.dims[1] + index[1]) * self.dims[2] + index[2]
    }
}
