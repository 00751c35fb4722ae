//! C1: bounding-box discretization and 3D <-> 1D index arithmetic.

use crate::error::{Result, VoidError};

/// An axis-aligned voxel lattice computed once from a (padded) point cloud
/// and immutable thereafter.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    origin: [f64; 3],
    dims: (usize, usize, usize),
    edge: f64,
}

impl Grid {
    /// Computes the tight bounding box of `points` and the minimum `(Nx,
    /// Ny, Nz)` such that every point falls within `0..Nx`, `0..Ny`,
    /// `0..Nz` at the given voxel edge length.
    pub fn from_points(points: &[[f64; 3]], edge: f64, max_grid_voxels: usize) -> Result<Self> {
        if !(edge > 0.0) || !edge.is_finite() {
            return Err(VoidError::InvalidVoxelSize(edge));
        }
        if points.is_empty() {
            return Err(VoidError::EmptyPointCloud);
        }

        let mut min = points[0];
        let mut max = points[0];
        for p in &points[1..] {
            for axis in 0..3 {
                if p[axis] < min[axis] {
                    min[axis] = p[axis];
                }
                if p[axis] > max[axis] {
                    max[axis] = p[axis];
                }
            }
        }

        let mut dims = [0usize; 3];
        for axis in 0..3 {
            dims[axis] = ((max[axis] - min[axis]) / edge).floor() as usize + 1;
        }
        let (nx, ny, nz) = (dims[0], dims[1], dims[2]);

        let requested = nx
            .checked_mul(ny)
            .and_then(|v| v.checked_mul(nz))
            .ok_or_else(|| VoidError::Internal("voxel count overflow".to_string()))?;
        if requested > max_grid_voxels {
            return Err(VoidError::GridTooLarge {
                requested,
                max: max_grid_voxels,
            });
        }

        Ok(Self {
            origin: min,
            dims: (nx, ny, nz),
            edge,
        })
    }

    /// Maps a point to the voxel that contains it. Total on points inside
    /// the grid's bounding box; out-of-range input is a programming error
    /// (the core never calls this with anything but points the grid was
    /// built from), so bounds are checked with `debug_assert!` rather than
    /// a fallible return.
    pub fn voxel_of(&self, point: [f64; 3]) -> (usize, usize, usize) {
        let i = ((point[0] - self.origin[0]) / self.edge).floor() as isize;
        let j = ((point[1] - self.origin[1]) / self.edge).floor() as isize;
        let k = ((point[2] - self.origin[2]) / self.edge).floor() as isize;
        debug_assert!(i >= 0 && (i as usize) < self.dims.0);
        debug_assert!(j >= 0 && (j as usize) < self.dims.1);
        debug_assert!(k >= 0 && (k as usize) < self.dims.2);
        (
            i.clamp(0, self.dims.0 as isize - 1) as usize,
            j.clamp(0, self.dims.1 as isize - 1) as usize,
            k.clamp(0, self.dims.2 as isize - 1) as usize,
        )
    }

    #[inline]
    pub fn linear(&self, (i, j, k): (usize, usize, usize)) -> usize {
        debug_assert!(i < self.dims.0 && j < self.dims.1 && k < self.dims.2);
        i * self.dims.1 * self.dims.2 + j * self.dims.2 + k
    }

    #[inline]
    pub fn unravel(&self, index: usize) -> (usize, usize, usize) {
        let (ny, nz) = (self.dims.1, self.dims.2);
        let i = index / (ny * nz);
        let rem = index % (ny * nz);
        let j = rem / nz;
        let k = rem % nz;
        (i, j, k)
    }

    #[inline]
    pub fn dims(&self) -> (usize, usize, usize) {
        self.dims
    }

    #[inline]
    pub fn num_voxels(&self) -> usize {
        self.dims.0 * self.dims.1 * self.dims.2
    }

    #[inline]
    pub fn edge(&self) -> f64 {
        self.edge
    }

    #[inline]
    pub fn origin(&self) -> [f64; 3] {
        self.origin
    }

    /// Builds a grid of exactly `dims` with its origin at `(0,0,0)`, for
    /// tests that need to lay out a voxel set by hand rather than deriving
    /// the grid from a point cloud.
    #[cfg(test)]
    pub(crate) fn with_dims(dims: (usize, usize, usize), edge: f64) -> Self {
        Self {
            origin: [0.0, 0.0, 0.0],
            dims,
            edge,
        }
    }

    /// The 6 ordinal neighbours of `(i,j,k)` that remain within the grid.
    pub fn neighbors6(&self, (i, j, k): (usize, usize, usize)) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        let (nx, ny, nz) = self.dims;
        let candidates = [
            (i.checked_sub(1), Some(j), Some(k)),
            (i.checked_add(1).filter(|&v| v < nx), Some(j), Some(k)),
            (Some(i), j.checked_sub(1), Some(k)),
            (Some(i), j.checked_add(1).filter(|&v| v < ny), Some(k)),
            (Some(i), Some(j), k.checked_sub(1)),
            (Some(i), Some(j), k.checked_add(1).filter(|&v| v < nz)),
        ];
        candidates
            .into_iter()
            .filter_map(|(i, j, k)| Some((i?, j?, k?)))
    }
}
