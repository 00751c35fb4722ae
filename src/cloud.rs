//! Input point cloud: the core's only input type.

use crate::error::{Result, VoidError};

/// A sequence of atom centres, in Angstrom. Input only — the core never
/// mutates a `PointCloud` after construction.
#[derive(Clone, Debug, Default)]
pub struct PointCloud {
    points: Vec<[f64; 3]>,
}

impl PointCloud {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, point: [f64; 3]) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[[f64; 3]] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Checks emptiness and NaN/infinity, the two `InputError` conditions
    /// that are about the data rather than the config. `voxel_size <= 0` is
    /// validated alongside `Config` at the call site instead.
    pub fn validate(&self) -> Result<()> {
        if self.points.is_empty() {
            return Err(VoidError::EmptyPointCloud);
        }
        for (index, p) in self.points.iter().enumerate() {
            if p.iter().any(|c| !c.is_finite()) {
                return Err(VoidError::NonFiniteCoordinate { index });
            }
        }
        Ok(())
    }
}

impl From<Vec<[f64; 3]>> for PointCloud {
    fn from(points: Vec<[f64; 3]>) -> Self {
        Self { points }
    }
}

impl FromIterator<[f64; 3]> for PointCloud {
    fn from_iter<T: IntoIterator<Item = [f64; 3]>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
