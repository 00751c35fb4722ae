//! Error types surfaced by the core analysis pipeline.

/// Failure modes of [`crate::analyze`].
///
/// Every variant maps to one of the three categories from the error-handling
/// design: `EmptyPointCloud`/`NonFiniteCoordinate`/`InvalidVoxelSize` are the
/// input-error category, `GridTooLarge` guards against pathological
/// allocations, and `Internal` represents a broken invariant rather than a
/// recoverable condition.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum VoidError {
    #[error("empty point cloud")]
    EmptyPointCloud,

    #[error("non-finite coordinate at point {index}")]
    NonFiniteCoordinate { index: usize },

    #[error("voxel_size must be positive, got {0}")]
    InvalidVoxelSize(f64),

    #[error("grid too large: {requested} voxels exceeds cap of {max}")]
    GridTooLarge { requested: usize, max: usize },

    #[error("internal invariant violated: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, VoidError>;
