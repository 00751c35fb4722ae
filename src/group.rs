//! Data model: a labelled subset of voxels (§3 "VoxelGroup").

use rustc_hash::FxHashSet;

use crate::grid::Grid;
use crate::metrics;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VoxelKind {
    Protein,
    Exposed,
    Buried,
    Hub,
    Pore,
    Pocket,
    Cavity,
    Occluded,
}

/// A labelled subset of voxels with its derived metrics (C6). Metrics are
/// computed once at construction, since a `VoxelGroup` is never mutated
/// after it's built.
#[derive(Clone, Debug)]
pub struct VoxelGroup {
    pub kind: VoxelKind,
    pub voxels: FxHashSet<(usize, usize, usize)>,
    pub indices: FxHashSet<usize>,
    pub num_voxels: usize,
    pub volume: f64,
    pub axial_lengths: (f64, f64, f64),
}

impl VoxelGroup {
    pub(crate) fn new(grid: &Grid, indices: FxHashSet<usize>, kind: VoxelKind) -> Self {
        let voxels: FxHashSet<(usize, usize, usize)> =
            indices.iter().map(|&idx| grid.unravel(idx)).collect();
        let num_voxels = indices.len();
        let volume = metrics::volume(num_voxels, grid.edge());
        let axial_lengths = metrics::axial_lengths(&voxels, grid.edge());
        Self {
            kind,
            voxels,
            indices,
            num_voxels,
            volume,
            axial_lengths,
        }
    }
}
