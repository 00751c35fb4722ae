//! C6: per-group volume and principal-axis lengths.
//!
//! Kept as pure functions over a voxel set rather than methods, so both
//! `group::VoxelGroup::new` and tests can exercise them directly.

use rustc_hash::FxHashSet;

pub(crate) fn volume(num_voxels: usize, edge: f64) -> f64 {
    num_voxels as f64 * edge * edge * edge
}

/// `(max - min + 1) * edge` per axis over `voxels`. `(0.0, 0.0, 0.0)` for an
/// empty group.
pub(crate) fn axial_lengths(voxels: &FxHashSet<(usize, usize, usize)>, edge: f64) -> (f64, f64, f64) {
    let mut iter = voxels.iter();
    let Some(&(i0, j0, k0)) = iter.next() else {
        return (0.0, 0.0, 0.0);
    };
    let (mut min, mut max) = ([i0, j0, k0], [i0, j0, k0]);
    for &(i, j, k) in iter {
        let v = [i, j, k];
        for axis in 0..3 {
            if v[axis] < min[axis] {
                min[axis] = v[axis];
            }
            if v[axis] > max[axis] {
                max[axis] = v[axis];
            }
        }
    }
    (
        (max[0] - min[0] + 1) as f64 * edge,
        (max[1] - min[1] + 1) as f64 * edge,
        (max[2] - min[2] + 1) as f64 * edge,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_scales_with_edge_cubed() {
        assert_eq!(volume(8, 2.0), 64.0);
    }

    #[test]
    fn axial_lengths_of_single_voxel_is_one_edge() {
        let mut voxels = FxHashSet::default();
        voxels.insert((3, 4, 5));
        assert_eq!(axial_lengths(&voxels, 1.0), (1.0, 1.0, 1.0));
    }

    #[test]
    fn axial_lengths_spans_the_bounding_box() {
        let voxels: FxHashSet<(usize, usize, usize)> =
            [(0, 0, 0), (2, 1, 0), (0, 3, 4)].into_iter().collect();
        assert_eq!(axial_lengths(&voxels, 1.0), (3.0, 4.0, 5.0));
    }

    #[test]
    fn empty_group_has_zero_lengths() {
        let voxels = FxHashSet::default();
        assert_eq!(axial_lengths(&voxels, 1.0), (0.0, 0.0, 0.0));
    }
}
