//! C3: 6-directional occlusion classification of empty voxels.
//!
//! For every empty voxel we ask, along each of the 6 axis directions,
//! whether there's a protein voxel somewhere further out along that ray.
//! `ProjectionTables` makes that an O(1) lookup: per grid column we keep
//! only the (min, max) index of any protein voxel in that column, since
//! that's all a ray cast needs.

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use vob::Vob;

use crate::grid::Grid;

/// Per-column (min, max) index of protein voxels, one table per axis.
/// `x_col` is indexed by `(j, k)`, `y_col` by `(i, k)`, `z_col` by `(i, j)`.
pub(crate) struct ProjectionTables {
    x_col: Vec<Option<(u32, u32)>>,
    y_col: Vec<Option<(u32, u32)>>,
    z_col: Vec<Option<(u32, u32)>>,
}

impl ProjectionTables {
    pub(crate) fn build(grid: &Grid, occupancy: &Vob<u32>) -> Self {
        let (nx, ny, nz) = grid.dims();
        let mut x_col = vec![None; ny * nz];
        let mut y_col = vec![None; nx * nz];
        let mut z_col = vec![None; nx * ny];

        for index in 0..grid.num_voxels() {
            if occupancy.get(index) != Some(true) {
                continue;
            }
            let (i, j, k) = grid.unravel(index);
            let (i, j, k) = (i as u32, j as u32, k as u32);
            update(&mut x_col[j as usize * nz + k as usize], i);
            update(&mut y_col[i as usize * nz + k as usize], j);
            update(&mut z_col[i as usize * ny + j as usize], k);
        }

        Self { x_col, y_col, z_col }
    }

    /// The 6-bit occlusion vector for empty voxel `(i,j,k)`: one bit per
    /// axis direction, set when a protein voxel occludes that side. Bit
    /// order is `[-x, +x, -y, +y, -z, +z]`.
    fn directions(&self, grid: &Grid, (i, j, k): (usize, usize, usize)) -> [bool; 6] {
        let (_, ny, nz) = grid.dims();
        let (iu, ju, ku) = (i as u32, j as u32, k as u32);

        let x = self.x_col[j * nz + k];
        let y = self.y_col[i * nz + k];
        let z = self.z_col[i * ny + j];

        [
            x.is_some_and(|(min, _)| min < iu),
            x.is_some_and(|(_, max)| max > iu),
            y.is_some_and(|(min, _)| min < ju),
            y.is_some_and(|(_, max)| max > ju),
            z.is_some_and(|(min, _)| min < ku),
            z.is_some_and(|(_, max)| max > ku),
        ]
    }
}

fn update(cell: &mut Option<(u32, u32)>, value: u32) {
    *cell = Some(match *cell {
        None => (value, value),
        Some((min, max)) => (min.min(value), max.max(value)),
    });
}

/// A 4-of-6 occlusion count is still treated as buried when the two
/// unoccluded directions are an opposing pair (`-x/+x`, `-y/+y`, `-z/+z`):
/// that's a straight channel penetrating along a single axis, not a
/// voxel genuinely open to the surface.
fn is_matched_pair(directions: [bool; 6]) -> bool {
    const PAIRS: [(usize, usize); 3] = [(0, 1), (2, 3), (4, 5)];
    PAIRS
        .iter()
        .any(|&(a, b)| !directions[a] && !directions[b])
}

/// Splits every empty voxel in `grid` into buried and exposed sets,
/// evaluated independently and in parallel since classification of one
/// empty voxel never depends on another's classification.
pub(crate) fn classify(
    grid: &Grid,
    occupancy: &Vob<u32>,
    occlusion_threshold: u8,
) -> (FxHashSet<usize>, FxHashSet<usize>) {
    let tables = ProjectionTables::build(grid, occupancy);

    let empty_indices: Vec<usize> = (0..grid.num_voxels())
        .filter(|&index| occupancy.get(index) != Some(true))
        .collect();

    let verdicts: Vec<(usize, bool)> = empty_indices
        .par_iter()
        .map(|&index| {
            let coord = grid.unravel(index);
            let directions = tables.directions(grid, coord);
            let occluded_count = directions.iter().filter(|&&b| b).count() as u8;
            let buried = match occluded_count.cmp(&occlusion_threshold) {
                std::cmp::Ordering::Greater => true,
                std::cmp::Ordering::Equal => is_matched_pair(directions),
                std::cmp::Ordering::Less => false,
            };
            (index, buried)
        })
        .collect();

    let mut buried = FxHashSet::default();
    let mut exposed = FxHashSet::default();
    for (index, is_buried) in verdicts {
        if is_buried {
            buried.insert(index);
        } else {
            exposed.insert(index);
        }
    }
    (buried, exposed)
}
