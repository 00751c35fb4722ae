//! C7: drops undersized groups, then re-indexes the survivors by descending
//! volume (ties broken by ascending original id).

use std::collections::HashMap;

use crate::config::Config;
use crate::group::VoxelGroup;

pub(crate) fn filter_and_sort(
    mut groups: Vec<(usize, VoxelGroup)>,
    config: &Config,
) -> HashMap<u32, VoxelGroup> {
    groups.retain(|(_, group)| {
        group.num_voxels >= config.min_voxels
            && match config.min_volume {
                Some(min) => group.volume >= min,
                None => true,
            }
    });

    groups.sort_by(|(id_a, a), (id_b, b)| {
        b.volume
            .partial_cmp(&a.volume)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(id_a.cmp(id_b))
    });

    groups
        .into_iter()
        .enumerate()
        .map(|(new_id, (_, group))| (new_id as u32, group))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::group::VoxelKind;
    use rustc_hash::FxHashSet;

    fn group(grid: &Grid, voxel: (usize, usize, usize), n: usize) -> VoxelGroup {
        let mut indices = FxHashSet::default();
        indices.insert(grid.linear(voxel));
        for extra in 1..n {
            let (i, j, k) = voxel;
            if i + extra < grid.dims().0 {
                indices.insert(grid.linear((i + extra, j, k)));
            }
        }
        VoxelGroup::new(grid, indices, VoxelKind::Cavity)
    }

    #[test]
    fn undersized_groups_are_dropped() {
        let grid = Grid::from_points(&[[0.0, 0.0, 0.0], [5.0, 0.0, 0.0]], 1.0, 1000).unwrap();
        let config = Config {
            min_voxels: 2,
            ..Config::default()
        };
        let groups = vec![(0, group(&grid, (0, 0, 0), 1)), (1, group(&grid, (2, 0, 0), 3))];
        let result = filter_and_sort(groups, &config);
        assert_eq!(result.len(), 1);
        assert_eq!(result[&0].num_voxels, 3);
    }

    #[test]
    fn survivors_are_sorted_by_descending_volume() {
        let grid = Grid::from_points(&[[0.0, 0.0, 0.0], [5.0, 0.0, 0.0]], 1.0, 1000).unwrap();
        let config = Config::default();
        let groups = vec![(0, group(&grid, (0, 0, 0), 2)), (1, group(&grid, (3, 0, 0), 4))];
        let result = filter_and_sort(groups, &config);
        assert_eq!(result[&0].num_voxels, 4);
        assert_eq!(result[&1].num_voxels, 2);
    }

    #[test]
    fn ties_break_on_ascending_original_id() {
        let grid = Grid::from_points(&[[0.0, 0.0, 0.0], [5.0, 0.0, 0.0]], 1.0, 1000).unwrap();
        let config = Config::default();
        let groups = vec![(5, group(&grid, (0, 0, 0), 2)), (2, group(&grid, (3, 0, 0), 2))];
        let result = filter_and_sort(groups, &config);
        // Both have equal volume; original id 2 should win new id 0.
        assert_eq!(result[&0].voxels, group(&grid, (3, 0, 0), 2).voxels);
    }
}
