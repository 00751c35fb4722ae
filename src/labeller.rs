//! C4: 6-connected component labelling over a sparse voxel index set.
//!
//! The original implementation repeatedly `deepcopy`s the remaining-index
//! set and does an O(n) membership scan per neighbour check; both are
//! dropped here in favour of a single `BTreeSet` of unvisited indices (for
//! deterministic, ascending seed order) and `FxHashSet` membership tests.

use std::collections::{BTreeSet, VecDeque};

use rustc_hash::FxHashSet;

use crate::grid::Grid;

/// Splits `indices` into its 6-connected components. Components are
/// returned in ascending order of their seed voxel's linear index, which is
/// also the order in which `indices` is drained — this makes labelling
/// order deterministic and reproducible across runs.
pub(crate) fn label_components(indices: &FxHashSet<usize>, grid: &Grid) -> Vec<FxHashSet<usize>> {
    let mut remaining: BTreeSet<usize> = indices.iter().copied().collect();
    let mut components = Vec::new();

    while let Some(&seed) = remaining.iter().next() {
        remaining.remove(&seed);
        let mut component = FxHashSet::default();
        component.insert(seed);

        let mut queue = VecDeque::new();
        queue.push_back(seed);
        while let Some(current) = queue.pop_front() {
            let coord = grid.unravel(current);
            for neighbor in grid.neighbors6(coord) {
                let neighbor_index = grid.linear(neighbor);
                if remaining.remove(&neighbor_index) {
                    component.insert(neighbor_index);
                    queue.push_back(neighbor_index);
                }
            }
        }
        components.push(component);
    }
    components
}
