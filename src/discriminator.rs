//! C5: classifies a buried connected component as a pore, cavity, or
//! occluded pocket, by counting how many separate "mouths" it has onto the
//! exposed surface.

use rustc_hash::FxHashSet;

use crate::grid::Grid;
use crate::labeller;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Classification {
    Cavity,
    Pore,
    Occluded,
}

/// A component with no route to the exposed surface at all is occluded. One
/// with a single contiguous mouth is a cavity (dead end); two or more
/// disjoint mouths make it a through-pore.
pub(crate) fn classify_component(
    component: &FxHashSet<usize>,
    exposed: &FxHashSet<usize>,
    grid: &Grid,
) -> Classification {
    let direct: FxHashSet<usize> = component
        .iter()
        .copied()
        .filter(|&index| {
            grid.neighbors6(grid.unravel(index))
                .any(|n| exposed.contains(&grid.linear(n)))
        })
        .collect();

    if direct.is_empty() {
        return Classification::Occluded;
    }

    let mut extended = direct.clone();
    extended.extend(component.iter().copied().filter(|&index| {
        grid.neighbors6(grid.unravel(index))
            .any(|n| direct.contains(&grid.linear(n)))
    }));

    match labeller::label_components(&extended, grid).len() {
        0 => Classification::Occluded,
        1 => Classification::Cavity,
        _ => Classification::Pore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_with_no_exposed_neighbor_is_occluded() {
        let points = [[0.0, 0.0, 0.0], [2.0, 2.0, 2.0]];
        let grid = Grid::from_points(&points, 1.0, 1000).unwrap();
        let component: FxHashSet<usize> = [grid.linear((1, 1, 1))].into_iter().collect();
        let exposed = FxHashSet::default();
        assert_eq!(
            classify_component(&component, &exposed, &grid),
            Classification::Occluded
        );
    }

    #[test]
    fn component_with_single_mouth_is_a_cavity() {
        let points = [[0.0, 0.0, 0.0], [2.0, 2.0, 2.0]];
        let grid = Grid::from_points(&points, 1.0, 1000).unwrap();
        let component: FxHashSet<usize> = [grid.linear((1, 1, 1))].into_iter().collect();
        let exposed: FxHashSet<usize> = [grid.linear((0, 1, 1))].into_iter().collect();
        assert_eq!(
            classify_component(&component, &exposed, &grid),
            Classification::Cavity
        );
    }

    #[test]
    fn component_with_two_disjoint_mouths_is_a_pore() {
        // A 1x1x5 tunnel along z: (1,1,0)..(1,1,4), exposed only at the two
        // ends. The middle voxel (1,1,2) is far enough from both mouths
        // that the single-hop extension (step 2 of the discriminator)
        // doesn't bridge the two openings into one component.
        let points = [[0.0, 0.0, 0.0], [2.0, 2.0, 4.0]];
        let grid = Grid::from_points(&points, 1.0, 1000).unwrap();
        let component: FxHashSet<usize> = (0..5)
            .map(|k| grid.linear((1, 1, k)))
            .collect();
        let exposed: FxHashSet<usize> = [(0, 1, 0), (2, 1, 0), (0, 1, 4), (2, 1, 4)]
            .into_iter()
            .map(|c| grid.linear(c))
            .collect();
        assert_eq!(
            classify_component(&component, &exposed, &grid),
            Classification::Pore
        );
    }
}
