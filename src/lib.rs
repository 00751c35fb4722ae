//! Classifies the internal voids of a voxelized point cloud into pores,
//! cavities, and occluded pockets.
//!
//! The pipeline: pad the surface (C2) so adjacent atoms don't leak a
//! one-voxel gap, discretize into a grid (C1), classify every empty voxel
//! as buried or exposed (C3), connect buried voxels into components (C4),
//! and discriminate each component into a pore, cavity, or occluded void
//! (C5) before filtering, sorting (C7), and summarizing (C8).

pub mod annotation;
pub mod cloud;
pub mod config;
pub mod error;
pub mod grid;
pub mod group;

mod discriminator;
mod filter_sort;
mod labeller;
mod metrics;
mod occlusion;
mod padder;

use std::collections::HashMap;

use vob::Vob;

pub use annotation::{Annotation, AnnotatedVoxels, CategorySummary};
pub use cloud::PointCloud;
pub use config::Config;
pub use error::{Result, VoidError};
pub use grid::Grid;
pub use group::{VoxelGroup, VoxelKind};

use discriminator::Classification;

/// Runs the full pipeline on `cloud` under `config` and returns the summary
/// annotation alongside the underlying voxel groups.
pub fn analyze(cloud: &PointCloud, config: &Config) -> Result<(Annotation, AnnotatedVoxels)> {
    cloud.validate()?;
    if !(config.voxel_size > 0.0) || !config.voxel_size.is_finite() {
        return Err(VoidError::InvalidVoxelSize(config.voxel_size));
    }

    let padded = padder::pad(cloud.points(), config.voxel_size);
    let grid = Grid::from_points(&padded, config.voxel_size, config.max_grid_voxels)?;

    let mut occupancy = Vob::<u32>::fill_with_false(grid.num_voxels());
    for &point in &padded {
        occupancy.set(grid.linear(grid.voxel_of(point)), true);
    }

    let (buried, exposed) = occlusion::classify(&grid, &occupancy, config.occlusion_threshold);
    let components = labeller::label_components(&buried, &grid);

    let mut pore_groups = Vec::new();
    let mut cavity_groups = Vec::new();
    let mut occluded_groups = Vec::new();

    for (original_id, component) in components.into_iter().enumerate() {
        let classification = discriminator::classify_component(&component, &exposed, &grid);
        let bucket = match classification {
            Classification::Pore => &mut pore_groups,
            Classification::Cavity => &mut cavity_groups,
            Classification::Occluded => &mut occluded_groups,
        };
        let kind = match classification {
            Classification::Pore => VoxelKind::Pore,
            Classification::Cavity => VoxelKind::Cavity,
            Classification::Occluded => VoxelKind::Occluded,
        };
        bucket.push((original_id, VoxelGroup::new(&grid, component, kind)));
    }

    let voxels = AnnotatedVoxels {
        hubs: HashMap::new(),
        pores: filter_sort::filter_and_sort(pore_groups, config),
        pockets: HashMap::new(),
        cavities: filter_sort::filter_and_sort(cavity_groups, config),
        occluded: filter_sort::filter_and_sort(occluded_groups, config),
    };
    let annotation = annotation::annotate(&voxels);

    Ok((annotation, voxels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn cube_surface(n: i64) -> Vec<[f64; 3]> {
        let mut points = Vec::new();
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    let on_surface = i == 0
                        || j == 0
                        || k == 0
                        || i == n - 1
                        || j == n - 1
                        || k == n - 1;
                    if on_surface {
                        points.push([i as f64, j as f64, k as f64]);
                    }
                }
            }
        }
        points
    }

    #[test]
    fn sealed_hollow_cube_is_occluded_not_a_cavity() {
        // A fully closed shell has no voxel touching the exposed region at
        // all (the shell itself separates interior from exterior), so the
        // direct surface set is empty and the discriminator reports
        // occluded rather than cavity or pore.
        let cloud: PointCloud = cube_surface(5).into_iter().collect();
        let config = Config {
            voxel_size: 1.0,
            min_voxels: 1,
            ..Config::default()
        };
        let (annotation, voxels) = analyze(&cloud, &config).unwrap();
        assert_eq!(annotation.cavity.num, 0);
        assert_eq!(annotation.pore.num, 0);
        assert_eq!(voxels.occluded.len(), 1);
    }

    #[test]
    fn empty_cloud_is_an_input_error() {
        let cloud = PointCloud::new();
        let config = Config::default();
        assert!(matches!(
            analyze(&cloud, &config).unwrap_err(),
            VoidError::EmptyPointCloud
        ));
    }

    #[test]
    fn non_positive_voxel_size_is_rejected() {
        let cloud: PointCloud = vec![[0.0, 0.0, 0.0]].into_iter().collect();
        let config = Config {
            voxel_size: 0.0,
            ..Config::default()
        };
        assert!(matches!(
            analyze(&cloud, &config).unwrap_err(),
            VoidError::InvalidVoxelSize(_)
        ));
    }

    #[test]
    fn undersized_void_is_filtered_out_by_min_voxels() {
        let cloud: PointCloud = cube_surface(5).into_iter().collect();
        let config = Config {
            voxel_size: 1.0,
            min_voxels: 1000,
            ..Config::default()
        };
        let (_annotation, voxels) = analyze(&cloud, &config).unwrap();
        assert!(voxels.occluded.is_empty());
    }

    /// Runs the pipeline stages after padding directly on a hand-built
    /// grid and protein set, the way §8's "concrete scenarios" are meant
    /// to be exercised: bypassing the padder, which is tested on its own.
    fn run_pipeline(
        grid: &Grid,
        protein: FxHashSet<(usize, usize, usize)>,
        config: &Config,
    ) -> (Annotation, AnnotatedVoxels) {
        let mut occupancy = Vob::<u32>::fill_with_false(grid.num_voxels());
        for &coord in &protein {
            occupancy.set(grid.linear(coord), true);
        }
        let (buried, exposed) = occlusion::classify(grid, &occupancy, config.occlusion_threshold);
        let components = labeller::label_components(&buried, grid);

        let mut pore_groups = Vec::new();
        let mut cavity_groups = Vec::new();
        let mut occluded_groups = Vec::new();
        for (original_id, component) in components.into_iter().enumerate() {
            let classification = discriminator::classify_component(&component, &exposed, grid);
            let (bucket, kind) = match classification {
                Classification::Pore => (&mut pore_groups, VoxelKind::Pore),
                Classification::Cavity => (&mut cavity_groups, VoxelKind::Cavity),
                Classification::Occluded => (&mut occluded_groups, VoxelKind::Occluded),
            };
            bucket.push((original_id, VoxelGroup::new(grid, component, kind)));
        }

        let voxels = AnnotatedVoxels {
            hubs: HashMap::new(),
            pores: filter_sort::filter_and_sort(pore_groups, config),
            pockets: HashMap::new(),
            cavities: filter_sort::filter_and_sort(cavity_groups, config),
            occluded: filter_sort::filter_and_sort(occluded_groups, config),
        };
        (annotation::annotate(&voxels), voxels)
    }

    #[test]
    fn solid_block_with_a_through_tunnel_is_one_pore() {
        // A 5x5x5 solid block occupying (1..=5) of a 7x7x7 grid, drilled
        // through along z at (3,3,*): the tunnel's two mouths sit flush
        // with the block's top and bottom faces, each one voxel from the
        // grid's empty margin.
        let grid = Grid::with_dims((7, 7, 7), 1.0);
        let mut protein = FxHashSet::default();
        for i in 1..=5 {
            for j in 1..=5 {
                for k in 1..=5 {
                    if i == 3 && j == 3 {
                        continue;
                    }
                    protein.insert((i, j, k));
                }
            }
        }
        let config = Config {
            min_voxels: 1,
            ..Config::default()
        };
        let (annotation, voxels) = run_pipeline(&grid, protein, &config);
        assert_eq!(annotation.pore.num, 1);
        assert_eq!(annotation.cavity.num, 0);
        assert_eq!(voxels.pores[&0].num_voxels, 5);
        assert_eq!(voxels.pores[&0].volume, 5.0);
    }
}
