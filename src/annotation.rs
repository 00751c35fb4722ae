//! C8: rolls up filtered groups into the summary record returned to callers.

use std::collections::HashMap;

use serde::Serialize;

use crate::group::VoxelGroup;

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct CategorySummary {
    pub total_volume: f64,
    pub largest_volume: f64,
    pub num: usize,
    pub volumes: HashMap<u32, f64>,
    pub dimensions: HashMap<u32, (f64, f64, f64)>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct Annotation {
    pub hub: CategorySummary,
    pub pore: CategorySummary,
    pub cavity: CategorySummary,
    pub pocket: CategorySummary,
}

/// The filtered, sorted groups for every reported category. `hub` and
/// `pocket` are always empty: see §4.5/§9, the classifier never produces
/// those kinds, they're reserved output slots.
#[derive(Clone, Debug, Default)]
pub struct AnnotatedVoxels {
    pub hubs: HashMap<u32, VoxelGroup>,
    pub pores: HashMap<u32, VoxelGroup>,
    pub pockets: HashMap<u32, VoxelGroup>,
    pub cavities: HashMap<u32, VoxelGroup>,
    pub occluded: HashMap<u32, VoxelGroup>,
}

pub(crate) fn summarize(groups: &HashMap<u32, VoxelGroup>) -> CategorySummary {
    let mut total_volume = 0.0;
    let mut largest_volume = 0.0f64;
    let mut volumes = HashMap::with_capacity(groups.len());
    let mut dimensions = HashMap::with_capacity(groups.len());

    for (&id, group) in groups {
        total_volume += group.volume;
        largest_volume = largest_volume.max(group.volume);
        volumes.insert(id, group.volume);
        dimensions.insert(id, group.axial_lengths);
    }

    CategorySummary {
        total_volume,
        largest_volume,
        num: groups.len(),
        volumes,
        dimensions,
    }
}

pub(crate) fn annotate(voxels: &AnnotatedVoxels) -> Annotation {
    Annotation {
        hub: summarize(&voxels.hubs),
        pore: summarize(&voxels.pores),
        cavity: summarize(&voxels.cavities),
        pocket: summarize(&voxels.pockets),
    }
}
