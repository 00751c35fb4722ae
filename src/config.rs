//! Explicit, immutable per-invocation configuration.
//!
//! Everything the core needs to vary between runs lives here and is passed
//! by reference through the call graph — no module-level statics, mirroring
//! the teacher crate's `Settings` (`sc::settings::Settings`).

/// Tunable parameters for one call to [`crate::analyze`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Edge length `S` of a voxel, in Angstrom.
    pub voxel_size: f64,
    /// Occlusion-vector popcount boundary at which the matched-pair
    /// exception (see `occlusion` module) is consulted. The source fixed
    /// this at 4; exposed here instead of as a constant per the
    /// "no hidden module-level state" re-architecture note.
    pub occlusion_threshold: u8,
    /// Minimum voxel count for a group to survive filtering.
    pub min_voxels: usize,
    /// Minimum volume (Angstrom^3) for a group to survive filtering.
    pub min_volume: Option<f64>,
    /// Hard cap on `Nx*Ny*Nz`; exceeding it returns `GridTooLarge` instead
    /// of attempting the allocation.
    pub max_grid_voxels: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            voxel_size: 1.0,
            occlusion_threshold: 4,
            min_voxels: 2,
            min_volume: None,
            max_grid_voxels: 50_000_000,
        }
    }
}
