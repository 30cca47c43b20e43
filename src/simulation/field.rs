//! Electric field by superposition over all sources
//!
//! Two evaluation modes with the same formulas but different singularity
//! policies:
//! - [`field_at`] (single point): a source exactly on the query point is
//!   skipped, so a dipole's own field vanishes at its position
//! - [`field_grid`] (every grid node): a zero denominator is floored at
//!   `R_FLOOR` instead

use log::debug;

use crate::simulation::grid::{Grid, VectorGrid};
use crate::simulation::states::{NVec2, SourceCollection};

/// Field at `point`, skipping any source that sits exactly on it
pub fn field_at(sources: &SourceCollection, point: NVec2) -> NVec2 {
    sources
        .sources()
        .filter_map(|s| s.field_exact(point - s.position()))
        .fold(NVec2::zeros(), |acc, e| acc + e)
}

/// Field at `point` using the floored policy of the grid path
pub fn field_at_floored(sources: &SourceCollection, point: NVec2) -> NVec2 {
    sources
        .sources()
        .map(|s| s.field_floored(point - s.position()))
        .fold(NVec2::zeros(), |acc, e| acc + e)
}

/// Field (Ex, Ey) at every node of `grid`
pub fn field_grid(sources: &SourceCollection, grid: &Grid, parallel: bool) -> VectorGrid {
    debug!(
        "field grid {}x{} ({} charges, {} dipoles, parallel = {})",
        grid.ny, grid.nx, sources.charges.len(), sources.dipoles.len(), parallel
    );
    let samples = grid.sample(parallel, |p| field_at_floored(sources, p));
    VectorGrid::from_samples(*grid, samples)
}
