//! Scalar potential by superposition over all sources
//!
//! Both the point and grid paths use the floored policy (`r` never below
//! `R_FLOOR`), and the grid path calls the point routine at every node, so the
//! two always agree for the same point.

use log::debug;

use crate::simulation::grid::{Grid, ScalarGrid};
use crate::simulation::states::{NVec2, SourceCollection};

/// Potential at `point`
/// Charges contribute q / r, dipoles (p.d) / r^3
pub fn potential_at(sources: &SourceCollection, point: NVec2) -> f64 {
    sources
        .sources()
        .fold(0.0, |acc, s| acc + s.potential(point - s.position()))
}

/// Potential at every node of `grid`
pub fn potential_grid(sources: &SourceCollection, grid: &Grid, parallel: bool) -> ScalarGrid {
    debug!(
        "potential grid {}x{} ({} charges, {} dipoles, parallel = {})",
        grid.ny, grid.nx, sources.charges.len(), sources.dipoles.len(), parallel
    );
    let samples = grid.sample(parallel, |p| potential_at(sources, p));
    ScalarGrid::from_samples(*grid, samples)
}
