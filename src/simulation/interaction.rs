//! Force and torque on every dipole from the combined field
//!
//! Each dipole is evaluated at its own position against the full collection;
//! the exact-coincidence skip in [`field_at`] and [`field_gradient`] removes
//! the dipole's own term, so no special casing is needed here.

use std::fmt;

use log::debug;

use crate::configuration::config::GradientKernel;
use crate::simulation::field::field_at;
use crate::simulation::gradient::{field_gradient, FieldGradient};
use crate::simulation::states::{DipoleId, NVec2, PointDipole, SourceCollection};

/// Result of one solve for a single dipole
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DipoleInteraction {
    pub id: DipoleId,
    pub field: NVec2, // E at the dipole, own term excluded
    pub gradient: FieldGradient, // grad E at the dipole, own term excluded
    pub force: NVec2, // (p . grad) E
    pub torque: f64, // z component of p x E
}

/// Force and torque for every dipole in `sources`, in insertion order
///
/// Recomputed from scratch on each call
pub fn solve_dipole_interactions(sources: &SourceCollection, kernel: GradientKernel) -> Vec<DipoleInteraction> {
    sources
        .dipoles
        .iter()
        .enumerate()
        .map(|(i, dipole)| {
            let out = interact(DipoleId(i), dipole, sources, kernel);
            debug!(
                "dipole {}: F = ({:.4e}, {:.4e}), tau = {:.4e}",
                i, out.force.x, out.force.y, out.torque
            );
            out
        })
        .collect()
}

fn interact(id: DipoleId, dipole: &PointDipole, sources: &SourceCollection, kernel: GradientKernel) -> DipoleInteraction {
    let e = field_at(sources, dipole.x);
    let gradient = field_gradient(sources, dipole.x, kernel);

    // Fx = px dEx/dx + py dEx/dy,  Fy = px dEy/dx + py dEy/dy
    let force = gradient.directional(dipole.p);

    // tau = px Ey - py Ex
    let torque = dipole.p.perp(&e);

    DipoleInteraction {
        id,
        field: e,
        gradient,
        force,
        torque,
    }
}

/// One display line per dipole: moment, position, direction, force, torque
pub struct DipoleReport<'a> {
    pub dipole: &'a PointDipole,
    pub interaction: &'a DipoleInteraction,
}

impl fmt::Display for DipoleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.dipole;
        let it = self.interaction;
        write!(
            f,
            "p={:.2} @ ({}, {}) θ={:.1}° F=({:.2}, {:.2}) τ={:.2}",
            d.magnitude(),
            d.x.x,
            d.x.y,
            d.angle_deg,
            it.force.x,
            it.force.y,
            it.torque
        )
    }
}
