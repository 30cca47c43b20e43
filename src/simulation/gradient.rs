//! Field gradient tensor at a single point
//!
//! Closed-form derivatives summed over all sources. A source whose `r^5`
//! vanishes at the query point is skipped, same as [`field_at`].
//!
//! [`field_at`]: crate::simulation::field::field_at

use crate::configuration::config::GradientKernel;
use crate::simulation::states::{NMat2, NVec2, SourceCollection};

/// Partial derivatives of (Ex, Ey) at a point
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldGradient {
    pub dex_dx: f64,
    pub dex_dy: f64,
    pub dey_dx: f64,
    pub dey_dy: f64,
}

impl FieldGradient {
    pub fn from_matrix(m: &NMat2) -> Self {
        Self {
            dex_dx: m[(0, 0)],
            dex_dy: m[(0, 1)],
            dey_dx: m[(1, 0)],
            dey_dy: m[(1, 1)],
        }
    }

    /// Row i holds dE_i/dx, dE_i/dy
    pub fn as_matrix(&self) -> NMat2 {
        NMat2::new(self.dex_dx, self.dex_dy, self.dey_dx, self.dey_dy)
    }

    /// (p . grad) E, the force on a dipole of moment `p`
    pub fn directional(&self, p: NVec2) -> NVec2 {
        self.as_matrix() * p
    }
}

/// Gradient of the field at `point`
///
/// [`GradientKernel::Exact`] is the true derivative of [`field_at`], so the
/// resulting dipole forces differ from numbers produced with the older
/// tabulated terms; select [`GradientKernel::Legacy`] to reproduce those.
///
/// [`field_at`]: crate::simulation::field::field_at
pub fn field_gradient(sources: &SourceCollection, point: NVec2, kernel: GradientKernel) -> FieldGradient {
    let total = sources
        .sources()
        .filter_map(|s| s.gradient(point - s.position(), kernel))
        .fold(NMat2::zeros(), |acc, g| acc + g);

    FieldGradient::from_matrix(&total)
}
