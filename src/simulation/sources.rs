//! Per-source contributions to potential, field and field gradient
//!
//! Every quantity is expressed in terms of the displacement `d = point - source`.
//! Two singularity policies live here side by side:
//! - floored (`potential`, `field_floored`): near-zero denominators are
//!   replaced by [`R_FLOOR`], used for grids
//! - exact (`field_exact`, `gradient`): a source sitting exactly on the query
//!   point contributes nothing, used for single-point evaluation so that a
//!   dipole never feels its own field
//!
//! Kernels scale the numerator before dividing by the (possibly subnormal)
//! denominator, so a point very close to a source stays finite.

use crate::configuration::config::GradientKernel;
use crate::simulation::params::R_FLOOR;
use crate::simulation::states::{NMat2, NVec2, PointCharge, PointDipole};

/// Shared evaluation contract for anything that sources an electrostatic field
/// Units are normalized (vacuum permittivity = 1, no 4*pi)
pub trait FieldSource {
    /// Position of the source
    fn position(&self) -> NVec2;

    /// Scalar potential at displacement `d`, with `r` floored at [`R_FLOOR`]
    fn potential(&self, d: NVec2) -> f64;

    /// Field at displacement `d`, with a zero denominator replaced by [`R_FLOOR`]
    fn field_floored(&self, d: NVec2) -> NVec2;

    /// Field at displacement `d`, `None` when the denominator vanishes
    fn field_exact(&self, d: NVec2) -> Option<NVec2>;

    /// Field gradient `G[(i, j)] = dE_i/dx_j` at displacement `d`,
    /// `None` when `r^5` vanishes
    fn gradient(&self, d: NVec2, kernel: GradientKernel) -> Option<NMat2>;
}

/// Substitute the floor for a denominator that is exactly zero
#[inline]
fn floor_zero(den: f64) -> f64 {
    if den == 0.0 { R_FLOOR } else { den }
}

/// r^2, r^3, r^5 of a displacement
#[inline]
fn powers(d: NVec2) -> (f64, f64, f64) {
    let r2 = d.dot(&d);
    let r = r2.sqrt();
    (r2, r2 * r, r2 * r2 * r)
}

impl FieldSource for PointCharge {
    fn position(&self) -> NVec2 {
        self.x
    }

    fn potential(&self, d: NVec2) -> f64 {
        let r = d.norm().max(R_FLOOR);
        self.q / r
    }

    fn field_floored(&self, d: NVec2) -> NVec2 {
        let (_, r3, _) = powers(d);
        d * self.q / floor_zero(r3)
    }

    fn field_exact(&self, d: NVec2) -> Option<NVec2> {
        let (_, r3, _) = powers(d);
        if r3 == 0.0 {
            return None;
        }
        Some(d * self.q / r3)
    }

    fn gradient(&self, d: NVec2, kernel: GradientKernel) -> Option<NMat2> {
        let (r2, _, r5) = powers(d);
        if r5 == 0.0 {
            return None;
        }
        let q = self.q;
        let dd = d * d.transpose(); // outer product d_i d_j

        let g = match kernel {
            // dE_i/dx_j = q (delta_ij r^2 - 3 d_i d_j) / r^5
            GradientKernel::Exact => (NMat2::identity() * r2 - dd * 3.0) * q / r5,
            // q * 3 d_i d_j / r^5
            GradientKernel::Legacy => dd * (3.0 * q) / r5,
        };
        Some(g)
    }
}

impl FieldSource for PointDipole {
    fn position(&self) -> NVec2 {
        self.x
    }

    fn potential(&self, d: NVec2) -> f64 {
        let r = d.norm().max(R_FLOOR);
        self.p.dot(&d) / (r * r * r)
    }

    fn field_floored(&self, d: NVec2) -> NVec2 {
        let (r2, _, r5) = powers(d);
        dipole_field(self.p, d, r2, floor_zero(r5))
    }

    fn field_exact(&self, d: NVec2) -> Option<NVec2> {
        let (r2, _, r5) = powers(d);
        if r5 == 0.0 {
            return None;
        }
        Some(dipole_field(self.p, d, r2, r5))
    }

    fn gradient(&self, d: NVec2, kernel: GradientKernel) -> Option<NMat2> {
        let (r2, _, r5) = powers(d);
        if r5 == 0.0 {
            return None;
        }
        let p = self.p;

        let g = match kernel {
            // dE_i/dx_j = 3 [ s delta_ij + p_i d_j + p_j d_i - 5 s d_i d_j / r^2 ] / r^5,  s = p.d
            GradientKernel::Exact => {
                let s = p.dot(&d);
                let sym = p * d.transpose() + d * p.transpose();
                let dd = d * d.transpose();
                (NMat2::identity() * s + sym - dd * (5.0 * s / r2)) * 3.0 / r5
            }
            GradientKernel::Legacy => {
                let (px, py) = (p.x, p.y);
                let (dx, dy) = (d.x, d.y);
                NMat2::new(
                    3.0 * px * dx * dx - px * r2, 3.0 * px * dx * dy,
                    3.0 * py * dx * dy,           3.0 * py * dy * dy - py * r2,
                ) / r5
            }
        };
        Some(g)
    }
}

/// E = [3 (p.d) d - p r^2] / r^5
#[inline]
fn dipole_field(p: NVec2, d: NVec2, r2: f64, r5: f64) -> NVec2 {
    (d * (3.0 * p.dot(&d)) - p * r2) / r5
}
