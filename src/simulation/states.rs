//! Core source types for the electrostatics engine.
//!
//! Defines the two kinds of field source and the collection holding them:
//! - `PointCharge` (monopole with signed charge `q`)
//! - `PointDipole` (ideal dipole with moment vector `p`)
//! - `SourceCollection` (ordered charges + ordered dipoles)
//!
//! The engine only ever borrows a `SourceCollection` immutably, so a snapshot
//! can be cloned and handed to any evaluation (or thread) freely.

use std::fmt;

use nalgebra::{Matrix2, Vector2};

use crate::simulation::sources::FieldSource;

pub type NVec2 = Vector2<f64>;
pub type NMat2 = Matrix2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct PointCharge {
    pub q: f64, // signed charge
    pub x: NVec2, // position
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointDipole {
    pub p: NVec2, // dipole moment (px, py)
    pub x: NVec2, // position
    pub angle_deg: f64, // direction of p, kept for display
}

impl PointDipole {
    /// Build a dipole from magnitude `p` and direction `angle_deg` (degrees,
    /// counter-clockwise from +x)
    pub fn from_polar(p: f64, x: NVec2, angle_deg: f64) -> Self {
        let theta = angle_deg.to_radians();
        Self {
            p: NVec2::new(p * theta.cos(), p * theta.sin()),
            x,
            angle_deg,
        }
    }

    /// Magnitude |p| of the moment
    pub fn magnitude(&self) -> f64 {
        self.p.norm()
    }
}

/// Identity of a dipole inside a [`SourceCollection`]: its insertion index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DipoleId(pub usize);

/// Ordered set of charges plus ordered set of dipoles
///
/// Order never changes a result (superposition is commutative) but it does
/// fix the `DipoleId` each dipole gets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceCollection {
    pub charges: Vec<PointCharge>,
    pub dipoles: Vec<PointDipole>,
}

impl SourceCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a point charge `q` at `(x, y)`
    pub fn add_charge(&mut self, q: f64, x: f64, y: f64) {
        self.charges.push(PointCharge {
            q,
            x: NVec2::new(x, y),
        });
    }

    /// Add a dipole of magnitude `p` at `(x, y)` pointing along `angle_deg`
    pub fn add_dipole(&mut self, p: f64, x: f64, y: f64, angle_deg: f64) -> DipoleId {
        self.dipoles.push(PointDipole::from_polar(p, NVec2::new(x, y), angle_deg));
        DipoleId(self.dipoles.len() - 1)
    }

    /// Builder-style variant of [`SourceCollection::add_charge`]
    pub fn with_charge(mut self, q: f64, x: f64, y: f64) -> Self {
        self.add_charge(q, x, y);
        self
    }

    /// Builder-style variant of [`SourceCollection::add_dipole`]
    pub fn with_dipole(mut self, p: f64, x: f64, y: f64, angle_deg: f64) -> Self {
        self.add_dipole(p, x, y, angle_deg);
        self
    }

    /// Remove every charge and dipole
    pub fn clear(&mut self) {
        self.charges.clear();
        self.dipoles.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.charges.is_empty() && self.dipoles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.charges.len() + self.dipoles.len()
    }

    pub fn dipole(&self, id: DipoleId) -> Option<&PointDipole> {
        self.dipoles.get(id.0)
    }

    /// Every source, charges first, through the shared evaluation contract
    pub fn sources(&self) -> impl Iterator<Item = &dyn FieldSource> + '_ {
        let charges = self.charges.iter().map(|c| c as &dyn FieldSource);
        let dipoles = self.dipoles.iter().map(|d| d as &dyn FieldSource);
        charges.chain(dipoles)
    }

    /// Union of two collections (charges of `self` then `other`, same for dipoles)
    pub fn merged(&self, other: &SourceCollection) -> SourceCollection {
        let mut out = self.clone();
        out.charges.extend(other.charges.iter().cloned());
        out.dipoles.extend(other.dipoles.iter().cloned());
        out
    }
}

impl fmt::Display for PointCharge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q={} @ ({}, {})", self.q, self.x.x, self.x.y)
    }
}
