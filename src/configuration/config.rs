//! Configuration types for loading field scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]  – engine options (parallel grids, gradient kernel)
//! - [`GridConfig`]    – optional sampling grid for potential and field
//! - [`ChargeConfig`]  – one entry per point charge
//! - [`DipoleConfig`]  – one entry per point dipole
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   parallel: true          # spread grid nodes over the rayon pool
//!   gradient: "exact"       # or "legacy"
//!
//! grid:                     # optional, defaults to [-20, 20]^2 at 500x500
//!   x: [ -20.0, 20.0 ]
//!   y: [ -20.0, 20.0 ]
//!   nx: 500
//!   ny: 500
//!
//! charges:
//!   - q: 1.0
//!     x: [ -5.0, 0.0 ]
//!
//! dipoles:
//!   - p: 2.0                # magnitude
//!     x: [ 5.0, 0.0 ]
//!     angle_deg: 90.0       # direction, counter-clockwise from +x
//! ```
//!
//! [`Scenario::build_scenario`](crate::Scenario::build_scenario) validates
//! this and maps it onto the runtime types.

use serde::Deserialize;

/// Which closed-form field derivatives the gradient tensor uses
/// `gradient: "exact"` or `gradient: "legacy"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientKernel {
    #[serde(rename = "exact")] // True derivatives of the field, symmetric (curl-free)
    #[default]
    Exact,

    #[serde(rename = "legacy")] // Earlier tabulated terms, kept to reproduce old force numbers
    Legacy,
}

/// Engine-level configuration
#[derive(Deserialize, Debug, Clone, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub parallel: bool, // evaluate grid nodes on the rayon thread pool
    #[serde(default)]
    pub gradient: GradientKernel, // derivative terms used for dipole forces
}

/// Rectangular sampling grid
#[derive(Deserialize, Debug, Clone)]
pub struct GridConfig {
    pub x: Vec<f64>, // [x_min, x_max]
    pub y: Vec<f64>, // [y_min, y_max]
    pub nx: usize,   // samples along x
    pub ny: usize,   // samples along y
}

/// A single point charge
#[derive(Deserialize, Debug, Clone)]
pub struct ChargeConfig {
    pub q: f64,      // signed charge
    pub x: Vec<f64>, // position [x, y]
}

/// A single point dipole, given in polar form
#[derive(Deserialize, Debug, Clone)]
pub struct DipoleConfig {
    pub p: f64,         // moment magnitude
    pub x: Vec<f64>,    // position [x, y]
    pub angle_deg: f64, // moment direction in degrees
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub grid: Option<GridConfig>,
    #[serde(default)]
    pub charges: Vec<ChargeConfig>,
    #[serde(default)]
    pub dipoles: Vec<DipoleConfig>,
}
