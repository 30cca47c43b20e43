//! Numerical constants for field evaluation
//!
//! `R_FLOOR` is the singularity guard shared by the floored evaluation paths:
//! a distance below it (potential) or a zero denominator (grid field) is
//! replaced by this value so nothing divides by zero.

pub const R_FLOOR: f64 = 1e-9;

/// Axis bounds used when a scenario does not give a grid
pub const DEFAULT_BOUNDS: (f64, f64) = (-20.0, 20.0);

/// Samples per axis used when a scenario does not give a grid
pub const DEFAULT_SAMPLES: usize = 500;
