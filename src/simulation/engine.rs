//! High-level runtime engine settings
//!
//! Selects the field gradient kernel and whether grid evaluation is spread
//! over the rayon thread pool

use crate::configuration::config::GradientKernel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Engine {
    pub parallel: bool, // false = serial grid loop, true = rayon per node
    pub gradient: GradientKernel, // exact or legacy derivative terms
}
