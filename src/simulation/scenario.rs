//! Build fully-validated field scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - sampling grid (`Grid`)
//! - source snapshot (`SourceCollection`)
//!
//! `Evaluation::run` then performs one full pass over a scenario: potential
//! grid, field grid and per-dipole force/torque, always from scratch.

use log::{debug, warn};
use thiserror::Error;

use crate::configuration::config::{GridConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::field::field_grid;
use crate::simulation::grid::{Grid, ScalarGrid, VectorGrid};
use crate::simulation::interaction::{solve_dipole_interactions, DipoleInteraction, DipoleReport};
use crate::simulation::potential::potential_grid;
use crate::simulation::states::SourceCollection;

/// Rejected scenario configuration
#[derive(Debug, Error, PartialEq)]
pub enum ScenarioError {
    #[error("{what} #{index}: position needs 2 components, got {got}")]
    BadPosition { what: &'static str, index: usize, got: usize },

    #[error("grid: {0}")]
    BadGrid(String),

    #[error("{what} #{index}: non-finite value")]
    NonFinite { what: &'static str, index: usize },
}

/// Fully-initialized scenario: engine settings, grid and sources
#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub grid: Grid,
    pub sources: SourceCollection,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ScenarioError> {
        // Engine (runtime) from EngineConfig
        let engine = Engine {
            parallel: cfg.engine.parallel,
            gradient: cfg.engine.gradient,
        };

        let grid = match &cfg.grid {
            Some(g) => build_grid(g)?,
            None => Grid::default(),
        };

        // Sources: map configs -> runtime entries, in file order
        let mut sources = SourceCollection::new();
        for (i, c) in cfg.charges.iter().enumerate() {
            let [x, y] = position("charge", i, &c.x)?;
            finite("charge", i, &[c.q, x, y])?;
            sources.add_charge(c.q, x, y);
        }
        for (i, d) in cfg.dipoles.iter().enumerate() {
            let [x, y] = position("dipole", i, &d.x)?;
            finite("dipole", i, &[d.p, x, y, d.angle_deg])?;
            sources.add_dipole(d.p, x, y, d.angle_deg);
        }

        Ok(Self {
            engine,
            grid,
            sources,
        })
    }
}

fn position(what: &'static str, index: usize, x: &[f64]) -> Result<[f64; 2], ScenarioError> {
    match x {
        [x, y] => Ok([*x, *y]),
        _ => Err(ScenarioError::BadPosition { what, index, got: x.len() }),
    }
}

fn finite(what: &'static str, index: usize, values: &[f64]) -> Result<(), ScenarioError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ScenarioError::NonFinite { what, index })
    }
}

fn build_grid(g: &GridConfig) -> Result<Grid, ScenarioError> {
    let axis = |name: &str, v: &[f64]| match v {
        [lo, hi] if lo.is_finite() && hi.is_finite() => Ok((*lo, *hi)),
        _ => Err(ScenarioError::BadGrid(format!("{name} must be two finite bounds"))),
    };
    let x = axis("x", &g.x)?;
    let y = axis("y", &g.y)?;
    if g.nx == 0 || g.ny == 0 {
        return Err(ScenarioError::BadGrid("nx and ny must be at least 1".to_string()));
    }
    if g.nx.checked_mul(g.ny).is_none() {
        return Err(ScenarioError::BadGrid(format!("{} x {} nodes overflows", g.nx, g.ny)));
    }
    Ok(Grid::new(x, g.nx, y, g.ny))
}

/// Output of one full evaluation pass
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub potential: ScalarGrid,
    pub field: VectorGrid,
    pub interactions: Vec<DipoleInteraction>,
}

impl Evaluation {
    /// Recompute everything for `scenario`
    pub fn run(scenario: &Scenario) -> Self {
        let Scenario { engine, grid, sources } = scenario;
        if sources.is_empty() {
            warn!("no charges or dipoles, potential and field are zero everywhere");
        }

        let potential = potential_grid(sources, grid, engine.parallel);
        let field = field_grid(sources, grid, engine.parallel);
        let interactions = solve_dipole_interactions(sources, engine.gradient);
        debug!("evaluated {} nodes, {} dipoles", grid.len(), interactions.len());

        Self {
            potential,
            field,
            interactions,
        }
    }

    /// Display lines pairing each dipole with its interaction
    pub fn reports<'a>(&'a self, sources: &'a SourceCollection) -> impl Iterator<Item = DipoleReport<'a>> + 'a {
        sources
            .dipoles
            .iter()
            .zip(self.interactions.iter())
            .map(|(dipole, interaction)| DipoleReport { dipole, interaction })
    }
}
