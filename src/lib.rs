pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{PointCharge, PointDipole, DipoleId, SourceCollection, NVec2, NMat2};
pub use simulation::sources::FieldSource;
pub use simulation::engine::Engine;
pub use simulation::grid::{Grid, ScalarGrid, VectorGrid};
pub use simulation::potential::{potential_at, potential_grid};
pub use simulation::field::{field_at, field_at_floored, field_grid};
pub use simulation::gradient::{field_gradient, FieldGradient};
pub use simulation::interaction::{solve_dipole_interactions, DipoleInteraction, DipoleReport};
pub use simulation::scenario::{Scenario, ScenarioError, Evaluation};

pub use configuration::config::{GradientKernel, EngineConfig, GridConfig, ChargeConfig, DipoleConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_potential_grid, bench_field_grid};
