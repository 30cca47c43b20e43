pub mod states;
pub mod params;
pub mod engine;
pub mod sources;
pub mod grid;
pub mod potential;
pub mod field;
pub mod gradient;
pub mod interaction;
pub mod scenario;
