//! Heatbugs: an agent-based swarm on a toroidal heat field.
//!
//! Bugs each prefer a temperature, warm the cell they sit on, and step
//! toward hotter or cooler neighbours while the field diffuses and
//! evaporates. The per-step output is the mean unhappiness of the swarm.

pub mod bug;
pub mod config;
pub mod constants;
pub mod error;
pub mod rng;
pub mod sim;
pub mod stats;
pub mod world;

pub use bug::{Bug, Population};
pub use config::SimConfig;
pub use error::{HeatbugsError, Result};
pub use rng::RandomSource;
pub use sim::Simulation;
pub use world::World;
