pub mod heat_transport;
pub mod movement;
pub mod sim_op;
pub mod simulation;

pub use simulation::{OpTiming, Simulation};
