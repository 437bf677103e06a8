//! Driver state that paces a simulation

pub mod simulation;

pub use simulation::Simulation;
