//! Simulation core: grid geometry, vehicles and the lockstep engine.

pub mod command;
pub mod direction;
pub mod field;
pub mod report;
pub mod sim;
pub mod vehicle;

pub use command::{Command, CommandSequence};
pub use direction::Direction;
pub use field::{Field, Position};
pub use report::{CollisionRecord, SimulationReport, VehicleOutcome};
pub use sim::Simulation;
pub use vehicle::{Status, Vehicle};
