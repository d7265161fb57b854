//! Lockstep simulation of command-driven vehicles on a bounded grid.
//!
//! Vehicles carry a sequence of `L`/`R`/`F` commands. At each step every active vehicle
//! executes at most one command, moves are clamped to the field, and vehicles that end
//! a step on the same cell are flagged as collided and frozen.
//!
//! ```
//! use gridsim::SimulationSetup;
//!
//! let report = SimulationSetup::new(10, 10)
//!     .with_vehicle("A", 1, 2, "N", "FFRFFFFRRL")
//!     .with_vehicle("B", 7, 8, "W", "FFLFFFFFFF")
//!     .build()?
//!     .run()?;
//! assert_eq!(report.collisions.len(), 1);
//! assert_eq!(report.collisions[0].step, 7);
//! # Ok::<(), gridsim::error::Error>(())
//! ```

pub mod core;
pub mod error;
pub mod setup;

pub use crate::core::{
    CollisionRecord, Command, CommandSequence, Direction, Field, Position, Simulation,
    SimulationReport, Status, Vehicle, VehicleOutcome,
};
pub use crate::error::{Error, Result};
pub use crate::setup::{SimulationSetup, VehicleSetup};
