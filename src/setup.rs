//! Structured setup records handed over by an input front-end.
//!
//! A `SimulationSetup` carries raw tokens; nothing is trusted until
//! [`SimulationSetup::build`] validates it into a [`Simulation`].

use crate::core::{CommandSequence, Direction, Position, Simulation, Vehicle};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// One vehicle as described by the front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleSetup {
    pub name: String,
    pub x: i64,
    pub y: i64,
    /// Heading token: `N`, `E`, `S` or `W`.
    pub direction: String,
    /// Command tokens, e.g. `"FFRFFL"`. Missing means no commands.
    #[serde(default)]
    pub commands: String,
}

impl VehicleSetup {
    /// Parse the tokens into a vehicle. Bounds are checked on registration.
    pub fn build(&self) -> Result<Vehicle> {
        let direction: Direction = self.direction.parse()?;
        let commands = CommandSequence::parse(&self.commands)?;
        Vehicle::new(
            self.name.clone(),
            Position::new(self.x, self.y),
            direction,
            commands,
        )
    }
}

/// Field dimensions plus vehicles in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationSetup {
    pub width: i64,
    pub height: i64,
    #[serde(default)]
    pub vehicles: Vec<VehicleSetup>,
}

impl SimulationSetup {
    pub fn new(width: i64, height: i64) -> Self {
        Self {
            width,
            height,
            vehicles: Vec::new(),
        }
    }

    /// Append a vehicle entry.
    pub fn with_vehicle(
        mut self,
        name: impl Into<String>,
        x: i64,
        y: i64,
        direction: &str,
        commands: &str,
    ) -> Self {
        self.vehicles.push(VehicleSetup {
            name: name.into(),
            x,
            y,
            direction: direction.to_string(),
            commands: commands.to_string(),
        });
        self
    }

    /// Validate everything and build the simulation.
    pub fn build(&self) -> Result<Simulation> {
        Simulation::from_setup(self)
    }
}
