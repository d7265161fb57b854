use crate::core::field::{Field, Position};
use crate::core::report::{CollisionRecord, SimulationReport, VehicleOutcome};
use crate::core::vehicle::{Status, Vehicle};
use crate::error::{Error, Result};
use crate::setup::SimulationSetup;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

/// Lockstep simulation of vehicles on a bounded grid.
///
/// Vehicles are kept in registration order. Each step applies at most one command per
/// active vehicle, then groups active vehicles by cell; every cell holding two or more
/// of them becomes a collision and freezes its occupants.
///
/// Collided vehicles are out of the game: their cell is not an obstacle for later
/// steps, so an active vehicle may pass through it.
#[derive(Debug, Clone)]
pub struct Simulation {
    field: Field,
    vehicles: Vec<Vehicle>,
}

impl Simulation {
    /// Create an empty simulation on `field`.
    pub fn new(field: Field) -> Self {
        Self {
            field,
            vehicles: Vec::new(),
        }
    }

    /// Validate a setup record and build the simulation it describes.
    ///
    /// Fails on the first invalid entry; no partially built simulation is returned.
    pub fn from_setup(setup: &SimulationSetup) -> Result<Self> {
        let mut sim = Self::new(Field::new(setup.width, setup.height)?);
        for entry in &setup.vehicles {
            sim.add_vehicle(entry.build()?)?;
        }
        Ok(sim)
    }

    /// Register a vehicle. Registration order is the update order within a step.
    ///
    /// Errors:
    /// - `Error::DuplicateName` if a vehicle with the same name exists.
    /// - `Error::OutOfBounds` if the vehicle starts outside the field.
    ///
    /// Vehicles may share a starting cell; the first step's scan reports them.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Result<()> {
        if self.vehicle(vehicle.name()).is_some() {
            return Err(Error::DuplicateName(vehicle.name().to_string()));
        }
        let p = vehicle.position();
        if !self.field.contains(p) {
            return Err(Error::OutOfBounds {
                name: vehicle.name().to_string(),
                x: p.x,
                y: p.y,
                width: self.field.width(),
                height: self.field.height(),
            });
        }
        self.vehicles.push(vehicle);
        Ok(())
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Registered vehicles in registration order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn vehicle(&self, name: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.name() == name)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Run until no active vehicle has a command left, and report the final state.
    ///
    /// Errors:
    /// - `Error::NoVehicles` if nothing was registered.
    pub fn run(mut self) -> Result<SimulationReport> {
        if self.vehicles.is_empty() {
            return Err(Error::NoVehicles);
        }
        let horizon = self
            .vehicles
            .iter()
            .map(|v| v.commands().len())
            .max()
            .unwrap_or(0);
        debug!(
            vehicles = self.vehicles.len(),
            width = self.field.width(),
            height = self.field.height(),
            horizon,
            "simulation started"
        );

        let mut collisions = Vec::new();
        let mut step = 0usize;
        while self.has_pending(step) {
            self.execute_step(step);
            // Reported steps are 1-indexed.
            collisions.extend(self.detect_collisions(step + 1));
            step += 1;
        }

        debug!(steps = step, collisions = collisions.len(), "simulation finished");
        Ok(self.into_report(collisions, step))
    }

    // ============ Internal helpers ============

    fn has_pending(&self, step: usize) -> bool {
        self.vehicles.iter().any(|v| v.command_at(step).is_some())
    }

    /// Apply the command scheduled at `step` to every active vehicle, in registration order.
    fn execute_step(&mut self, step: usize) {
        let Self { field, vehicles } = self;
        for v in vehicles.iter_mut() {
            if let Some(command) = v.command_at(step) {
                v.apply(command, field);
            }
        }
    }

    /// Group active vehicles by cell and freeze every group of two or more.
    ///
    /// Groups are visited in position order, so the result does not depend on
    /// registration order.
    fn detect_collisions(&mut self, step: usize) -> Vec<CollisionRecord> {
        let mut cells: BTreeMap<Position, Vec<usize>> = BTreeMap::new();
        for (i, v) in self.vehicles.iter().enumerate() {
            if v.is_active() {
                cells.entry(v.position()).or_default().push(i);
            }
        }

        let mut records = Vec::new();
        for (position, members) in cells {
            if members.len() < 2 {
                continue;
            }
            let names: BTreeSet<String> = members
                .iter()
                .map(|&i| self.vehicles[i].name().to_string())
                .collect();
            for &i in &members {
                self.vehicles[i].mark_collided(step);
            }
            info!(
                step,
                x = position.x,
                y = position.y,
                vehicles = ?names,
                "vehicles collided"
            );
            records.push(CollisionRecord {
                names,
                position,
                step,
            });
        }
        records
    }

    fn into_report(self, collisions: Vec<CollisionRecord>, steps: usize) -> SimulationReport {
        let outcomes = self
            .vehicles
            .into_iter()
            .map(|v| match v.status() {
                Status::Active => VehicleOutcome::Finished {
                    position: v.position(),
                    direction: v.direction(),
                    name: v.name().to_string(),
                },
                Status::Collided { step } => {
                    let with: Vec<String> = collisions
                        .iter()
                        .find(|c| c.step == step && c.involves(v.name()))
                        .map(|c| {
                            c.names
                                .iter()
                                .filter(|n| n.as_str() != v.name())
                                .cloned()
                                .collect()
                        })
                        .unwrap_or_default();
                    VehicleOutcome::Collided {
                        name: v.name().to_string(),
                        with,
                        position: v.position(),
                        step,
                    }
                }
            })
            .collect();

        SimulationReport {
            outcomes,
            collisions,
            steps,
        }
    }
}
