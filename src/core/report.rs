use crate::core::direction::Direction;
use crate::core::field::Position;
use serde::Serialize;
use std::collections::BTreeSet;

/// Two or more vehicles found in the same cell after a step.
///
/// `names` is ordered, so a record does not depend on registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollisionRecord {
    pub names: BTreeSet<String>,
    pub position: Position,
    /// 1-indexed step at which the collision happened.
    pub step: usize,
}

impl CollisionRecord {
    pub fn involves(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

/// Final state of one vehicle after a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum VehicleOutcome {
    /// Never collided; reports where it ended up.
    Finished {
        name: String,
        position: Position,
        direction: Direction,
    },
    /// Frozen by a collision with the vehicles in `with`.
    Collided {
        name: String,
        with: Vec<String>,
        position: Position,
        step: usize,
    },
}

impl VehicleOutcome {
    pub fn name(&self) -> &str {
        match self {
            VehicleOutcome::Finished { name, .. } | VehicleOutcome::Collided { name, .. } => name,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            VehicleOutcome::Finished { position, .. }
            | VehicleOutcome::Collided { position, .. } => *position,
        }
    }

    pub fn is_collided(&self) -> bool {
        matches!(self, VehicleOutcome::Collided { .. })
    }
}

/// Structured result of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    /// One entry per vehicle, in registration order.
    pub outcomes: Vec<VehicleOutcome>,
    /// Collisions ordered by step, then by position.
    pub collisions: Vec<CollisionRecord>,
    /// Number of steps executed.
    pub steps: usize,
}

impl SimulationReport {
    pub fn outcome(&self, name: &str) -> Option<&VehicleOutcome> {
        self.outcomes.iter().find(|o| o.name() == name)
    }

    /// The collision a vehicle took part in, if any.
    pub fn collision_for(&self, name: &str) -> Option<&CollisionRecord> {
        self.collisions.iter().find(|c| c.involves(name))
    }
}
