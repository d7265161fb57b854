use crate::core::command::{Command, CommandSequence};
use crate::core::direction::Direction;
use crate::core::field::{Field, Position};
use crate::error::{Error, Result};
use tracing::trace;

/// Lifecycle state of a vehicle during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Executes its commands and takes part in collision checks.
    Active,
    /// Terminal. Frozen at the cell where it collided at the given 1-indexed step.
    Collided { step: usize },
}

/// A named vehicle on the grid.
///
/// Fields:
/// - `name`: unique identifier within one simulation
/// - `position`: current cell, always inside the field once registered
/// - `direction`: current heading
/// - `commands`: per-step commands, consumed by step index
/// - `status`: `Active` until a collision freezes it
#[derive(Debug, Clone)]
pub struct Vehicle {
    name: String,
    position: Position,
    direction: Direction,
    commands: CommandSequence,
    status: Status,
}

impl Vehicle {
    /// Create an active vehicle after validating its name.
    ///
    /// Bounds are checked when the vehicle is registered with a simulation.
    ///
    /// Errors:
    /// - `Error::EmptyName` if `name` is empty or whitespace.
    pub fn new(
        name: impl Into<String>,
        position: Position,
        direction: Direction,
        commands: CommandSequence,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::EmptyName);
        }
        Ok(Self {
            name,
            position,
            direction,
            commands,
            status: Status::Active,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn commands(&self) -> &CommandSequence {
        &self.commands
    }

    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }

    /// Command this vehicle would execute at `step`, if it is still active.
    #[inline]
    pub fn command_at(&self, step: usize) -> Option<Command> {
        if self.is_active() {
            self.commands.get(step)
        } else {
            None
        }
    }

    #[inline]
    pub fn rotate_left(&mut self) {
        self.direction = self.direction.rotate_left();
    }

    #[inline]
    pub fn rotate_right(&mut self) {
        self.direction = self.direction.rotate_right();
    }

    /// Move one cell forward within `field`.
    ///
    /// A move past the edge leaves that axis unchanged; the other axis is never
    /// touched. Returns the resulting position.
    pub fn advance(&mut self, field: &Field) -> Position {
        let (dx, dy) = self.direction.delta();
        let candidate = self.position.offset(dx, dy);
        let next = field.constrain(self.position, candidate);
        if next != candidate {
            trace!(
                vehicle = %self.name,
                x = self.position.x,
                y = self.position.y,
                direction = %self.direction,
                "move absorbed at field boundary"
            );
        }
        self.position = next;
        next
    }

    /// Execute one command.
    pub fn apply(&mut self, command: Command, field: &Field) {
        match command {
            Command::Left => self.rotate_left(),
            Command::Right => self.rotate_right(),
            Command::Forward => {
                self.advance(field);
            }
        }
    }

    /// Freeze the vehicle. A vehicle that already collided keeps its first step.
    pub(crate) fn mark_collided(&mut self, step: usize) {
        if self.is_active() {
            self.status = Status::Collided { step };
        }
    }
}
