use gridsim::error::Result;
use gridsim::{CollisionRecord, Direction, Position, SimulationSetup, VehicleOutcome};
use std::collections::BTreeSet;

fn names(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Head-on meeting: both vehicles are frozen with the same step and cell.
#[test]
fn head_on_vehicles_collide_together() -> Result<()> {
    let report = SimulationSetup::new(10, 10)
        .with_vehicle("Car1", 5, 5, "N", "FF")
        .with_vehicle("Car2", 5, 9, "S", "FF")
        .build()?
        .run()?;
    assert_eq!(
        report.collisions,
        vec![CollisionRecord {
            names: names(&["Car1", "Car2"]),
            position: Position::new(5, 7),
            step: 2,
        }]
    );
    assert_eq!(
        report.outcome("Car1"),
        Some(&VehicleOutcome::Collided {
            name: "Car1".into(),
            with: vec!["Car2".into()],
            position: Position::new(5, 7),
            step: 2,
        })
    );
    assert_eq!(
        report.outcome("Car2"),
        Some(&VehicleOutcome::Collided {
            name: "Car2".into(),
            with: vec!["Car1".into()],
            position: Position::new(5, 7),
            step: 2,
        })
    );
    Ok(())
}

#[test]
fn crossing_paths_collide_at_shared_cell() -> Result<()> {
    let report = SimulationSetup::new(10, 10)
        .with_vehicle("A", 1, 2, "N", "FFRFFFFRRL")
        .with_vehicle("B", 7, 8, "W", "FFLFFFFFFF")
        .build()?
        .run()?;
    assert_eq!(report.collisions.len(), 1);
    assert_eq!(report.collisions[0].position, Position::new(5, 4));
    assert_eq!(report.collisions[0].step, 7);
    assert!(report.outcomes.iter().all(VehicleOutcome::is_collided));
    Ok(())
}

/// Movement is step-synchronous: a vehicle moving into a cell that another vehicle
/// leaves during the same step does not collide with it.
#[test]
fn following_vehicle_does_not_hit_previous_position() -> Result<()> {
    let report = SimulationSetup::new(10, 1)
        .with_vehicle("lead", 1, 0, "E", "FFF")
        .with_vehicle("tail", 0, 0, "E", "FFF")
        .build()?
        .run()?;
    assert!(report.collisions.is_empty());
    assert_eq!(report.outcome("lead").map(|o| o.position()), Some(Position::new(4, 0)));
    assert_eq!(report.outcome("tail").map(|o| o.position()), Some(Position::new(3, 0)));
    Ok(())
}

#[test]
fn swapping_cells_is_not_a_collision() -> Result<()> {
    let report = SimulationSetup::new(2, 1)
        .with_vehicle("A", 0, 0, "E", "F")
        .with_vehicle("B", 1, 0, "W", "F")
        .build()?
        .run()?;
    assert!(report.collisions.is_empty());
    Ok(())
}

/// A vehicle blocked by the boundary still occupies its cell.
#[test]
fn blocked_vehicle_is_hit_by_follower() -> Result<()> {
    let report = SimulationSetup::new(2, 1)
        .with_vehicle("A", 0, 0, "E", "F")
        .with_vehicle("B", 1, 0, "E", "F")
        .build()?
        .run()?;
    assert_eq!(
        report.collisions,
        vec![CollisionRecord {
            names: names(&["A", "B"]),
            position: Position::new(1, 0),
            step: 1,
        }]
    );
    Ok(())
}

/// Idle vehicles with exhausted commands remain in collision checks.
#[test]
fn idle_vehicle_can_be_hit() -> Result<()> {
    let report = SimulationSetup::new(10, 10)
        .with_vehicle("parked", 3, 3, "E", "")
        .with_vehicle("mover", 3, 0, "N", "FFFF")
        .build()?
        .run()?;
    assert_eq!(
        report.collisions,
        vec![CollisionRecord {
            names: names(&["mover", "parked"]),
            position: Position::new(3, 3),
            step: 3,
        }]
    );
    // The mover's fourth command is never executed.
    assert_eq!(report.steps, 3);
    Ok(())
}

#[test]
fn three_vehicles_in_one_cell_form_one_record() -> Result<()> {
    let report = SimulationSetup::new(3, 3)
        .with_vehicle("S", 1, 0, "N", "F")
        .with_vehicle("W", 0, 1, "E", "F")
        .with_vehicle("E", 2, 1, "W", "F")
        .build()?
        .run()?;
    assert_eq!(
        report.collisions,
        vec![CollisionRecord {
            names: names(&["E", "S", "W"]),
            position: Position::new(1, 1),
            step: 1,
        }]
    );
    match report.outcome("S") {
        Some(VehicleOutcome::Collided { with, .. }) => {
            assert_eq!(with, &vec!["E".to_string(), "W".to_string()]);
        }
        other => panic!("expected collided outcome, got {other:?}"),
    }
    Ok(())
}

#[test]
fn separate_collisions_in_one_step_are_ordered_by_position() -> Result<()> {
    let report = SimulationSetup::new(10, 10)
        .with_vehicle("C", 5, 4, "N", "F")
        .with_vehicle("D", 5, 6, "S", "F")
        .with_vehicle("A", 0, 1, "E", "F")
        .with_vehicle("B", 2, 1, "W", "F")
        .build()?
        .run()?;
    assert_eq!(
        report.collisions,
        vec![
            CollisionRecord {
                names: names(&["A", "B"]),
                position: Position::new(1, 1),
                step: 1,
            },
            CollisionRecord {
                names: names(&["C", "D"]),
                position: Position::new(5, 5),
                step: 1,
            },
        ]
    );
    Ok(())
}

/// Collided vehicles stop executing and never join a later collision; their cell is
/// not an obstacle for vehicles that are still active.
#[test]
fn frozen_vehicles_are_out_of_play() -> Result<()> {
    let report = SimulationSetup::new(10, 10)
        .with_vehicle("A", 0, 1, "E", "FFFF")
        .with_vehicle("B", 2, 1, "W", "FLFF")
        .with_vehicle("C", 1, 3, "S", "FFF")
        .build()?
        .run()?;
    assert_eq!(
        report.collisions,
        vec![CollisionRecord {
            names: names(&["A", "B"]),
            position: Position::new(1, 1),
            step: 1,
        }]
    );
    assert_eq!(
        report.outcome("A"),
        Some(&VehicleOutcome::Collided {
            name: "A".into(),
            with: vec!["B".into()],
            position: Position::new(1, 1),
            step: 1,
        })
    );
    // C drives through (1,1) at step 2 and ends at the bottom edge.
    assert_eq!(
        report.outcome("C"),
        Some(&VehicleOutcome::Finished {
            name: "C".into(),
            position: Position::new(1, 0),
            direction: Direction::South,
        })
    );
    assert_eq!(report.steps, 3);
    Ok(())
}

#[test]
fn later_collision_between_active_vehicles_is_still_recorded() -> Result<()> {
    let report = SimulationSetup::new(10, 10)
        .with_vehicle("A", 0, 0, "E", "F")
        .with_vehicle("B", 2, 0, "W", "F")
        .with_vehicle("C", 5, 0, "N", "FFF")
        .with_vehicle("D", 5, 4, "S", "FF")
        .build()?
        .run()?;
    let steps: Vec<usize> = report.collisions.iter().map(|c| c.step).collect();
    assert_eq!(steps, vec![1, 2]);
    assert_eq!(report.collisions[1].position, Position::new(5, 2));
    assert_eq!(report.collisions[1].names, names(&["C", "D"]));
    Ok(())
}
