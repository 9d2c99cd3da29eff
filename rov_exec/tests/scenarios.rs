//! End to end rover scenarios on the default 100x100 grid.

use std::sync::Arc;

use rov_lib::{
    direction::Direction,
    grid::{Coordinates, GRID_HEIGHT, GRID_WIDTH},
    obstacle::{ObstacleError, ObstacleRegistry},
    rover::{ExecResult, ResultCode, Rover, StopPoint},
};

fn coords(x: i64, y: i64) -> Coordinates {
    Coordinates::new(x, y).unwrap()
}

fn land(x: i64, y: i64, dir: &str, obstacles: &[(i64, i64)]) -> Rover {
    let map = obstacles.iter().map(|&(x, y)| coords(x, y)).collect();
    let reg = ObstacleRegistry::new(Some(map)).unwrap();
    Rover::new(x, y, dir, Some(Arc::new(reg))).unwrap()
}

#[test]
fn test_knight_move() {
    let mut rover = land(1, 1, "N", &[]);

    let result = rover.execute_sequence(vec!['f', 'f', 'r', 'f']);

    assert_eq!(result, ExecResult::executed());
    assert_eq!(rover.position(), coords(2, 3));
    assert_eq!(rover.direction(), Direction::East);
}

#[test]
fn test_stops_on_unrecognised_command() {
    let mut rover = land(1, 1, "N", &[]);

    let result = rover.execute_sequence("ffZf".chars());

    assert_eq!(result.result, ResultCode::CommandNotRecognized);
    assert_eq!(result.stopped_at, Some(StopPoint { index: 2, command: 'Z' }));
    assert_eq!(
        result.message.as_deref(),
        Some(
            "Command 'Z' at position 2 was not recognized as valid, \
             the rover stopped processing other commands"
        )
    );
    assert_eq!(rover.position(), coords(1, 3));
    assert_eq!(rover.direction(), Direction::North);
}

#[test]
fn test_stops_on_obstacle_across_the_edge() {
    let mut rover = land(1, 1, "N", &[(99, 3)]);

    let result = rover.execute_sequence("ffrbb".chars());

    assert_eq!(result.result, ResultCode::ObstacleFound);
    assert_eq!(result.stopped_at, Some(StopPoint { index: 4, command: 'b' }));
    assert_eq!(
        result.message.as_deref(),
        Some(
            "An obstacle was detected trying to execute command 'b' at position 4, \
             the rover stopped processing other commands"
        )
    );
    assert_eq!(rover.position(), coords(0, 3));
    assert_eq!(rover.direction(), Direction::East);
}

#[test]
fn test_obstacle_takes_precedence_over_later_commands() {
    let mut rover = land(1, 1, "N", &[(1, 2)]);

    let result = rover.execute_sequence("fZrf".chars());

    assert_eq!(result.result, ResultCode::ObstacleFound);
    assert_eq!(result.stopped_at.map(|s| s.index), Some(0));
    assert_eq!(rover.position(), coords(1, 1));
    assert_eq!(rover.direction(), Direction::North);
}

#[test]
fn test_rover_can_resume_after_stopping() {
    let mut rover = land(1, 1, "N", &[(1, 3)]);

    assert_eq!(rover.execute_sequence("fff".chars()).result, ResultCode::ObstacleFound);
    assert_eq!(rover.position(), coords(1, 2));

    assert!(rover.execute_sequence("rflff".chars()).is_complete());
    assert_eq!(rover.position(), coords(2, 4));
    assert_eq!(rover.direction(), Direction::North);
}

#[test]
fn test_wrap_around_full_lap() {
    for dir in Direction::ALL.iter() {
        let mut rover = land(50, 50, dir.code(), &[]);
        let lap = match dir {
            Direction::North | Direction::South => GRID_HEIGHT,
            Direction::East | Direction::West => GRID_WIDTH,
        };

        let fwd: String = std::iter::repeat('f').take(lap as usize).collect();
        assert!(rover.execute_sequence(fwd.chars()).is_complete());
        assert_eq!(rover.position(), coords(50, 50));

        let bwd: String = std::iter::repeat('b').take(lap as usize + 1).collect();
        assert!(rover.execute_sequence(bwd.chars()).is_complete());
        assert_eq!(rover.position(), coords(50, 50).backward(*dir));
    }
}

#[test]
fn test_edges_wrap_north() {
    let mut rover = land(7, 99, "N", &[]);
    assert!(rover.execute_sequence("f".chars()).is_complete());
    assert_eq!(rover.position(), coords(7, 0));

    assert!(rover.execute_sequence("bb".chars()).is_complete());
    assert_eq!(rover.position(), coords(7, 98));
}

#[test]
fn test_registry_construction() {
    assert_eq!(ObstacleRegistry::new(None).unwrap_err(), ObstacleError::MissingMap);

    let reg = ObstacleRegistry::new(Some(vec![])).unwrap();
    assert!(!reg.contains(&coords(0, 0)));
    assert!(!reg.contains(&coords(99, 99)));
}
