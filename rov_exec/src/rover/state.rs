//! Implementations for the rover state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use std::sync::Arc;
use log::{debug, trace, warn};
use serde::Serialize;

// Internal
use super::{Command, ExecResult, ResultCode, RoverError};
use crate::{
    direction::Direction,
    grid::Coordinates,
    obstacle::ObstacleRegistry};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The rover.
///
/// The registry is shared, not owned, so many rovers can drive on the same map.
#[derive(Clone, Debug)]
pub struct Rover {
    position: Coordinates,
    direction: Direction,
    obstacles: Arc<ObstacleRegistry>,
}

/// Snapshot of the rover's position and heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Pose {
    pub position: Coordinates,
    pub direction: Direction,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Rover {
    /// Land a new rover at `(x, y)` facing the heading with code `direction`.
    ///
    /// The obstacle detector is mandatory. Every input is validated before the rover is built,
    /// so either a fully valid rover is returned or nothing is.
    pub fn new(
        x: i64,
        y: i64,
        direction: &str,
        obstacles: Option<Arc<ObstacleRegistry>>
    ) -> Result<Self, RoverError> {
        let obstacles = obstacles.ok_or(RoverError::MissingObstacleDetector)?;

        let position = Coordinates::new(x, y)
            .map_err(RoverError::OutOfBounds)?;

        let direction = Direction::from_code(direction)
            .ok_or_else(|| RoverError::InvalidDirection(direction.to_string()))?;

        Ok(Self::from_pose(position, direction, obstacles))
    }

    /// Land a new rover from already validated parts.
    pub fn from_pose(
        position: Coordinates,
        direction: Direction,
        obstacles: Arc<ObstacleRegistry>
    ) -> Self {
        debug!(
            "Rover landed at {} facing {} ({} known obstacles)",
            position, direction, obstacles.len()
        );

        Self {
            position,
            direction,
            obstacles
        }
    }

    pub fn position(&self) -> Coordinates {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pose(&self) -> Pose {
        Pose {
            position: self.position,
            direction: self.direction
        }
    }

    /// The obstacle registry this rover checks moves against.
    pub fn obstacles(&self) -> &Arc<ObstacleRegistry> {
        &self.obstacles
    }

    /// Execute a sequence of commands in order.
    ///
    /// Execution stops at the first command that is not recognised or that is blocked by an
    /// obstacle. Every command before that one has been fully applied and nothing after it is.
    /// An empty sequence is valid and does nothing.
    pub fn execute_sequence<I>(&mut self, commands: I) -> ExecResult
    where
        I: IntoIterator<Item = char>
    {
        for (index, code) in commands.into_iter().enumerate() {
            match self.apply_command(code) {
                ResultCode::CommandExecuted => (),
                result => {
                    let output = ExecResult::stopped(result, index, code);
                    warn!(
                        "Rover stopped at {} facing {}: {:?} on '{}' at position {}",
                        self.position, self.direction, result, code, index
                    );
                    return output;
                }
            }
        }

        ExecResult::executed()
    }

    /// Execute a single command.
    ///
    /// The state is only changed when `CommandExecuted` is returned. Moves check the
    /// destination cell against the obstacle registry, turns happen in place and so are never
    /// blocked.
    pub fn apply_command(&mut self, code: char) -> ResultCode {
        let cmd = match Command::from_code(code) {
            Some(c) => c,
            None => return ResultCode::CommandNotRecognized
        };

        match cmd {
            Command::MoveForward | Command::MoveBackward => {
                let target = match cmd {
                    Command::MoveForward => self.position.forward(self.direction),
                    _ => self.position.backward(self.direction)
                };

                if self.obstacles.contains(&target) {
                    trace!("{:?} blocked by obstacle at {}", cmd, target);
                    return ResultCode::ObstacleFound;
                }

                self.position = target;
            },
            Command::TurnLeft => self.direction = self.direction.turn_left(),
            Command::TurnRight => self.direction = self.direction.turn_right(),
        }

        trace!("{:?} -> {} facing {}", cmd, self.position, self.direction);

        ResultCode::CommandExecuted
    }
}
