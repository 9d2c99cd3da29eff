//! Rover state machine module
//!
//! The rover holds a position and a heading on the grid and executes sequences of single
//! character commands against them, stopping at the first command it doesn't recognise or that
//! would drive it into an obstacle.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod cmd;
mod result;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use cmd::*;
pub use result::*;
pub use state::*;

use crate::grid::GridError;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors that can occur while creating a rover.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RoverError {
    #[error("The initial position is not valid: {0}")]
    OutOfBounds(GridError),

    #[error("\"{0}\" was not recognised as a valid direction, expected one of N, E, S or W")]
    InvalidDirection(String),

    #[error("The rover requires an obstacle detector")]
    MissingObstacleDetector,
}
