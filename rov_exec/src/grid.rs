//! # Grid geometry
//!
//! The rover drives on a fixed size toroidal grid. Cell `(0, 0)` is the
//! origin, `x` increases to the east and `y` increases to the north. Moving off
//! any edge of the grid re-enters from the opposite edge.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::Serialize;
use util::maths::{wrap_dec, wrap_inc};

use crate::direction::Direction;

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Number of cells along the x axis.
pub const GRID_WIDTH: i64 = 100;

/// Number of cells along the y axis.
pub const GRID_HEIGHT: i64 = 100;

/// Number of cells moved by a single forward or backward command.
const STEP: i64 = 1;

const _: () = assert!(GRID_WIDTH > 0 && GRID_HEIGHT > 0);

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// A cell on the grid.
///
/// Coordinates can only be built through [`Coordinates::new`], so `x` is always in
/// `[0, GRID_WIDTH)` and `y` is always in `[0, GRID_HEIGHT)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Coordinates {
    x: i64,
    y: i64,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    #[error(
        "Coordinates ({0}, {1}) are outside of the grid's limits (0..{w}, 0..{h})",
        w = GRID_WIDTH,
        h = GRID_HEIGHT
    )]
    OutOfBounds(i64, i64),
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Coordinates {
    /// Create new coordinates, checking that they lie inside the grid.
    pub fn new(x: i64, y: i64) -> Result<Self, GridError> {
        if !(0..GRID_WIDTH).contains(&x) || !(0..GRID_HEIGHT).contains(&y) {
            return Err(GridError::OutOfBounds(x, y));
        }

        Ok(Self { x, y })
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    /// The cell reached by moving one step forward while facing `direction`.
    pub fn forward(&self, direction: Direction) -> Self {
        match direction {
            Direction::North => self.with_y(wrap_inc(self.y, STEP, GRID_HEIGHT)),
            Direction::East => self.with_x(wrap_inc(self.x, STEP, GRID_WIDTH)),
            Direction::South => self.with_y(wrap_dec(self.y, STEP, GRID_HEIGHT)),
            Direction::West => self.with_x(wrap_dec(self.x, STEP, GRID_WIDTH)),
        }
    }

    /// The cell reached by moving one step backward while facing `direction`.
    pub fn backward(&self, direction: Direction) -> Self {
        match direction {
            Direction::North => self.with_y(wrap_dec(self.y, STEP, GRID_HEIGHT)),
            Direction::East => self.with_x(wrap_dec(self.x, STEP, GRID_WIDTH)),
            Direction::South => self.with_y(wrap_inc(self.y, STEP, GRID_HEIGHT)),
            Direction::West => self.with_x(wrap_inc(self.x, STEP, GRID_WIDTH)),
        }
    }

    // Wrapping keeps the new value in range, so these skip the bounds check.
    fn with_x(&self, x: i64) -> Self {
        Self { x, y: self.y }
    }

    fn with_y(&self, y: i64) -> Self {
        Self { x: self.x, y }
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x: {} y: {}", self.x, self.y)
    }
}
