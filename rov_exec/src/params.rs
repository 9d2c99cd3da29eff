//! # Rover Executable Parameters
//!
//! This module provides the landing site parameters for the rover: where it starts, which way
//! it faces and the map of known obstacles.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use std::sync::Arc;

use serde::{Serialize, Deserialize};

use crate::{
    grid::{Coordinates, GridError},
    obstacle::ObstacleRegistry,
    rover::{Rover, RoverError},
};

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Path of the parameter file relative to the params directory.
pub const PARAMS_FILE: &str = "rov_exec.toml";

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Params {

    /// Landing cell of the rover, as `[x, y]`
    pub initial_position: [i64; 2],

    /// Landing heading of the rover, one of `N`, `E`, `S` or `W`
    pub initial_direction: String,

    /// Cells containing known obstacles, as `[x, y]` pairs
    #[serde(default)]
    pub obstacles: Vec<[i64; 2]>,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Params {
    /// Build the obstacle registry from the obstacle list.
    ///
    /// Fails if any obstacle lies outside the grid.
    pub fn build_registry(&self) -> Result<ObstacleRegistry, GridError> {
        let map = self.obstacles
            .iter()
            .map(|&[x, y]| Coordinates::new(x, y))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ObstacleRegistry::from_map(map))
    }

    /// Land a rover at the initial position and heading.
    pub fn build_rover(&self, obstacles: Arc<ObstacleRegistry>) -> Result<Rover, RoverError> {
        Rover::new(
            self.initial_position[0],
            self.initial_position[1],
            &self.initial_direction,
            Some(obstacles)
        )
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            initial_position: [1, 1],
            initial_direction: String::from("N"),
            obstacles: vec![[3, 5], [6, 4]],
        }
    }
}
