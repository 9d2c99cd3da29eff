//! # Obstacle registry
//!
//! The registry is the rover's map of known obstacles. It is built once and then only ever
//! queried, so a single registry can be shared between rovers behind an `Arc`.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use std::collections::HashSet;

use log::debug;

use crate::grid::Coordinates;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// A fixed set of blocked cells.
#[derive(Clone, Debug, Default)]
pub struct ObstacleRegistry {
    obstacles: HashSet<Coordinates>,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ObstacleError {
    #[error("An obstacle map is required to build the registry, an empty map means no obstacles")]
    MissingMap,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl ObstacleRegistry {
    /// Build the registry from the map of known obstacles.
    ///
    /// The map itself is mandatory, pass an empty `Vec` for a clear grid.
    pub fn new(obstacle_map: Option<Vec<Coordinates>>) -> Result<Self, ObstacleError> {
        obstacle_map
            .map(Self::from_map)
            .ok_or(ObstacleError::MissingMap)
    }

    /// Build the registry from a map which is known to be present.
    pub fn from_map(obstacle_map: Vec<Coordinates>) -> Self {
        let obstacles: HashSet<Coordinates> = obstacle_map.into_iter().collect();

        debug!("Obstacle registry built with {} obstacles", obstacles.len());

        Self { obstacles }
    }

    /// Returns `true` if there is an obstacle at exactly `coordinates`.
    pub fn contains(&self, coordinates: &Coordinates) -> bool {
        self.obstacles.contains(coordinates)
    }

    /// Number of distinct obstacles in the registry.
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Iterate over the obstacles in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Coordinates> {
        self.obstacles.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::grid::{GRID_HEIGHT, GRID_WIDTH};

    fn coords(x: i64, y: i64) -> Coordinates {
        Coordinates::new(x, y).unwrap()
    }

    #[test]
    fn test_missing_map() {
        assert_eq!(ObstacleRegistry::new(None).unwrap_err(), ObstacleError::MissingMap);
    }

    #[test]
    fn test_empty_map_has_no_obstacles() {
        let reg = ObstacleRegistry::new(Some(vec![])).unwrap();
        assert!(reg.is_empty());

        for x in 0..GRID_WIDTH {
            for y in 0..GRID_HEIGHT {
                assert!(!reg.contains(&coords(x, y)));
            }
        }
    }

    #[test]
    fn test_contains_exact_match() {
        let reg = ObstacleRegistry::new(Some(vec![coords(3, 5), coords(6, 4), coords(3, 5)])).unwrap();

        assert_eq!(reg.len(), 2);
        assert!(reg.contains(&coords(3, 5)));
        assert!(reg.contains(&coords(6, 4)));
        assert!(!reg.contains(&coords(5, 3)));
        assert!(!reg.contains(&coords(3, 4)));
        assert_eq!(reg.iter().count(), 2);
    }
}
