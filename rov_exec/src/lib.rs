//! # Rover library.
//!
//! This library allows other crates in the workspace to access items defined inside the rover 
//! crate.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Heading module - the four compass directions and turning between them
pub mod direction;

/// Grid geometry module - bounded coordinates on the wrap-around grid
pub mod grid;

/// Obstacle module - the registry of cells the rover cannot enter
pub mod obstacle;

/// Parameters for the rover's landing site
pub mod params;

/// Rover module - executes command sequences against the rover's position and heading
pub mod rover;
