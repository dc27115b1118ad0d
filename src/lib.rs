/*
 * Moving-Point KNN Simulation - Module Definitions
 *
 * This file defines the module structure for the moving-point neighbor
 * simulation core. It organizes the code into logical components for
 * better maintainability.
 */

// Re-export key components for easier access
pub use error::SimError;
pub use knn::find_k_nearest;
pub use params::SimulationParams;
pub use physics::{advance, integrate, WorldBounds};
pub use point::MovingPoint;
pub use sim::Simulation;
pub use spatial_grid::{CellCoord, SpatialGrid};

// Define modules
pub mod error;
pub mod knn;
pub mod params;
pub mod physics;
pub mod point;
pub mod sim;
pub mod spatial_grid;
