/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * startup configuration for the simulation. Parameters are supplied once by
 * the setup layer and validated before any simulation state is built.
 */

use crate::error::SimError;

#[derive(Clone, Debug)]
pub struct SimulationParams {
    pub num_points: usize,
    pub cell_size: f32,
    pub k: usize,
    pub max_speed: f32,
    pub world_width: f32,
    pub world_height: f32,
    // Performance settings
    pub enable_parallel: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_points: 100,
            cell_size: 50.0,
            k: 3,
            max_speed: 100.0,
            world_width: 800.0,
            world_height: 600.0,
            enable_parallel: true,
        }
    }
}

impl SimulationParams {
    /// Reject out-of-range configuration before any simulation state exists.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.num_points == 0 {
            return Err(SimError::InvalidParams {
                what: "num_points must be greater than zero".into(),
            });
        }
        if !(self.cell_size > 0.0) {
            return Err(SimError::InvalidCellSize(self.cell_size));
        }
        if !(self.max_speed >= 0.0) {
            return Err(SimError::InvalidParams {
                what: format!("max_speed must be non-negative, got {}", self.max_speed),
            });
        }
        if !(self.world_width > 0.0) || !(self.world_height > 0.0) {
            return Err(SimError::InvalidParams {
                what: format!(
                    "world dimensions must be positive, got {}x{}",
                    self.world_width, self.world_height
                ),
            });
        }
        Ok(())
    }
}
