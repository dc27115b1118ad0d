/*
 * Simulation Driver Module
 *
 * This module defines the Simulation struct that owns the point array and
 * the spatial grid and drives one tick at a time. Each tick enforces a hard
 * barrier: every point finishes integration, then the grid is rebuilt from
 * the updated positions, and only then may neighbor queries run. Queries are
 * read-only against the frozen grid, so computing all per-point neighbor
 * lists in parallel is safe.
 */

use glam::Vec2;
use rand::Rng;
use rayon::prelude::*;
use tracing::debug;

use crate::error::SimError;
use crate::knn::find_k_nearest;
use crate::params::SimulationParams;
use crate::physics::{integrate, WorldBounds};
use crate::point::{spawn_points, MovingPoint};
use crate::spatial_grid::SpatialGrid;

pub struct Simulation {
    pub params: SimulationParams,
    pub points: Vec<MovingPoint>,
    grid: SpatialGrid,
    bounds: WorldBounds,
}

impl Simulation {
    /// Build a simulation with randomized points drawn from an explicit
    /// seeded RNG. Configuration is validated before any state is built.
    pub fn new(params: SimulationParams, rng: &mut impl Rng) -> Result<Self, SimError> {
        params.validate()?;
        let points = spawn_points(&params, rng);
        Self::from_points(params, points)
    }

    /// Build a simulation around an existing point set.
    pub fn from_points(params: SimulationParams, points: Vec<MovingPoint>) -> Result<Self, SimError> {
        params.validate()?;
        let mut grid = SpatialGrid::new(params.cell_size)?;
        let bounds = WorldBounds::new(params.world_width, params.world_height);
        // Bucket the starting positions so queries are valid before the
        // first step
        grid.rebuild(&points);
        Ok(Self {
            params,
            points,
            grid,
            bounds,
        })
    }

    /// Advance one tick: integrate every point, then rebuild the grid from
    /// the updated positions. No query may observe the grid mid-rebuild.
    pub fn step(&mut self, dt: f32) -> Result<(), SimError> {
        integrate(&mut self.points, dt, &self.bounds)?;
        self.grid.rebuild(&self.points);
        debug!(dt, points = self.points.len(), "tick complete");
        Ok(())
    }

    pub fn grid(&self) -> &SpatialGrid {
        &self.grid
    }

    /// Neighbor positions for one point against the current grid snapshot.
    pub fn neighbors_of(&self, index: usize) -> Vec<Vec2> {
        find_k_nearest(self.points[index].position, &self.grid, self.params.k)
    }

    /// Neighbor lists for every point, in point order. Queries are
    /// independent of each other, so they run in parallel when enabled.
    pub fn neighbor_lists(&self) -> Vec<Vec<Vec2>> {
        if self.params.enable_parallel {
            self.points
                .par_iter()
                .map(|point| find_k_nearest(point.position, &self.grid, self.params.k))
                .collect()
        } else {
            self.points
                .iter()
                .map(|point| find_k_nearest(point.position, &self.grid, self.params.k))
                .collect()
        }
    }
}
