/*
 * Spatial Grid Module
 *
 * This module defines the SpatialGrid struct for efficient neighbor lookups.
 * It divides the world into fixed-size square cells and maps each occupied
 * cell to the point positions currently inside it, allowing neighbor queries
 * to touch only nearby cells instead of scanning every point.
 *
 * The grid is rebuilt from scratch exactly once per tick. Between rebuilds it
 * holds exactly the positions of all live points, each in exactly one bucket.
 */

use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use glam::Vec2;
use tracing::debug;

use crate::error::SimError;
use crate::point::MovingPoint;

/// Integer coordinate of one grid cell, derived from a world position by
/// flooring each axis. True floor division keeps negative coordinates
/// consistent: -0.5 at cell size 1 lands in cell -1, not 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
}

impl CellCoord {
    #[inline]
    pub fn from_position(position: Vec2, cell_size: f32) -> Self {
        Self {
            x: (position.x / cell_size).floor() as i32,
            y: (position.y / cell_size).floor() as i32,
        }
    }
}

// Order-sensitive mix: scaling x by a large odd constant before combining
// keeps structurally similar pairs like (a, b) and (b, a) in distinct
// buckets, unlike a plain symmetric xor of the two axes.
impl Hash for CellCoord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        const X_STRIDE: i64 = 0x9E37_79B9_7F4A_7C15_u64 as i64;
        state.write_i64((self.x as i64).wrapping_mul(X_STRIDE) ^ self.y as i64);
    }
}

pub struct SpatialGrid {
    cell_size: f32,
    cells: HashMap<CellCoord, Vec<Vec2>>,
}

impl SpatialGrid {
    /// A non-positive (or NaN) cell size is a precondition violation and is
    /// rejected before any grid state exists.
    pub fn new(cell_size: f32) -> Result<Self, SimError> {
        if !(cell_size > 0.0) {
            return Err(SimError::InvalidCellSize(cell_size));
        }
        Ok(Self {
            cell_size,
            cells: HashMap::new(),
        })
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    // Empty all buckets, keeping their allocations for the next rebuild
    pub fn clear(&mut self) {
        for bucket in self.cells.values_mut() {
            bucket.clear();
        }
    }

    // Insert a position into the bucket of its cell
    #[inline]
    pub fn insert(&mut self, position: Vec2) {
        let coord = CellCoord::from_position(position, self.cell_size);
        self.cells.entry(coord).or_default().push(position);
    }

    /// Contents of one cell's bucket. An unoccupied cell is a normal case
    /// and returns an empty slice, not an error.
    #[inline]
    pub fn lookup(&self, coord: CellCoord) -> &[Vec2] {
        self.cells.get(&coord).map(Vec::as_slice).unwrap_or(&[])
    }

    // The once-per-tick path: drop every stale position, then bucket the
    // current positions of all points.
    pub fn rebuild(&mut self, points: &[MovingPoint]) {
        self.clear();
        for point in points {
            self.insert(point.position);
        }
        debug!(
            points = points.len(),
            occupied = self.occupied_cells(),
            "spatial grid rebuilt"
        );
    }

    /// Number of cells currently holding at least one position. Feeds the
    /// ring-search expansion cap.
    pub fn occupied_cells(&self) -> usize {
        self.cells.values().filter(|bucket| !bucket.is_empty()).count()
    }

    /// Total positions across all buckets.
    pub fn len(&self) -> usize {
        self.cells.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
