/*
 * Neighbor Query Module
 *
 * This module implements the approximate k-nearest-neighbor query over the
 * spatial grid. Candidates are gathered by an expanding ring search: square
 * shells of cells around the query cell are scanned outward until enough
 * candidates are found or the expansion cap is reached, then the candidates
 * are sorted by distance and truncated to k.
 *
 * The cap (square root of the occupied-cell count) is a heuristic, not a
 * correctness bound: under sparse or clustered distributions the search may
 * return fewer than k neighbors even though more exist elsewhere. Callers
 * must treat a short result as valid.
 */

use glam::Vec2;
use tracing::trace;

use crate::spatial_grid::{CellCoord, SpatialGrid};

/// Up to `k` positions nearest to `point`, ascending by Euclidean distance,
/// never including `point` itself. `k = 0` and an empty grid both yield an
/// empty result.
pub fn find_k_nearest(point: Vec2, grid: &SpatialGrid, k: usize) -> Vec<Vec2> {
    if k == 0 {
        return Vec::new();
    }

    let center = CellCoord::from_position(point, grid.cell_size());
    let cap = (grid.occupied_cells() as f32).sqrt() as i32;
    let mut candidates: Vec<Vec2> = Vec::new();

    for s in 1..=cap {
        // Radius 1 covers the full 3x3 block around the query cell; each
        // further radius scans only the newly exposed shell, accumulating
        // the same candidate set as a full-square rescan would.
        if s == 1 {
            for dx in -1..=1 {
                for dy in -1..=1 {
                    collect_cell(grid, offset(center, dx, dy), point, &mut candidates);
                }
            }
        } else {
            for d in -s..=s {
                collect_cell(grid, offset(center, d, -s), point, &mut candidates);
                collect_cell(grid, offset(center, d, s), point, &mut candidates);
            }
            for d in (1 - s)..=(s - 1) {
                collect_cell(grid, offset(center, -s, d), point, &mut candidates);
                collect_cell(grid, offset(center, s, d), point, &mut candidates);
            }
        }

        trace!(radius = s, candidates = candidates.len(), "ring scanned");
        if candidates.len() >= k {
            break;
        }
    }

    // Squared distance sorts in the same order as true Euclidean distance
    candidates.sort_by(|a, b| {
        point
            .distance_squared(*a)
            .total_cmp(&point.distance_squared(*b))
    });
    candidates.truncate(k);
    candidates
}

#[inline]
fn offset(center: CellCoord, dx: i32, dy: i32) -> CellCoord {
    CellCoord {
        x: center.x + dx,
        y: center.y + dy,
    }
}

// Gather one cell's bucket, excluding the query point itself
#[inline]
fn collect_cell(grid: &SpatialGrid, coord: CellCoord, query: Vec2, out: &mut Vec<Vec2>) {
    for &neighbor in grid.lookup(coord) {
        if neighbor != query {
            out.push(neighbor);
        }
    }
}
