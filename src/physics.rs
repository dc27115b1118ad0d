/*
 * Physics Module
 *
 * This module handles motion integration for the moving points. Positions
 * advance by forward Euler (position += velocity * dt) and reflect off the
 * world boundary per axis. The integrator knows nothing about the spatial
 * grid; the driver rebuilds the grid after all points have been advanced.
 */

use crate::error::SimError;
use crate::point::MovingPoint;

/// Axis-aligned world rectangle with its origin at (0, 0).
#[derive(Clone, Copy, Debug)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

// Advance one point by one time step and reflect it off the world edges.
// Reflection clamps to the nearest bound instead of computing the exact
// crossing point, so at large dt a fast point can sit on the wall for one
// tick before moving back in.
pub fn advance(point: &mut MovingPoint, dt: f32, bounds: &WorldBounds) {
    point.position += point.velocity * dt;

    if point.position.x < 0.0 || point.position.x > bounds.width {
        point.velocity.x = -point.velocity.x;
        point.position.x = point.position.x.clamp(0.0, bounds.width);
    }
    if point.position.y < 0.0 || point.position.y > bounds.height {
        point.velocity.y = -point.velocity.y;
        point.position.y = point.position.y.clamp(0.0, bounds.height);
    }
}

/// Advance every point by one time step. A negative (or NaN) `dt` is a
/// precondition violation and is rejected before any point is touched.
pub fn integrate(points: &mut [MovingPoint], dt: f32, bounds: &WorldBounds) -> Result<(), SimError> {
    if !(dt >= 0.0) {
        return Err(SimError::NegativeTimeStep(dt));
    }
    for point in points.iter_mut() {
        advance(point, dt, bounds);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    const BOUNDS: WorldBounds = WorldBounds {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn position_advances_by_velocity_times_dt() {
        let mut point = MovingPoint::new(vec2(100.0, 100.0), vec2(40.0, -20.0));
        advance(&mut point, 0.5, &BOUNDS);

        assert_eq!(point.position, vec2(120.0, 90.0));
        assert_eq!(point.velocity, vec2(40.0, -20.0));
    }

    #[test]
    fn crossing_the_lower_bound_reflects_and_clamps() {
        let mut point = MovingPoint::new(vec2(-5.0, 300.0), vec2(-10.0, 0.0));
        advance(&mut point, 0.1, &BOUNDS);

        assert_eq!(point.velocity.x, 10.0);
        assert_eq!(point.position.x, 0.0);
    }

    #[test]
    fn crossing_the_upper_bound_reflects_and_clamps() {
        let mut point = MovingPoint::new(vec2(799.0, 599.0), vec2(50.0, 50.0));
        advance(&mut point, 1.0, &BOUNDS);

        assert_eq!(point.velocity, vec2(-50.0, -50.0));
        assert_eq!(point.position, vec2(800.0, 600.0));
    }

    #[test]
    fn axes_reflect_independently() {
        let mut point = MovingPoint::new(vec2(1.0, 300.0), vec2(-30.0, 10.0));
        advance(&mut point, 1.0, &BOUNDS);

        // x reflected, y untouched
        assert_eq!(point.velocity, vec2(30.0, 10.0));
        assert_eq!(point.position, vec2(0.0, 310.0));
    }

    #[test]
    fn negative_dt_is_rejected_before_any_point_moves() {
        let mut points = vec![MovingPoint::new(vec2(100.0, 100.0), vec2(10.0, 10.0))];
        let err = integrate(&mut points, -0.25, &BOUNDS);

        assert_eq!(err, Err(SimError::NegativeTimeStep(-0.25)));
        assert_eq!(points[0].position, vec2(100.0, 100.0));
    }

    #[test]
    fn zero_dt_leaves_points_in_place() {
        let mut points = vec![MovingPoint::new(vec2(100.0, 100.0), vec2(10.0, 10.0))];
        integrate(&mut points, 0.0, &BOUNDS).unwrap();

        assert_eq!(points[0].position, vec2(100.0, 100.0));
        assert_eq!(points[0].velocity, vec2(10.0, 10.0));
    }
}
