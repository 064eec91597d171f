//! Incremental midpoint-circle rasterization of sampling rings.
//!
//! [`points_at_radius`] enumerates the integer offsets lying (approximately)
//! at a given distance from the origin, exploiting 8-way symmetry of the
//! first octant. The 2D deconvolver consumes three of these rings per call.

use crate::error::Error;

/// Largest radius the rasterization recurrence resolves cleanly at a
/// granularity of 0.01. Deconvolution validates its radius against this.
pub const MAX_RADIUS: f32 = 500.0;

/// Upper bound on the number of points emitted for a ring.
///
/// Normally tight, but an overestimate: callers must use the length of the
/// returned vector, never this bound.
fn ring_capacity(radius: f32) -> usize {
    if radius <= 0.4 {
        4
    } else {
        4 * (1.414_2157_f32 * radius - 9.983_285e-5).round() as usize
    }
}

/// Compute the ordered set of integer offsets at distance `radius` from the
/// origin.
///
/// The four cardinal points are emitted first, then the remaining octant
/// points via the incremental recurrence `x ← sqrt(x² − 2y − 1)`, mirrored
/// into all eight octants. A point on the diagonal is emitted once and
/// terminates the ring, so the set contains no duplicates.
pub fn points_at_radius(radius: f32) -> Result<Vec<[i32; 2]>, Error> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(Error::InvalidRadius {
            radius: radius as f64,
        });
    }

    let capacity = ring_capacity(radius);
    let mut points = Vec::with_capacity(capacity);

    let r = radius.round() as i32;
    points.push([r, 0]);
    points.push([-r, 0]);
    points.push([0, r]);
    points.push([0, -r]);

    let mut x = radius;
    let mut y = 0i32;

    while points.len() < capacity {
        let sq = x * x - 2.0 * y as f32 - 1.0;
        if sq < 0.0 {
            break;
        }
        x = sq.sqrt();
        y += 1;

        let xr = x.round() as i32;
        if xr == 0 || xr < y {
            break;
        }

        points.push([xr, y]);
        points.push([-xr, y]);
        points.push([xr, -y]);
        points.push([-xr, -y]);

        // On the diagonal the swapped octants would duplicate these points.
        if xr == y {
            break;
        }

        points.push([y, xr]);
        points.push([-y, xr]);
        points.push([y, -xr]);
        points.push([-y, -xr]);
    }

    Ok(points)
}
