//! Field-of-view neighbor queries.
//!
//! A boid sees every other boid whose center is strictly closer than
//! `view_dist`, except those in its blind sector: whatever the forward field
//! of view of width `view_angle` leaves uncovered. The sector is resolved to
//! one of three shapes depending on how wide the view is.
//!
//! Wider than a half turn, the blind part is a rear triangle with its apex at
//! the boid's center and two rays along `heading + π ± (2π - view_angle) / 2`:
//!
//! ```text
//!            ray
//!           /
//!   nose <-C      blind triangle behind C
//!           \
//!            ray
//! ```
//!
//! Narrower than a half turn, the visible part is the mirror image: a forward
//! triangle along `heading ± view_angle / 2`, and everything outside it is
//! blind. At exactly a half turn the boid is blind to everything at or
//! behind the line through its center across the heading.
//!
//! Triangle rays are long enough that the chord between their tips touches
//! the view circle on the triangle's axis, so within `view_dist` each
//! triangle agrees with the exact cone.

use crate::geometry::{point_in_triangle, point_strictly_in_triangle};
use crate::registry::Boid;
use crate::Vec2;
use std::f32::consts::{PI, TAU};

/// Views within this of a half turn use the half-plane test.
const HALF_TURN_TOLERANCE: f32 = 1e-4;

/// The region a boid cannot see.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BlindSector {
    /// The field of view covers the full circle.
    None,
    /// Triangle `(ray_a, apex, ray_b)` behind the boid, edges included.
    Rear(Vec2, Vec2, Vec2),
    /// Everything at or behind `apex` along `forward`.
    Behind { apex: Vec2, forward: Vec2 },
    /// Everything not strictly inside the forward triangle `(ray_a, apex, ray_b)`.
    OutsideWedge(Vec2, Vec2, Vec2),
}

impl BlindSector {
    /// Whether `point` falls inside this sector.
    pub fn contains(&self, point: Vec2) -> bool {
        match *self {
            BlindSector::None => false,
            BlindSector::Rear(a, apex, b) => point_in_triangle(point, a, apex, b),
            BlindSector::Behind { apex, forward } => (point - apex).dot(forward) <= 0.0,
            BlindSector::OutsideWedge(a, apex, b) => !point_strictly_in_triangle(point, a, apex, b),
        }
    }
}

/// Isosceles triangle with its apex at `apex`, opening around `axis` by
/// `half` on either side, whose far chord sits `reach` from the apex.
fn cone_triangle(apex: Vec2, axis: f32, half: f32, reach: f32) -> (Vec2, Vec2, Vec2) {
    let ray = reach / half.cos();
    let ray_a = apex + Vec2::from_angle(axis + half) * ray;
    let ray_b = apex + Vec2::from_angle(axis - half) * ray;
    (ray_a, apex, ray_b)
}

/// Blind sector of `boid` for its current center and heading.
pub fn blind_sector(boid: &Boid) -> BlindSector {
    let view = boid.view_angle;
    let apex = boid.center;
    if view >= TAU {
        BlindSector::None
    } else if (view - PI).abs() <= HALF_TURN_TOLERANCE {
        BlindSector::Behind {
            apex,
            forward: Vec2::from_angle(boid.heading),
        }
    } else if view > PI {
        let (a, apex, b) = cone_triangle(apex, boid.heading + PI, (TAU - view) / 2.0, boid.view_dist);
        BlindSector::Rear(a, apex, b)
    } else {
        let (a, apex, b) = cone_triangle(apex, boid.heading, view.max(0.0) / 2.0, boid.view_dist);
        BlindSector::OutsideWedge(a, apex, b)
    }
}

/// Whether `point` falls inside the blind sector of `boid`.
pub fn in_blind_sector(boid: &Boid, point: Vec2) -> bool {
    blind_sector(boid).contains(point)
}

/// Whether `boid` perceives `other`.
///
/// Identity is checked first: a boid's own center sits on the apex of its
/// blind sector, where the sign test is meaningless.
pub fn observes(boid: &Boid, other: &Boid) -> bool {
    if other.id == boid.id {
        return false;
    }
    boid.distance_to(other) < boid.view_dist && !in_blind_sector(boid, other.center)
}

/// Every boid in `flock` that `boid` can currently see, in flock order.
pub fn neighbors<'a>(boid: &Boid, flock: &'a [Boid]) -> Vec<&'a Boid> {
    flock.iter().filter(|other| observes(boid, other)).collect()
}
