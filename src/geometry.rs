//! Triangle and heading math for boids.
//!
//! A boid is an isoceles triangle. Its true state is `(center, heading)`;
//! the three vertices are always derived from it with fixed offsets:
//!
//! | Vertex | Angle | Distance from center |
//! |--------|-------|----------------------|
//! | wing-left | `heading + π/2` | `size.width / 2` |
//! | wing-right | `heading - π/2` | `size.width / 2` |
//! | nose | `heading` | `size.length` |

use crate::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Silhouette of a boid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoidSize {
    /// Base of the triangle, between the two wing vertices.
    pub width: f32,
    /// Distance from the center to the nose vertex.
    pub length: f32,
}

impl BoidSize {
    pub const fn new(width: f32, length: f32) -> Self {
        Self { width, length }
    }
}

impl Default for BoidSize {
    fn default() -> Self {
        Self::new(10.0, 24.0)
    }
}

/// The three vertices of a boid triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangleVertices {
    pub nose: Vec2,
    pub wing_left: Vec2,
    pub wing_right: Vec2,
}

impl TriangleVertices {
    /// Centroid of the triangle.
    #[inline]
    pub fn center(&self) -> Vec2 {
        center_of(self.nose, self.wing_left, self.wing_right)
    }

    /// Move every vertex by the same offset.
    #[inline]
    pub fn translate(&mut self, offset: Vec2) {
        self.nose += offset;
        self.wing_left += offset;
        self.wing_right += offset;
    }
}

/// Arithmetic mean of three points.
#[inline]
pub fn center_of(p1: Vec2, p2: Vec2, p3: Vec2) -> Vec2 {
    (p1 + p2 + p3) / 3.0
}

/// Vertex layout for a boid at `center` pointing along `heading`.
pub fn vertices_from(center: Vec2, heading: f32, size: BoidSize) -> TriangleVertices {
    let half_width = size.width / 2.0;
    TriangleVertices {
        nose: center + Vec2::from_angle(heading) * size.length,
        wing_left: center + Vec2::from_angle(heading + FRAC_PI_2) * half_width,
        wing_right: center + Vec2::from_angle(heading - FRAC_PI_2) * half_width,
    }
}

/// Vertex layout whose centroid lands exactly on `centroid`.
///
/// [`vertices_from`] anchors the offsets at `center`, which leaves the
/// centroid `size.length / 3` ahead of it. Boids rotate about their centroid,
/// so they lay themselves out with this instead.
pub fn triangle_around(centroid: Vec2, heading: f32, size: BoidSize) -> TriangleVertices {
    let mut vertices = vertices_from(centroid, heading, size);
    vertices.translate(centroid - vertices.center());
    vertices
}

/// Pull a heading back into `(-2π, 2π]` with a single correction.
///
/// Per-tick deltas are far smaller than a full turn, so one pass suffices.
#[inline]
pub fn normalize_heading(heading: f32) -> f32 {
    if heading > TAU {
        heading - TAU
    } else if heading <= -TAU {
        heading + TAU
    } else {
        heading
    }
}

/// 2D cross-product sign of `point` relative to the edge `edge_start -> edge_end`.
#[inline]
pub fn signed_area_test(point: Vec2, edge_start: Vec2, edge_end: Vec2) -> f32 {
    (point.x - edge_end.x) * (edge_start.y - edge_end.y)
        - (edge_start.x - edge_end.x) * (point.y - edge_end.y)
}

/// Whether `point` lies inside or on the triangle `a, b, c`.
///
/// Works for either winding: the point is outside only when the three edge
/// tests disagree in sign.
pub fn point_in_triangle(point: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let s1 = signed_area_test(point, a, b);
    let s2 = signed_area_test(point, b, c);
    let s3 = signed_area_test(point, c, a);

    let negative = s1 < 0.0 || s2 < 0.0 || s3 < 0.0;
    let positive = s1 > 0.0 || s2 > 0.0 || s3 > 0.0;
    !(negative && positive)
}

/// Whether `point` lies strictly inside the triangle `a, b, c`.
///
/// Points on an edge, and every point of a degenerate triangle, are outside.
pub fn point_strictly_in_triangle(point: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let s1 = signed_area_test(point, a, b);
    let s2 = signed_area_test(point, b, c);
    let s3 = signed_area_test(point, c, a);

    (s1 < 0.0 && s2 < 0.0 && s3 < 0.0) || (s1 > 0.0 && s2 > 0.0 && s3 > 0.0)
}
