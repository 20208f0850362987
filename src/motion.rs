//! Forward motion and toroidal wraparound.
//!
//! Wraparound looks only at the nose. When the nose crosses an edge on one
//! axis the whole triangle is teleported on that axis: the nose to the
//! opposite edge, both wings `size.length` beyond it so the boid slides back
//! in. The wings use the nose offset rather than their real offset, so the
//! triangle is squashed for the frame it wraps and snaps back on its next
//! rotation.

use crate::geometry::TriangleVertices;
use crate::registry::Boid;
use crate::render::Canvas;
use crate::Vec2;

/// Axes on which the last step wrapped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Wrapped {
    pub x: bool,
    pub y: bool,
}

impl Wrapped {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Per-tick displacement for a boid moving at `speed` along `heading`.
#[inline]
pub fn step_delta(heading: f32, speed: f32) -> Vec2 {
    Vec2::from_angle(heading) * speed
}

/// Wrap one axis given `(nose, wing_left, wing_right)` coordinates.
///
/// Returns the new coordinates and whether a teleport happened.
pub fn wrap_axis(coords: [f32; 3], bound: f32, length: f32) -> ([f32; 3], bool) {
    let nose = coords[0];
    if nose >= bound {
        ([0.0, -length, -length], true)
    } else if nose <= 0.0 {
        ([bound, bound + length, bound + length], true)
    } else {
        (coords, false)
    }
}

/// Apply wraparound on both axes, independently.
pub fn wrap_vertices(vertices: &mut TriangleVertices, bounds: Vec2, length: f32) -> Wrapped {
    let (xs, wrapped_x) = wrap_axis(
        [vertices.nose.x, vertices.wing_left.x, vertices.wing_right.x],
        bounds.x,
        length,
    );
    let (ys, wrapped_y) = wrap_axis(
        [vertices.nose.y, vertices.wing_left.y, vertices.wing_right.y],
        bounds.y,
        length,
    );

    vertices.nose = Vec2::new(xs[0], ys[0]);
    vertices.wing_left = Vec2::new(xs[1], ys[1]);
    vertices.wing_right = Vec2::new(xs[2], ys[2]);

    Wrapped {
        x: wrapped_x,
        y: wrapped_y,
    }
}

/// Move `boid` one step along its heading, wrap it against `bounds` and
/// redraw it.
pub fn integrate<C: Canvas + ?Sized>(boid: &mut Boid, bounds: Vec2, canvas: &mut C) -> Wrapped {
    let mut vertices = boid.vertices;
    vertices.translate(step_delta(boid.heading, boid.speed));
    let wrapped = wrap_vertices(&mut vertices, bounds, boid.size.length);

    boid.set_vertices(vertices);
    boid.redraw(canvas);
    wrapped
}
