//! The seam between the simulation and whatever draws it.
//!
//! The simulation never draws anything itself. Every time a boid's triangle
//! changes it pushes the new vertices to a [`Canvas`], and once per advance
//! it asks the canvas how large the world is.
//!
//! [`BoidVertices`] is `#[repr(C)]` and `Pod`, so a GPU host can upload the
//! whole flock in one call:
//!
//! ```ignore
//! let vertices = sim.registry().vertex_data();
//! queue.write_buffer(&buffer, 0, bytemuck::cast_slice(&vertices));
//! ```

use crate::geometry::TriangleVertices;
use crate::registry::BoidId;
use crate::Vec2;
use bytemuck::{Pod, Zeroable};

/// GPU-compatible vertex record for one boid.
///
/// Vertex order matches the polygon winding hosts expect:
/// wing-left, wing-right, nose.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct BoidVertices {
    pub wing_left: [f32; 2],
    pub wing_right: [f32; 2],
    pub nose: [f32; 2],
}

impl From<&TriangleVertices> for BoidVertices {
    fn from(v: &TriangleVertices) -> Self {
        Self {
            wing_left: v.wing_left.to_array(),
            wing_right: v.wing_right.to_array(),
            nose: v.nose.to_array(),
        }
    }
}

/// Host-side drawing surface.
pub trait Canvas {
    /// Current world size as `(width, height)`.
    fn bounds(&self) -> Vec2;

    /// Replace the on-screen polygon for `id`. Fire and forget.
    fn push_geometry(&mut self, id: BoidId, vertices: &BoidVertices);
}

/// Canvas that only keeps the latest geometry per boid and counts pushes.
///
/// Used by the headless runner and handy in tests.
#[derive(Clone, Debug)]
pub struct RecordingCanvas {
    size: Vec2,
    latest: Vec<BoidVertices>,
    pushes: u64,
}

impl RecordingCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            latest: Vec::new(),
            pushes: 0,
        }
    }

    /// Last geometry pushed for `id`, if any.
    pub fn latest(&self, id: BoidId) -> Option<&BoidVertices> {
        self.latest.get(id.index())
    }

    /// Total number of `push_geometry` calls received.
    pub fn pushes(&self) -> u64 {
        self.pushes
    }
}

impl Canvas for RecordingCanvas {
    fn bounds(&self) -> Vec2 {
        self.size
    }

    fn push_geometry(&mut self, id: BoidId, vertices: &BoidVertices) {
        let idx = id.index();
        if idx >= self.latest.len() {
            self.latest.resize(idx + 1, BoidVertices::zeroed());
        }
        self.latest[idx] = *vertices;
        self.pushes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertices_are_tightly_packed() {
        assert_eq!(std::mem::size_of::<BoidVertices>(), 24);
        let v = [BoidVertices::zeroed(); 3];
        let bytes: &[u8] = bytemuck::cast_slice(&v);
        assert_eq!(bytes.len(), 72);
    }

    #[test]
    fn test_from_triangle_keeps_vertex_order() {
        let tri = TriangleVertices {
            nose: Vec2::new(5.0, 6.0),
            wing_left: Vec2::new(1.0, 2.0),
            wing_right: Vec2::new(3.0, 4.0),
        };
        let v = BoidVertices::from(&tri);
        let flat: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&v));
        assert_eq!(flat, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_recording_canvas_keeps_latest() {
        let mut canvas = RecordingCanvas::new(800.0, 600.0);
        let a = BoidVertices { nose: [1.0, 1.0], ..Default::default() };
        let b = BoidVertices { nose: [2.0, 2.0], ..Default::default() };

        canvas.push_geometry(BoidId::new(2), &a);
        canvas.push_geometry(BoidId::new(2), &b);

        assert_eq!(canvas.pushes(), 2);
        assert_eq!(canvas.latest(BoidId::new(2)), Some(&b));
        assert_eq!(canvas.latest(BoidId::new(0)), Some(&BoidVertices::zeroed()));
        assert_eq!(canvas.latest(BoidId::new(9)), None);
        assert_eq!(canvas.bounds(), Vec2::new(800.0, 600.0));
    }
}
