//! Boids and the registry that owns them.

use crate::config::FlockConfig;
use crate::geometry::{center_of, normalize_heading, triangle_around, BoidSize, TriangleVertices};
use crate::render::{BoidVertices, Canvas};
use crate::Vec2;
use std::fmt;

/// Stable handle for a boid, assigned in registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoidId(u32);

impl BoidId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BoidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "boid#{}", self.0)
    }
}

/// One oriented triangular agent.
///
/// `center` and `heading` are the true state; the vertices are derived from
/// them on every rotation and translated on every motion step. `center` is
/// kept equal to the mean of the vertices whenever they change.
#[derive(Clone, Debug)]
pub struct Boid {
    pub(crate) id: BoidId,
    pub(crate) vertices: TriangleVertices,
    pub(crate) center: Vec2,
    pub(crate) heading: f32,
    pub(crate) speed: f32,
    pub(crate) size: BoidSize,
    pub(crate) view_dist: f32,
    pub(crate) view_angle: f32,
    pub(crate) sep_dist: f32,
}

impl Boid {
    /// Build a boid whose triangle has its centroid at `center`.
    ///
    /// The id is a placeholder until the boid is registered.
    pub fn new(center: Vec2, heading: f32, config: &FlockConfig) -> Self {
        let heading = normalize_heading(heading);
        let vertices = triangle_around(center, heading, config.size);
        Self {
            id: BoidId(0),
            center,
            vertices,
            heading,
            speed: config.speed,
            size: config.size,
            view_dist: config.view_dist,
            view_angle: config.view_angle,
            sep_dist: config.sep_dist,
        }
    }

    #[inline]
    pub fn id(&self) -> BoidId {
        self.id
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Direction of travel in radians, always within `(-2π, 2π]`.
    #[inline]
    pub fn heading(&self) -> f32 {
        self.heading
    }

    #[inline]
    pub fn vertices(&self) -> &TriangleVertices {
        &self.vertices
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn size(&self) -> BoidSize {
        self.size
    }

    #[inline]
    pub fn view_dist(&self) -> f32 {
        self.view_dist
    }

    #[inline]
    pub fn view_angle(&self) -> f32 {
        self.view_angle
    }

    #[inline]
    pub fn sep_dist(&self) -> f32 {
        self.sep_dist
    }

    /// Euclidean distance between this boid's center and `other`'s.
    #[inline]
    pub fn distance_to(&self, other: &Boid) -> f32 {
        self.center.distance(other.center)
    }

    /// Turn by `delta` radians about the centroid and redraw.
    pub fn rotate<C: Canvas + ?Sized>(&mut self, delta: f32, canvas: &mut C) {
        self.heading = normalize_heading(self.heading + delta);
        self.set_vertices(triangle_around(self.center, self.heading, self.size));
        self.redraw(canvas);
    }

    /// Replace the vertices and re-establish the centroid.
    pub(crate) fn set_vertices(&mut self, vertices: TriangleVertices) {
        self.vertices = vertices;
        self.center = center_of(vertices.nose, vertices.wing_left, vertices.wing_right);
    }

    pub(crate) fn redraw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.push_geometry(self.id, &BoidVertices::from(&self.vertices));
    }
}

impl fmt::Display for Boid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "align: {:.2} cent: ({:.2}, {:.2})",
            self.heading, self.center.x, self.center.y
        )
    }
}

/// Append-only, ordered collection of every boid in one simulation.
///
/// Registration order is tick order. There is no removal.
#[derive(Clone, Debug, Default)]
pub struct FlockRegistry {
    boids: Vec<Boid>,
}

impl FlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a boid, assigning it the next id.
    pub fn register(&mut self, mut boid: Boid) -> BoidId {
        let id = BoidId(self.boids.len() as u32);
        boid.id = id;
        self.boids.push(boid);
        id
    }

    /// The live population, in registration order.
    #[inline]
    pub fn all(&self) -> &[Boid] {
        &self.boids
    }

    #[inline]
    pub fn get(&self, id: BoidId) -> Option<&Boid> {
        self.boids.get(id.index())
    }

    /// Mutable view of the population, indexed by id.
    #[inline]
    pub(crate) fn all_mut(&mut self) -> &mut [Boid] {
        &mut self.boids
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.boids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    /// Vertex records for every boid, ready for a single buffer upload.
    pub fn vertex_data(&self) -> Vec<BoidVertices> {
        self.boids.iter().map(|b| BoidVertices::from(&b.vertices)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingCanvas;

    fn config() -> FlockConfig {
        FlockConfig::default()
    }

    #[test]
    fn test_register_assigns_sequential_ids() {
        let mut registry = FlockRegistry::new();
        let a = registry.register(Boid::new(Vec2::new(10.0, 10.0), 0.0, &config()));
        let b = registry.register(Boid::new(Vec2::new(20.0, 20.0), 0.0, &config()));

        assert_eq!(a, BoidId::new(0));
        assert_eq!(b, BoidId::new(1));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(b).map(|boid| boid.id()), Some(b));
        assert!(registry.get(BoidId::new(7)).is_none());
    }

    #[test]
    fn test_new_boid_center_is_centroid() {
        let boid = Boid::new(Vec2::new(100.0, 100.0), 0.7, &config());
        let v = boid.vertices();
        let mean = (v.nose + v.wing_left + v.wing_right) / 3.0;
        assert!((boid.center() - mean).length() < 1e-4);
    }

    #[test]
    fn test_layout_offsets_follow_heading() {
        // Size (10, 24): nose 2/3 of the length ahead of the centroid, wings
        // 1/3 behind it and half the width to either side.
        let mut canvas = RecordingCanvas::new(800.0, 600.0);
        let mut boid = Boid::new(Vec2::new(300.0, 200.0), 0.0, &config());
        for turn in [0.0, 1.1, 2.4, -3.0] {
            boid.rotate(turn, &mut canvas);
            let forward = Vec2::from_angle(boid.heading());
            let left = forward.perp();
            let c = boid.center();
            let v = boid.vertices();

            assert!((v.nose - (c + forward * 16.0)).length() < 1e-3);
            assert!((v.wing_left - (c - forward * 8.0 + left * 5.0)).length() < 1e-3);
            assert!((v.wing_right - (c - forward * 8.0 - left * 5.0)).length() < 1e-3);
            assert!(((v.nose - v.wing_left).length() - (24.0f32.powi(2) + 25.0).sqrt()).abs() < 1e-3);
        }
    }

    #[test]
    fn test_rotate_keeps_centroid_and_pushes() {
        let mut registry = FlockRegistry::new();
        let id = registry.register(Boid::new(Vec2::new(300.0, 200.0), 0.3, &config()));
        let mut canvas = RecordingCanvas::new(800.0, 600.0);

        let boid = &mut registry.all_mut()[id.index()];
        boid.rotate(0.25, &mut canvas);

        assert!((boid.heading() - 0.55).abs() < 1e-5);
        assert!((boid.center() - Vec2::new(300.0, 200.0)).length() < 1e-3);
        let v = boid.vertices();
        let mean = (v.nose + v.wing_left + v.wing_right) / 3.0;
        assert!((boid.center() - mean).length() < 1e-4);
        assert_eq!(canvas.pushes(), 1);
        assert_eq!(canvas.latest(id), Some(&BoidVertices::from(v)));
    }

    #[test]
    fn test_display_matches_debug_format() {
        let boid = Boid::new(Vec2::new(0.0, 0.0), 0.0, &config());
        let text = boid.to_string();
        assert!(text.starts_with("align: 0.00 cent: ("));
    }

    #[test]
    fn test_vertex_data_follows_registry_order() {
        let mut registry = FlockRegistry::new();
        registry.register(Boid::new(Vec2::new(10.0, 10.0), 0.0, &config()));
        registry.register(Boid::new(Vec2::new(50.0, 50.0), 1.0, &config()));

        let data = registry.vertex_data();
        assert_eq!(data.len(), 2);
        assert_eq!(data[1], BoidVertices::from(registry.all()[1].vertices()));
    }
}
