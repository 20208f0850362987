//! Heading corrections applied once per advance.
//!
//! A boid that sees nobody wanders: with probability `jitter_chance` it turns
//! by a random angle of at most `jitter_max`. A boid that sees neighbors runs
//! three corrections in a fixed order, each of which turns the boid and
//! redraws it before the next one reads its heading:
//!
//! 1. **Separation** - away from the summed centers of the neighbors closer
//!    than `sep_dist`.
//! 2. **Alignment** - toward the vector mean of the neighbors' headings.
//! 3. **Cohesion** - toward the bearing of the neighbors' centroid, relative
//!    to the current heading.
//!
//! Every correction is divided by `angle_divisor` so no single rule can snap
//! the boid onto a new course within one tick. The rules are not
//! independent: each acts on the heading the previous one left behind.

use crate::config::FlockConfig;
use crate::registry::Boid;
use crate::render::Canvas;
use crate::Vec2;
use rand::Rng;
use tracing::trace;

/// What a steering rule needs to know about a perceived neighbor.
///
/// Captured before the perceiving boid is mutated, so the registry is never
/// borrowed across a rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeighborView {
    pub center: Vec2,
    pub heading: f32,
}

impl From<&Boid> for NeighborView {
    fn from(boid: &Boid) -> Self {
        Self {
            center: boid.center(),
            heading: boid.heading(),
        }
    }
}

/// Which branch a boid took and what it turned by.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SteeringOutcome {
    /// Nobody in view. `jitter` is the applied turn, if any.
    Idle { jitter: Option<f32> },
    /// Neighbors in view. Each field is the turn that rule applied.
    Flocking {
        separation: f32,
        alignment: f32,
        cohesion: f32,
    },
}

/// `atan2` of a direction, with the zero vector mapped to angle 0.
///
/// Negated empty sums come out as `(-0.0, -0.0)`, whose `atan2` is `-π`.
#[inline]
fn bearing(v: Vec2) -> f32 {
    if v == Vec2::ZERO {
        0.0
    } else {
        v.y.atan2(v.x)
    }
}

/// Target angle for separation, before damping.
///
/// Only neighbors strictly closer than `sep_dist` to `center` count. With
/// none of them, the result is 0 and the rule is a no-op.
pub fn separation_angle(center: Vec2, sep_dist: f32, observed: &[NeighborView]) -> f32 {
    let sum: Vec2 = observed
        .iter()
        .filter(|n| center.distance(n.center) < sep_dist)
        .map(|n| n.center)
        .sum();
    bearing(-sum)
}

/// Vector-mean bearing of the neighbors' headings.
///
/// Averaging unit vectors instead of raw angles keeps headings on either
/// side of the 0/2π seam from cancelling out.
pub fn alignment_angle(observed: &[NeighborView]) -> f32 {
    let sum: Vec2 = observed.iter().map(|n| Vec2::from_angle(n.heading)).sum();
    bearing(sum)
}

/// Bearing of the neighbors' centroid, relative to `heading`.
pub fn cohesion_angle(heading: f32, observed: &[NeighborView]) -> f32 {
    if observed.is_empty() {
        return 0.0;
    }
    let sum: Vec2 = observed.iter().map(|n| n.center).sum();
    let centroid = sum / observed.len() as f32;
    bearing(centroid) - heading
}

/// Steering parameters shared by every boid in a simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SteeringPolicy {
    /// Damping applied to every correction (larger = gentler turns).
    pub angle_divisor: f32,
    /// Probability that an idle boid turns this tick.
    pub jitter_chance: f32,
    /// Largest idle turn, in radians.
    pub jitter_max: f32,
}

impl Default for SteeringPolicy {
    fn default() -> Self {
        Self::from(&FlockConfig::default())
    }
}

impl From<&FlockConfig> for SteeringPolicy {
    fn from(config: &FlockConfig) -> Self {
        Self {
            angle_divisor: config.angle_divisor,
            jitter_chance: config.jitter_chance,
            jitter_max: config.jitter_max,
        }
    }
}

impl SteeringPolicy {
    /// Random idle turn, or `None` when the boid keeps its course.
    pub fn idle_jitter<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<f32> {
        let roll: f32 = rng.gen();
        if roll > 1.0 - self.jitter_chance {
            let delta = rng.gen_range(-self.jitter_max..=self.jitter_max);
            (delta != 0.0).then_some(delta)
        } else {
            None
        }
    }

    /// Run one steering pass on `boid` given what it currently observes.
    pub fn steer<R, C>(
        &self,
        boid: &mut Boid,
        observed: &[NeighborView],
        rng: &mut R,
        canvas: &mut C,
    ) -> SteeringOutcome
    where
        R: Rng + ?Sized,
        C: Canvas + ?Sized,
    {
        if observed.is_empty() {
            let jitter = self.idle_jitter(rng);
            if let Some(delta) = jitter {
                boid.rotate(delta, canvas);
            }
            trace!(boid = boid.id().raw(), ?jitter, "idle");
            return SteeringOutcome::Idle { jitter };
        }

        let separation = separation_angle(boid.center(), boid.sep_dist(), observed) / self.angle_divisor;
        if separation != 0.0 {
            boid.rotate(separation, canvas);
        }

        let alignment = alignment_angle(observed) / self.angle_divisor;
        boid.rotate(alignment, canvas);

        let cohesion = cohesion_angle(boid.heading(), observed) / self.angle_divisor;
        boid.rotate(cohesion, canvas);

        trace!(
            boid = boid.id().raw(),
            neighbors = observed.len(),
            separation,
            alignment,
            cohesion,
            "flocking"
        );
        SteeringOutcome::Flocking {
            separation,
            alignment,
            cohesion,
        }
    }
}
