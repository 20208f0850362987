//! # flocksim - flocking simulation core
//!
//! Oriented triangular boids that perceive each other through a bounded,
//! directional field of view and steer with the three classic flocking
//! corrections: separation, alignment and cohesion.
//!
//! flocksim draws nothing and owns no timer. A host calls
//! [`Simulation::tick`] on a fixed period and hands it a [`Canvas`], which
//! reports the world size and receives every updated triangle.
//!
//! ## Quick Start
//!
//! ```ignore
//! use flocksim::prelude::*;
//!
//! let mut canvas = RecordingCanvas::new(800.0, 600.0);
//! let mut sim = Simulation::new(SimConfig::default())?.with_seed(42);
//! sim.spawn_random(40, &mut canvas);
//!
//! for _ in 0..1000 {
//!     let summary = sim.tick(&mut canvas);
//!     println!("{} of {} boids flocking", summary.flocking, summary.boids);
//! }
//! ```
//!
//! ## One tick
//!
//! For every boid, in registration order:
//!
//! 1. **Perceive** - collect the boids closer than `view_dist` that fall inside
//!    the forward field of view ([`perception`]).
//! 2. **Steer** - idle jitter if nobody is in view, otherwise separation,
//!    alignment and cohesion in that order ([`steering`]).
//! 3. **Move** - one `speed` step along the heading, then toroidal wraparound
//!    against the canvas bounds ([`motion`]).
//!
//! By default later boids see the already-moved state of earlier ones within
//! the same tick. [`UpdateMode::Snapshot`] makes every boid perceive the
//! flock as it was when the tick began.
//!
//! ## Configuration
//!
//! | Field | Default | Meaning |
//! |-------|---------|---------|
//! | `speed` | 10 | Distance per tick |
//! | `view_dist` | 100 | Perception radius |
//! | `sep_dist` | 50 | Separation radius (below `view_dist`) |
//! | `view_angle` | 7π/6 | Forward field of view |
//! | `size` | (10, 24) | Triangle width and nose length |
//! | `angle_divisor` | 5 | Damping for every steering turn |
//! | `jitter_chance` | 0.1 | Idle turn probability |
//! | `jitter_max` | 0.1 | Largest idle turn (radians) |

pub mod config;
mod error;
pub mod geometry;
pub mod motion;
pub mod perception;
pub mod registry;
pub mod render;
mod simulation;
pub mod spawn;
pub mod steering;
pub mod time;

pub use bytemuck;
pub use config::{FlockConfig, SimConfig, UpdateMode};
pub use error::{ConfigError, SimulationError};
pub use geometry::{BoidSize, TriangleVertices};
pub use glam::Vec2;
pub use registry::{Boid, BoidId, FlockRegistry};
pub use render::{BoidVertices, Canvas, RecordingCanvas};
pub use simulation::{AdvanceReport, Simulation, TickSummary};
pub use steering::{NeighborView, SteeringOutcome, SteeringPolicy};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use flocksim::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{FlockConfig, SimConfig, UpdateMode};
    pub use crate::error::{ConfigError, SimulationError};
    pub use crate::geometry::BoidSize;
    pub use crate::registry::{Boid, BoidId};
    pub use crate::render::{BoidVertices, Canvas, RecordingCanvas};
    pub use crate::simulation::{Simulation, TickSummary};
    pub use crate::time::TickClock;
    pub use crate::Vec2;
}
