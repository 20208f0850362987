//! Simulation controller.
//!
//! A [`Simulation`] owns everything one flock needs: its configuration, the
//! registry of boids, the steering policy and the RNG used for idle jitter.
//! Independent simulations share nothing.
//!
//! ```ignore
//! let mut canvas = RecordingCanvas::new(800.0, 600.0);
//! let mut sim = Simulation::new(SimConfig::default())?.with_seed(7);
//! sim.spawn_random(40, &mut canvas);
//!
//! loop {
//!     sim.tick(&mut canvas);
//! }
//! ```

use crate::config::{FlockConfig, SimConfig, UpdateMode};
use crate::error::SimulationError;
use crate::motion::{self, Wrapped};
use crate::perception;
use crate::registry::{Boid, BoidId, FlockRegistry};
use crate::render::Canvas;
use crate::spawn::{clock_seed, SpawnContext};
use crate::steering::{NeighborView, SteeringOutcome, SteeringPolicy};
use crate::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, info, trace};

/// What happened to one boid during an advance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdvanceReport {
    /// Number of boids it perceived.
    pub neighbors: usize,
    pub steering: SteeringOutcome,
    pub wrapped: Wrapped,
}

/// Aggregate counts for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// Tick number, starting at 1.
    pub tick: u64,
    pub boids: usize,
    /// Boids that perceived at least one neighbor.
    pub flocking: usize,
    /// Boids that perceived nobody.
    pub idle: usize,
    /// Idle boids that turned randomly.
    pub jittered: usize,
    /// Boids that wrapped on at least one axis.
    pub wrapped: usize,
}

/// One flock and the state needed to step it.
pub struct Simulation {
    config: SimConfig,
    registry: FlockRegistry,
    policy: SteeringPolicy,
    rng: SmallRng,
    seed: u64,
    ticks: u64,
}

impl Simulation {
    /// Create an empty simulation after validating `config`.
    pub fn new(config: SimConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(clock_seed);
        info!(
            name = %config.name,
            seed,
            mode = ?config.update_mode,
            "created simulation"
        );
        Ok(Self {
            policy: SteeringPolicy::from(&config.flock),
            registry: FlockRegistry::new(),
            rng: SmallRng::seed_from_u64(seed),
            seed,
            ticks: 0,
            config,
        })
    }

    /// Simulation with default run settings and the given steering constants.
    pub fn with_flock_config(flock: FlockConfig) -> Result<Self, SimulationError> {
        Self::new(SimConfig {
            flock,
            ..SimConfig::default()
        })
    }

    /// Reseed the jitter and spawn RNGs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self.config.seed = Some(seed);
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    /// Choose between sequential and snapshot perception.
    pub fn with_update_mode(mut self, mode: UpdateMode) -> Self {
        self.config.update_mode = mode;
        self
    }

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn registry(&self) -> &FlockRegistry {
        &self.registry
    }

    #[inline]
    pub fn policy(&self) -> &SteeringPolicy {
        &self.policy
    }

    /// Ticks completed so far.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[inline]
    pub fn boid(&self, id: BoidId) -> Option<&Boid> {
        self.registry.get(id)
    }

    /// Register a boid centered at `center` and draw it.
    pub fn add_boid<C: Canvas + ?Sized>(&mut self, center: Vec2, heading: f32, canvas: &mut C) -> BoidId {
        let id = self.registry.register(Boid::new(center, heading, &self.config.flock));
        if let Some(boid) = self.registry.get(id) {
            boid.redraw(canvas);
        }
        id
    }

    /// Register `count` boids at random centers within the canvas, each with
    /// a random heading.
    pub fn spawn_random<C: Canvas + ?Sized>(&mut self, count: u32, canvas: &mut C) -> Vec<BoidId> {
        let bounds = canvas.bounds();
        let first = self.registry.len() as u32;
        let ids: Vec<BoidId> = (0..count)
            .map(|i| {
                let mut ctx = SpawnContext::new(first + i, self.seed);
                let center = ctx.random_center(bounds);
                let heading = ctx.random_heading();
                self.add_boid(center, heading, canvas)
            })
            .collect();
        debug!(count, total = self.registry.len(), "spawned boids");
        ids
    }

    /// Spawn `config.boid_count` random boids.
    pub fn populate<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> Vec<BoidId> {
        self.spawn_random(self.config.boid_count, canvas)
    }

    /// Perceive, steer and move one boid against the live registry.
    pub fn advance<C: Canvas + ?Sized>(&mut self, id: BoidId, canvas: &mut C) -> Result<AdvanceReport, SimulationError> {
        if self.registry.get(id).is_none() {
            return Err(SimulationError::UnknownBoid(id));
        }
        Ok(self.advance_at(id.index(), None, canvas))
    }

    /// Advance the boid at `index`, perceiving `snapshot` if given and the
    /// live registry otherwise. `index` must be in range.
    fn advance_at<C: Canvas + ?Sized>(&mut self, index: usize, snapshot: Option<&[Boid]>, canvas: &mut C) -> AdvanceReport {
        let flock = match snapshot {
            Some(frozen) => frozen,
            None => self.registry.all(),
        };
        let observed: Vec<NeighborView> = perception::neighbors(&self.registry.all()[index], flock)
            .into_iter()
            .map(NeighborView::from)
            .collect();

        let bounds = canvas.bounds();
        let boid = &mut self.registry.all_mut()[index];
        let steering = self.policy.steer(boid, &observed, &mut self.rng, canvas);
        let wrapped = motion::integrate(boid, bounds, canvas);
        if wrapped.any() {
            trace!(boid = boid.id().raw(), x = wrapped.x, y = wrapped.y, "wrapped");
        }

        AdvanceReport {
            neighbors: observed.len(),
            steering,
            wrapped,
        }
    }

    /// Advance every boid once, in registry order.
    pub fn tick<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> TickSummary {
        let snapshot = match self.config.update_mode {
            UpdateMode::Sequential => None,
            UpdateMode::Snapshot => Some(self.registry.all().to_vec()),
        };

        self.ticks += 1;
        let mut summary = TickSummary {
            tick: self.ticks,
            boids: self.registry.len(),
            ..TickSummary::default()
        };

        for index in 0..self.registry.len() {
            let report = self.advance_at(index, snapshot.as_deref(), canvas);
            match report.steering {
                SteeringOutcome::Idle { jitter } => {
                    summary.idle += 1;
                    if jitter.is_some() {
                        summary.jittered += 1;
                    }
                }
                SteeringOutcome::Flocking { .. } => summary.flocking += 1,
            }
            if report.wrapped.any() {
                summary.wrapped += 1;
            }
        }

        debug!(
            tick = summary.tick,
            flocking = summary.flocking,
            idle = summary.idle,
            wrapped = summary.wrapped,
            "tick complete"
        );
        summary
    }
}
