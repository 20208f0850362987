//! Fixed-interval tick pacing for host loops.
//!
//! The simulation has no scheduler of its own; a host calls
//! [`Simulation::tick`](crate::Simulation::tick) on a fixed period. `TickClock`
//! is that period plus the bookkeeping a host usually wants.
//!
//! # Example
//!
//! ```ignore
//! use flocksim::time::TickClock;
//!
//! let mut clock = TickClock::new(Duration::from_millis(12));
//!
//! loop {
//!     std::thread::sleep(clock.time_until_next());
//!     if clock.tick_due() {
//!         sim.tick(&mut canvas);
//!         clock.mark_tick();
//!     }
//! }
//! ```

use std::time::{Duration, Instant};

/// Tick pacing and rate measurement.
#[derive(Debug)]
pub struct TickClock {
    /// Target period between ticks.
    interval: Duration,
    /// When the clock was created or last reset.
    start: Instant,
    /// When the last tick was marked.
    last_tick: Instant,
    /// Ticks marked since start.
    tick_count: u64,
    /// Measured ticks per second (updated periodically).
    tick_rate: f32,
    /// Tick count at last rate update.
    rate_tick_count: u64,
    /// Time of last rate update.
    rate_update_time: Instant,
    /// How often to recompute the tick rate.
    rate_update_interval: Duration,
}

impl TickClock {
    /// Clock that wants a tick every `interval`, starting now.
    pub fn new(interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            interval,
            start: now,
            last_tick: now,
            tick_count: 0,
            tick_rate: 0.0,
            rate_tick_count: 0,
            rate_update_time: now,
            rate_update_interval: Duration::from_millis(500),
        }
    }

    /// Whether at least one interval has passed since the last tick.
    pub fn tick_due(&self) -> bool {
        self.last_tick.elapsed() >= self.interval
    }

    /// Time left before the next tick is due (zero if already due).
    pub fn time_until_next(&self) -> Duration {
        self.interval.saturating_sub(self.last_tick.elapsed())
    }

    /// Record that a tick ran. Returns the total tick count.
    pub fn mark_tick(&mut self) -> u64 {
        let now = Instant::now();
        self.last_tick = now;
        self.tick_count += 1;

        let since = now.duration_since(self.rate_update_time);
        if since >= self.rate_update_interval {
            let ticks = self.tick_count - self.rate_tick_count;
            self.tick_rate = ticks as f32 / since.as_secs_f32();
            self.rate_tick_count = self.tick_count;
            self.rate_update_time = now;
        }

        self.tick_count
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Ticks marked since start.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.tick_count
    }

    /// Measured ticks per second.
    #[inline]
    pub fn tick_rate(&self) -> f32 {
        self.tick_rate
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
