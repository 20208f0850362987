//! Simulation configuration.
//!
//! [`FlockConfig`] holds the per-boid steering constants, [`SimConfig`] wraps
//! it with run-level settings. Both serialize to JSON; missing fields fall
//! back to their defaults, so a config file only needs the values it changes:
//!
//! ```json
//! {
//!   "name": "tight flock",
//!   "boid_count": 60,
//!   "flock": { "sep_dist": 30.0, "angle_divisor": 10.0 }
//! }
//! ```
//!
//! Configuration is fixed once a simulation is built.

use crate::error::ConfigError;
use crate::geometry::BoidSize;
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// How boids see each other within one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateMode {
    /// Boids are advanced in registry order against the live registry, so a
    /// boid sees the already-moved state of every boid before it.
    #[default]
    Sequential,
    /// Perception reads a copy of the registry taken at the start of the
    /// tick; every boid sees the same, pre-tick flock.
    Snapshot,
}

/// Steering constants shared by every boid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlockConfig {
    /// Distance travelled per tick.
    pub speed: f32,
    /// Perception radius.
    pub view_dist: f32,
    /// Radius inside which neighbors push a boid away. Must be below `view_dist`.
    pub sep_dist: f32,
    /// Width of the forward field of view in radians, in `(π, 2π]`.
    pub view_angle: f32,
    /// Triangle silhouette.
    pub size: BoidSize,
    /// Damping applied to every steering correction.
    pub angle_divisor: f32,
    /// Probability that an idle boid turns on a given tick.
    pub jitter_chance: f32,
    /// Largest idle turn, in radians.
    pub jitter_max: f32,
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            speed: 10.0,
            view_dist: 100.0,
            sep_dist: 50.0,
            view_angle: 7.0 * PI / 6.0,
            size: BoidSize::default(),
            angle_divisor: 5.0,
            jitter_chance: 0.1,
            jitter_max: 0.1,
        }
    }
}

fn finite(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::invalid(field, format!("must be finite, got {}", value)))
    }
}

impl FlockConfig {
    /// Check every constant is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if finite("speed", self.speed)? < 0.0 {
            return Err(ConfigError::invalid("speed", "must not be negative"));
        }
        if finite("view_dist", self.view_dist)? <= 0.0 {
            return Err(ConfigError::invalid("view_dist", "must be positive"));
        }
        let sep = finite("sep_dist", self.sep_dist)?;
        if sep <= 0.0 || sep >= self.view_dist {
            return Err(ConfigError::invalid(
                "sep_dist",
                format!("must lie in (0, view_dist = {})", self.view_dist),
            ));
        }
        let angle = finite("view_angle", self.view_angle)?;
        if !(0.0..=TAU).contains(&angle) {
            return Err(ConfigError::invalid("view_angle", "must lie in [0, 2π]"));
        }
        if finite("size.width", self.size.width)? <= 0.0 {
            return Err(ConfigError::invalid("size.width", "must be positive"));
        }
        if finite("size.length", self.size.length)? <= 0.0 {
            return Err(ConfigError::invalid("size.length", "must be positive"));
        }
        if finite("angle_divisor", self.angle_divisor)? <= 0.0 {
            return Err(ConfigError::invalid("angle_divisor", "must be positive"));
        }
        if !(0.0..=1.0).contains(&finite("jitter_chance", self.jitter_chance)?) {
            return Err(ConfigError::invalid("jitter_chance", "must lie in [0, 1]"));
        }
        if finite("jitter_max", self.jitter_max)? < 0.0 {
            return Err(ConfigError::invalid("jitter_max", "must not be negative"));
        }
        Ok(())
    }
}

/// Complete run configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub name: String,
    /// Boids spawned at random positions when the run starts.
    pub boid_count: u32,
    /// Host tick period in milliseconds.
    pub tick_interval_ms: u64,
    /// RNG seed. `None` seeds from the clock.
    pub seed: Option<u64>,
    pub update_mode: UpdateMode,
    pub flock: FlockConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            name: "Untitled".into(),
            boid_count: 40,
            tick_interval_ms: 12,
            seed: None,
            update_mode: UpdateMode::Sequential,
            flock: FlockConfig::default(),
        }
    }
}

impl SimConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::invalid("tick_interval_ms", "must be positive"));
        }
        self.flock.validate()
    }

    /// Save the configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config: SimConfig = serde_json::from_str(&json)?;
        config.validate()?;
        info!(path = %path.display(), name = %config.name, "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(FlockConfig::default().validate().is_ok());
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_sep_dist_must_be_tighter_than_view_dist() {
        let config = FlockConfig {
            sep_dist: 100.0,
            ..FlockConfig::default()
        };
        match config.validate() {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "sep_dist"),
            other => panic!("expected sep_dist error, got {:?}", other),
        }
    }

    #[test]
    fn test_view_angle_range() {
        for bad in [-0.5, 7.0, f32::NAN] {
            let config = FlockConfig {
                view_angle: bad,
                ..FlockConfig::default()
            };
            assert!(config.validate().is_err(), "view_angle {} accepted", bad);
        }
        for good in [0.0, 5.0 * PI / 6.0, PI, TAU] {
            let config = FlockConfig {
                view_angle: good,
                ..FlockConfig::default()
            };
            assert!(config.validate().is_ok(), "view_angle {} rejected", good);
        }
    }

    #[test]
    fn test_rejects_non_positive_divisor() {
        let config = FlockConfig {
            angle_divisor: 0.0,
            ..FlockConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "name": "tight", "flock": { "sep_dist": 30.0 } }"#;
        let config: SimConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.name, "tight");
        assert_eq!(config.flock.sep_dist, 30.0);
        assert_eq!(config.flock.view_dist, 100.0);
        assert_eq!(config.update_mode, UpdateMode::Sequential);
        assert_eq!(config.tick_interval(), Duration::from_millis(12));
    }

    #[test]
    fn test_update_mode_snake_case() {
        let json = r#"{ "update_mode": "snapshot" }"#;
        let config: SimConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.update_mode, UpdateMode::Snapshot);
    }
}
