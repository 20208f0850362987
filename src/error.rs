//! Error types for flocksim.
//!
//! The steering math itself cannot fail. Errors come from loading and
//! validating configuration, and from addressing boids that do not exist.

use crate::registry::BoidId;
use std::fmt;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read or write the config file.
    Io(std::io::Error),
    /// The file is not valid config JSON.
    Parse(serde_json::Error),
    /// A value is out of range.
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to access config file: {}", e),
            ConfigError::Parse(e) => write!(f, "Failed to parse config: {}", e),
            ConfigError::Invalid { field, reason } => write!(f, "Invalid `{}`: {}", field, reason),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Errors that can occur when building or stepping a simulation.
#[derive(Debug)]
pub enum SimulationError {
    /// The configuration was rejected.
    Config(ConfigError),
    /// No boid with this id is registered.
    UnknownBoid(BoidId),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Config(e) => write!(f, "Configuration error: {}", e),
            SimulationError::UnknownBoid(id) => write!(f, "No such boid: {}", id),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Config(e) => Some(e),
            SimulationError::UnknownBoid(_) => None,
        }
    }
}

impl From<ConfigError> for SimulationError {
    fn from(e: ConfigError) -> Self {
        SimulationError::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_display_names_field() {
        let err = ConfigError::invalid("sep_dist", "must be below view_dist");
        assert_eq!(err.to_string(), "Invalid `sep_dist`: must be below view_dist");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_simulation_error_chains_source() {
        let err = SimulationError::from(ConfigError::invalid("speed", "negative"));
        assert!(err.to_string().starts_with("Configuration error:"));
        assert!(err.source().is_some());
        assert_eq!(
            SimulationError::UnknownBoid(BoidId::new(4)).to_string(),
            "No such boid: boid#4"
        );
    }
}
