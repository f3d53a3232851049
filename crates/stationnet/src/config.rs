//! Network configuration.
//!
//! Controls how radius queries behave when the caller does not pick a
//! strategy explicitly. Configuration is plain data and round-trips
//! through JSON.

use crate::error::{NetworkError, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Strategy used by radius ("nearest stations") searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiusSearch {
    /// Breadth-first expansion; a station keeps the distance of the first
    /// path that reached it, even if a shorter one exists.
    #[default]
    FirstReached,
    /// Bounded Dijkstra; a station is reported with its true shortest
    /// distance.
    ShortestDistance,
}

/// Configuration for a [`StationNetwork`](crate::StationNetwork).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkConfig {
    /// Radius (km) used by `find_nearest_stations_default`
    pub default_search_radius: f64,

    /// Strategy used by `find_nearest_stations_default`
    pub radius_search: RadiusSearch,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            default_search_radius: 5.0,
            radius_search: RadiusSearch::FirstReached,
        }
    }
}

impl NetworkConfig {
    /// Config that reports true shortest distances in radius searches.
    pub fn exact() -> Self {
        Self {
            radius_search: RadiusSearch::ShortestDistance,
            ..Default::default()
        }
    }

    /// Builder-style setter for the default search radius.
    pub fn with_search_radius(mut self, radius: f64) -> Self {
        self.default_search_radius = radius;
        self
    }

    /// Check that the configuration values are usable.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::Config`] if the radius is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.default_search_radius.is_finite() || self.default_search_radius < 0.0 {
            return Err(NetworkError::config(
                format!(
                    "default_search_radius must be a finite, non-negative distance (got {})",
                    self.default_search_radius
                ),
                None::<std::io::Error>,
            ));
        }
        Ok(())
    }

    /// Parse and validate a configuration from a JSON string.
    ///
    /// Missing fields fall back to their defaults; unknown fields are rejected.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| NetworkError::serialization("Failed to parse network config", Some(e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading network config from {path:?}");
        let contents = std::fs::read_to_string(path).map_err(|e| {
            NetworkError::config(format!("Failed to read {}", path.display()), Some(e))
        })?;
        Self::from_json_str(&contents)
    }

    /// Serialize the configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| NetworkError::serialization("Failed to serialize network config", Some(e)))
    }
}
