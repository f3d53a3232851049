//! Error types for station network operations.
//!
//! Mutations return [`Result<T>`]. A rejected mutation leaves the network
//! exactly as it was; no error in this crate is fatal.

use thiserror::Error;

/// Result type alias for station network operations.
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Reasons a network mutation or configuration load can be declined.
#[derive(Error, Debug)]
pub enum NetworkError {
    /// Operation referenced a station that is not in the network
    #[error("Station not found: {station_id}")]
    StationNotFound {
        /// ID of the missing station
        station_id: String,
    },

    /// A station with this ID is already registered
    #[error("Station {station_id} already exists")]
    DuplicateStation {
        /// ID that was already taken
        station_id: String,
    },

    /// Both endpoints of a connection are the same station
    #[error("Cannot connect station {station_id} to itself")]
    SelfLoop {
        /// The station on both ends
        station_id: String,
    },

    /// Connection distance is negative, NaN or infinite
    #[error("Invalid distance: {distance}")]
    InvalidDistance {
        /// The rejected weight
        distance: f64,
    },

    /// Configuration could not be read or failed validation
    #[error("Configuration error: {message}")]
    Config {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl NetworkError {
    /// Create a station-not-found error.
    pub fn not_found(station_id: impl Into<String>) -> Self {
        Self::StationNotFound {
            station_id: station_id.into(),
        }
    }

    /// Create a configuration error from a message and optional source.
    pub fn config<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_not_found_error() {
        let err = NetworkError::not_found("PS404");
        assert_eq!(err.to_string(), "Station not found: PS404");
    }

    #[test]
    fn test_duplicate_station_error() {
        let err = NetworkError::DuplicateStation {
            station_id: "PS001".to_string(),
        };
        assert_eq!(err.to_string(), "Station PS001 already exists");
    }

    #[test]
    fn test_self_loop_error() {
        let err = NetworkError::SelfLoop {
            station_id: "PS001".to_string(),
        };
        assert_eq!(err.to_string(), "Cannot connect station PS001 to itself");
    }

    #[test]
    fn test_config_error_keeps_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = NetworkError::config("Failed to read config", Some(io));
        assert_eq!(err.to_string(), "Configuration error: Failed to read config");
        assert!(err.source().is_some());
    }
}
