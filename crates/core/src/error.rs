//! Error types for the Explora core.

use thiserror::Error;

/// Main error type for catalog loading and validation.
#[derive(Error, Debug)]
pub enum Error {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("location '{id}': {reason}")]
    Record { id: String, reason: String },

    #[error("location '{id}': field '{field}' must not be empty")]
    EmptyField { id: String, field: &'static str },

    #[error("location '{id}': latitude {lat} outside [-90, 90]")]
    InvalidLatitude { id: String, lat: f64 },

    #[error("location '{id}': longitude {lng} outside [-180, 180]")]
    InvalidLongitude { id: String, lng: f64 },

    #[error("duplicate location id '{id}'")]
    DuplicateId { id: String },

    #[error("location '{id}': business '{business}' rating {rating} outside [0, 5]")]
    InvalidRating {
        id: String,
        business: String,
        rating: f32,
    },
}

/// Result type alias for Explora core operations.
pub type Result<T> = std::result::Result<T, Error>;
