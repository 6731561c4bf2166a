use thiserror::Error;

use crate::catalog::BodyId;
use crate::view::ViewMode;

/// Why a coordinate pair was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CoordinateError {
    #[error("Coordinates must be numbers. Use dot (.) for decimals.")]
    NotANumber,
    #[error("Latitude must be between -60° and 85° (got {0}).")]
    LatitudeOutOfRange(f64),
    #[error("Longitude must be between -180° and 180° (got {0}).")]
    LongitudeOutOfRange(f64),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewError {
    #[error("Unknown celestial body: {0}")]
    InvalidBodySelection(String),
    #[error(transparent)]
    InvalidCoordinateInput(#[from] CoordinateError),
    #[error("Fly-to needs Earth in satellite view (current: {body}, {mode})")]
    FlyToUnavailable { body: BodyId, mode: ViewMode },
    #[error("Could not load imagery layer: {0}")]
    LayerLoadFailure(String),
}

/// Raised by a rendering surface while building one of its objects.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{0}")]
pub struct SurfaceError(pub String);

impl From<SurfaceError> for ViewError {
    fn from(err: SurfaceError) -> Self {
        ViewError::LayerLoadFailure(err.0)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChatError {
    #[error("chat service is not configured")]
    NotConfigured,
    #[error("API error: {0}")]
    Http(String),
    #[error("malformed reply: {0}")]
    Decode(String),
}
