//! Current-position providers.

use crate::workouts::types::Coords;
use thiserror::Error;

/// Trait for position provider implementations
pub trait PositionProvider {
    /// Get the user's current position
    fn current_position(&mut self) -> Result<Coords, GeolocationError>;
}

/// Provider that always reports the same position, if it has one.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPosition {
    position: Option<Coords>,
}

impl FixedPosition {
    pub fn new(position: Option<Coords>) -> Self {
        Self { position }
    }
}

impl PositionProvider for FixedPosition {
    fn current_position(&mut self) -> Result<Coords, GeolocationError> {
        self.position.ok_or(GeolocationError::Unavailable)
    }
}

/// Errors from position providers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeolocationError {
    /// No position source is available
    #[error("Position unavailable")]
    Unavailable,

    /// The user refused to share their position
    #[error("Permission to read position denied")]
    PermissionDenied,
}
