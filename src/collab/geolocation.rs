use crate::error::GeolocationError;
use crate::types::workout::Coordinates;

/// One-shot position lookup. No retry, no timeout.
pub trait Geolocator {
    fn request_position(&self) -> Result<Coordinates, GeolocationError>;
}

/// Answers with a configured position, or denies when none is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPosition(pub Option<Coordinates>);

impl Geolocator for FixedPosition {
    fn request_position(&self) -> Result<Coordinates, GeolocationError> {
        self.0.ok_or(GeolocationError::Denied)
    }
}
