use crate::error::ValidationError;
use crate::types::workout::{Coordinates, WorkoutKind};

/// Raw values from the entry form, before any checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutInput {
    pub kind: WorkoutKind,
    pub coordinates: Coordinates,
    pub distance_km: f64,
    pub duration_min: f64,
    /// Cadence (spm) for running, elevation gain (m) for cycling.
    pub param: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationPolicy {
    pub allow_negative_elevation: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidatedInput {
    Running { cadence_spm: u32 },
    Cycling { elevation_gain_m: f64 },
}

pub fn validate(input: &WorkoutInput, policy: &ValidationPolicy) -> Result<ValidatedInput, ValidationError> {
    finite("latitude", input.coordinates.lat)?;
    finite("longitude", input.coordinates.lng)?;
    positive("distance", input.distance_km)?;
    positive("duration", input.duration_min)?;

    match input.kind {
        WorkoutKind::Running => {
            positive("cadence", input.param)?;
            if input.param.fract() != 0.0 || input.param > u32::MAX as f64 {
                return Err(ValidationError::NotWhole("cadence"));
            }
            Ok(ValidatedInput::Running {
                cadence_spm: input.param as u32,
            })
        }
        WorkoutKind::Cycling => {
            finite("elevation gain", input.param)?;
            if input.param < 0.0 && !policy.allow_negative_elevation {
                return Err(ValidationError::Negative("elevation gain"));
            }
            Ok(ValidatedInput::Cycling {
                elevation_gain_m: input.param,
            })
        }
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotFinite(field))
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NotPositive(field))
    }
}
