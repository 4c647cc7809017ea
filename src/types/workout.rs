use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::pipeline::validate::{self, ValidatedInput, ValidationPolicy, WorkoutInput};
use crate::types::record::{CommonRecord, CyclingRecord, RunningRecord, WorkoutRecord};

/// A map position, persisted as a `[lat, lng]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.lat, c.lng]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "running" => Some(WorkoutKind::Running),
            "cycling" => Some(WorkoutKind::Cycling),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }
}

/// Fields shared by every workout variant. Only `interaction_count` changes after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutCore {
    id: String,
    created_at: DateTime<Utc>,
    coordinates: Coordinates,
    distance_km: f64,
    duration_min: f64,
    description: String,
    interaction_count: u32,
}

impl WorkoutCore {
    fn new(
        kind: WorkoutKind,
        id: String,
        created_at: DateTime<Utc>,
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
    ) -> Self {
        Self {
            description: describe(kind, created_at),
            id,
            created_at,
            coordinates,
            distance_km,
            duration_min,
            interaction_count: 0,
        }
    }

    /// The description always follows `kind` and `created_at`; a stored one that
    /// disagrees is replaced.
    fn from_common(kind: WorkoutKind, common: CommonRecord) -> Self {
        let description = describe(kind, common.created_at);
        if !common.description.trim().is_empty() && common.description != description {
            tracing::warn!(
                "Stored description {:?} for workout {} does not match, using {:?}",
                common.description,
                common.id,
                description
            );
        }

        Self {
            id: common.id,
            created_at: common.created_at,
            coordinates: common.coordinates,
            distance_km: common.distance_km,
            duration_min: common.duration_min,
            description,
            interaction_count: common.interaction_count,
        }
    }

    fn to_common(&self) -> CommonRecord {
        CommonRecord {
            id: self.id.clone(),
            created_at: self.created_at,
            coordinates: self.coordinates,
            distance_km: self.distance_km,
            duration_min: self.duration_min,
            description: self.description.clone(),
            interaction_count: self.interaction_count,
        }
    }
}

/// "Running on April 14"
pub fn describe(kind: WorkoutKind, created_at: DateTime<Utc>) -> String {
    format!("{} on {}", kind.label(), created_at.format("%B %-d"))
}

pub fn pace_min_per_km(distance_km: f64, duration_min: f64) -> f64 {
    duration_min / distance_km
}

pub fn speed_km_per_h(distance_km: f64, duration_min: f64) -> f64 {
    distance_km / (duration_min / 60.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    core: WorkoutCore,
    cadence_spm: u32,
    pace_min_per_km: f64,
}

impl Running {
    fn new(core: WorkoutCore, cadence_spm: u32) -> Self {
        let pace_min_per_km = pace_min_per_km(core.distance_km, core.duration_min);
        Self {
            core,
            cadence_spm,
            pace_min_per_km,
        }
    }

    pub fn cadence_spm(&self) -> u32 {
        self.cadence_spm
    }

    pub fn pace_min_per_km(&self) -> f64 {
        self.pace_min_per_km
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cycling {
    core: WorkoutCore,
    elevation_gain_m: f64,
    speed_km_per_h: f64,
}

impl Cycling {
    fn new(core: WorkoutCore, elevation_gain_m: f64) -> Self {
        let speed_km_per_h = speed_km_per_h(core.distance_km, core.duration_min);
        Self {
            core,
            elevation_gain_m,
            speed_km_per_h,
        }
    }

    pub fn elevation_gain_m(&self) -> f64 {
        self.elevation_gain_m
    }

    pub fn speed_km_per_h(&self) -> f64 {
        self.speed_km_per_h
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    Cycling(Cycling),
}

impl Workout {
    /// Validates `input` and builds the matching variant, computing its derived
    /// metric and description in the same step.
    pub fn new(
        input: &WorkoutInput,
        policy: &ValidationPolicy,
        id: String,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let validated = validate::validate(input, policy)?;
        let core = WorkoutCore::new(
            input.kind,
            id,
            created_at,
            input.coordinates,
            input.distance_km,
            input.duration_min,
        );

        Ok(Self::build(core, validated))
    }

    fn build(core: WorkoutCore, validated: ValidatedInput) -> Self {
        match validated {
            ValidatedInput::Running { cadence_spm } => Workout::Running(Running::new(core, cadence_spm)),
            ValidatedInput::Cycling { elevation_gain_m } => {
                Workout::Cycling(Cycling::new(core, elevation_gain_m))
            }
        }
    }

    /// Rebuilds a live workout from a persisted record through the same validation
    /// as `new`. Identity, timestamp and interaction count are kept; the stored
    /// description and derived metric are only compared against fresh ones.
    pub fn from_record(
        record: WorkoutRecord,
        policy: &ValidationPolicy,
    ) -> Result<Self, ValidationError> {
        let kind = record.kind();
        let input = record.to_input();
        let validated = validate::validate(&input, policy)?;

        let (common, cached) = match record {
            WorkoutRecord::Running(r) => (r.common, r.pace_min_per_km),
            WorkoutRecord::Cycling(r) => (r.common, r.speed_km_per_h),
        };
        let core = WorkoutCore::from_common(kind, common);

        let workout = Self::build(core, validated);

        if let Some(cached) = cached {
            let (_, fresh, _) = workout.metric();
            if (cached - fresh).abs() > 1e-9 * fresh.abs().max(1.0) {
                tracing::debug!(
                    "Stored metric {} for workout {} is stale, using {}",
                    cached,
                    workout.id(),
                    fresh
                );
            }
        }

        Ok(workout)
    }

    pub fn to_record(&self) -> WorkoutRecord {
        match self {
            Workout::Running(r) => WorkoutRecord::Running(RunningRecord {
                common: r.core.to_common(),
                cadence_spm: r.cadence_spm,
                pace_min_per_km: Some(r.pace_min_per_km),
            }),
            Workout::Cycling(c) => WorkoutRecord::Cycling(CyclingRecord {
                common: c.core.to_common(),
                elevation_gain_m: c.elevation_gain_m,
                speed_km_per_h: Some(c.speed_km_per_h),
            }),
        }
    }

    fn core(&self) -> &WorkoutCore {
        match self {
            Workout::Running(r) => &r.core,
            Workout::Cycling(c) => &c.core,
        }
    }

    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Running(_) => WorkoutKind::Running,
            Workout::Cycling(_) => WorkoutKind::Cycling,
        }
    }

    /// Derived metric as `(name, value, unit)`.
    pub fn metric(&self) -> (&'static str, f64, &'static str) {
        match self {
            Workout::Running(r) => ("pace", r.pace_min_per_km, "min/km"),
            Workout::Cycling(c) => ("speed", c.speed_km_per_h, "km/h"),
        }
    }

    pub fn id(&self) -> &str {
        &self.core().id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.core().created_at
    }

    pub fn coordinates(&self) -> Coordinates {
        self.core().coordinates
    }

    pub fn distance_km(&self) -> f64 {
        self.core().distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.core().duration_min
    }

    pub fn description(&self) -> &str {
        &self.core().description
    }

    pub fn interaction_count(&self) -> u32 {
        self.core().interaction_count
    }

    pub fn select(&mut self) {
        let core = match self {
            Workout::Running(r) => &mut r.core,
            Workout::Cycling(c) => &mut c.core,
        };
        core.interaction_count = core.interaction_count.saturating_add(1);
    }
}
