use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StorageError;
use crate::pipeline::validate::WorkoutInput;
use crate::types::workout::{Coordinates, WorkoutKind};

pub const BLOB_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonRecord {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub coordinates: Coordinates,
    pub distance_km: f64,
    pub duration_min: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub interaction_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunningRecord {
    #[serde(flatten)]
    pub common: CommonRecord,
    pub cadence_spm: u32,
    #[serde(default)]
    pub pace_min_per_km: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CyclingRecord {
    #[serde(flatten)]
    pub common: CommonRecord,
    pub elevation_gain_m: f64,
    #[serde(default)]
    pub speed_km_per_h: Option<f64>,
}

/// Flat, plain-data form of a workout as it sits in the persisted blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutRecord {
    Running(RunningRecord),
    Cycling(CyclingRecord),
}

impl WorkoutRecord {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutRecord::Running(_) => WorkoutKind::Running,
            WorkoutRecord::Cycling(_) => WorkoutKind::Cycling,
        }
    }

    pub fn common(&self) -> &CommonRecord {
        match self {
            WorkoutRecord::Running(r) => &r.common,
            WorkoutRecord::Cycling(c) => &c.common,
        }
    }

    pub fn to_input(&self) -> WorkoutInput {
        let common = self.common();
        let param = match self {
            WorkoutRecord::Running(r) => r.cadence_spm as f64,
            WorkoutRecord::Cycling(c) => c.elevation_gain_m,
        };
        WorkoutInput {
            kind: self.kind(),
            coordinates: common.coordinates,
            distance_km: common.distance_km,
            duration_min: common.duration_min,
            param,
        }
    }
}

#[derive(Serialize)]
struct BlobRef<'a> {
    version: u32,
    workouts: &'a [WorkoutRecord],
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredBlob {
    Versioned { version: u32, workouts: Vec<Value> },
    Bare(Vec<Value>),
}

pub fn encode_blob(records: &[WorkoutRecord]) -> Result<String, StorageError> {
    serde_json::to_string(&BlobRef {
        version: BLOB_VERSION,
        workouts: records,
    })
    .map_err(StorageError::Encode)
}

/// Splits a blob into raw records so that each one can be checked on its own.
pub fn decode_blob(blob: &str) -> Result<Vec<Value>, StorageError> {
    let stored: StoredBlob = serde_json::from_str(blob).map_err(StorageError::Decode)?;
    match stored {
        StoredBlob::Versioned { version, workouts } if version == BLOB_VERSION => Ok(workouts),
        StoredBlob::Versioned { version, .. } => Err(StorageError::UnsupportedVersion(version)),
        StoredBlob::Bare(workouts) => Ok(workouts),
    }
}
