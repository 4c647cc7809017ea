use std::collections::HashSet;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{StorageError, ValidationError};
use crate::pipeline::validate::{ValidationPolicy, WorkoutInput};
use crate::types::record::{self, WorkoutRecord};
use crate::types::workout::Workout;

/// Ordered, exclusively owned collection of workouts. Insertion order is the
/// order markers are placed and list items are shown.
#[derive(Debug, Clone, Default)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
    policy: ValidationPolicy,
}

impl WorkoutStore {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self {
            workouts: Vec::new(),
            policy,
        }
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    pub fn create(&mut self, input: &WorkoutInput) -> Result<&Workout, ValidationError> {
        self.create_at(input, Utc::now())
    }

    /// Like `create`, with an explicit creation timestamp. A rejected input leaves
    /// the store untouched.
    pub fn create_at(
        &mut self,
        input: &WorkoutInput,
        created_at: DateTime<Utc>,
    ) -> Result<&Workout, ValidationError> {
        let workout = Workout::new(input, &self.policy, self.next_id(), created_at)?;
        tracing::debug!("Created {} workout {}", workout.kind().as_str(), workout.id());
        self.workouts.push(workout);
        Ok(&self.workouts[self.workouts.len() - 1])
    }

    fn next_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.find_by_id(&id).is_none() {
                return id;
            }
        }
    }

    pub fn all(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    pub fn select(&mut self, id: &str) -> Option<&Workout> {
        let workout = self.workouts.iter_mut().find(|w| w.id() == id)?;
        workout.select();
        Some(&*workout)
    }

    pub fn serialize(&self) -> Result<String, StorageError> {
        let records: Vec<WorkoutRecord> = self.workouts.iter().map(Workout::to_record).collect();
        record::encode_blob(&records)
    }

    /// Replaces the collection with the workouts held in `blob`, re-wrapping each
    /// record into its variant. A missing or unreadable blob leaves the store
    /// empty. Records that fail validation or repeat an id are skipped. Returns
    /// the number of workouts restored.
    pub fn restore(&mut self, blob: Option<&str>) -> usize {
        self.workouts.clear();

        let Some(blob) = blob else {
            tracing::debug!("No stored workouts found");
            return 0;
        };

        let raw = match record::decode_blob(blob) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!("Ignoring stored workouts: {}", err);
                return 0;
            }
        };

        let mut seen = HashSet::new();
        for (index, value) in raw.into_iter().enumerate() {
            let record: WorkoutRecord = match serde_json::from_value(value) {
                Ok(record) => record,
                Err(err) => {
                    tracing::warn!("Skipping stored workout #{}: {}", index, err);
                    continue;
                }
            };

            let id = record.common().id.clone();
            if seen.contains(&id) {
                tracing::warn!("Skipping stored workout #{}: duplicate id {}", index, id);
                continue;
            }

            match Workout::from_record(record, &self.policy) {
                Ok(workout) => {
                    seen.insert(id);
                    self.workouts.push(workout);
                }
                Err(err) => tracing::warn!("Skipping stored workout #{}: {}", index, err),
            }
        }

        tracing::info!("Restored {} workouts", self.workouts.len());
        self.workouts.len()
    }

    pub fn clear(&mut self) {
        self.workouts.clear();
    }
}
