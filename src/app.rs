use crate::collab::{Geolocator, ListView, MapView, Storage};
use crate::config::Config;
use crate::error::{AppError, GeolocationError};
use crate::pipeline::render;
use crate::pipeline::validate::{ValidationPolicy, WorkoutInput};
use crate::store::WorkoutStore;
use crate::types::workout::{Coordinates, Workout, WorkoutKind};

/// Boot progress. Runs independently of the entry form cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Ready,
}

/// Entry form cycle. `Idle` is where the app waits for a location pick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormState {
    Idle,
    FormOpen { pending: Coordinates },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormSubmission {
    pub kind: WorkoutKind,
    pub distance_km: f64,
    pub duration_min: f64,
    pub param: f64,
}

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub storage_key: String,
    pub map_zoom: u8,
    pub policy: ValidationPolicy,
}

impl From<&Config> for AppSettings {
    fn from(config: &Config) -> Self {
        Self {
            storage_key: config.storage_key.clone(),
            map_zoom: config.map_zoom,
            policy: ValidationPolicy {
                allow_negative_elevation: config.allow_negative_elevation,
            },
        }
    }
}

/// Wires location picks and form submissions to the store, the views and
/// persistence. All side effects go through the collaborators it owns.
pub struct App<S, M, L> {
    store: WorkoutStore,
    storage: S,
    map: M,
    list: L,
    settings: AppSettings,
    phase: Phase,
    form: FormState,
}

impl<S: Storage, M: MapView, L: ListView> App<S, M, L> {
    pub fn new(settings: AppSettings, storage: S, map: M, list: L) -> Self {
        Self {
            store: WorkoutStore::new(settings.policy),
            storage,
            map,
            list,
            settings,
            phase: Phase::Uninitialized,
            form: FormState::Idle,
        }
    }

    /// Restores persisted workouts and lists them. Markers wait for the map.
    pub fn boot(&mut self) -> usize {
        let blob = match self.storage.read(&self.settings.storage_key) {
            Ok(blob) => blob,
            Err(err) => {
                tracing::warn!("Persisted workouts unavailable: {}", err);
                None
            }
        };

        let restored = self.store.restore(blob.as_deref());
        for workout in self.store.all() {
            self.list.show(render::to_list_item_descriptor(workout));
        }
        restored
    }

    pub fn request_position(&mut self, geolocator: &impl Geolocator) -> Result<(), GeolocationError> {
        let result = geolocator
            .request_position()
            .and_then(|coordinates| self.position_acquired(coordinates));
        if let Err(err) = &result {
            tracing::warn!("Map stays inactive: {}", err);
        }
        result
    }

    /// Loads the map at `coordinates`. The first success places a marker for
    /// every stored workout; later ones only move the view.
    pub fn position_acquired(&mut self, coordinates: Coordinates) -> Result<(), GeolocationError> {
        if !coordinates.lat.is_finite() || !coordinates.lng.is_finite() {
            return Err(GeolocationError::Unavailable(format!(
                "invalid position {}, {}",
                coordinates.lat, coordinates.lng
            )));
        }

        tracing::info!("Map centered at {}, {}", coordinates.lat, coordinates.lng);
        self.map.pan_to(coordinates, self.settings.map_zoom);

        if self.phase == Phase::Uninitialized {
            for workout in self.store.all() {
                self.map.place_marker(&render::to_marker_descriptor(workout));
            }
            self.phase = Phase::Ready;
        }
        Ok(())
    }

    /// Opens the entry form for `coordinates`. A pick while the form is open
    /// replaces the pending location.
    pub fn pick_location(&mut self, coordinates: Coordinates) -> Result<(), AppError> {
        if self.phase != Phase::Ready {
            return Err(AppError::Conflict("map is not loaded".to_string()));
        }
        self.form = FormState::FormOpen { pending: coordinates };
        Ok(())
    }

    /// Creates a workout at the pending location, renders it and persists the
    /// collection. Invalid input keeps the form open.
    pub fn submit(&mut self, submission: FormSubmission) -> Result<&Workout, AppError> {
        let FormState::FormOpen { pending } = self.form else {
            return Err(AppError::Conflict("no location selected".to_string()));
        };

        let input = WorkoutInput {
            kind: submission.kind,
            coordinates: pending,
            distance_km: submission.distance_km,
            duration_min: submission.duration_min,
            param: submission.param,
        };

        let (id, marker, item) = {
            let workout = self.store.create(&input)?;
            (
                workout.id().to_string(),
                render::to_marker_descriptor(workout),
                render::to_list_item_descriptor(workout),
            )
        };

        self.map.place_marker(&marker);
        self.list.show(item);
        self.persist();
        self.form = FormState::Idle;

        tracing::info!("Recorded {} workout {}", submission.kind.as_str(), id);
        self.store
            .find_by_id(&id)
            .ok_or_else(|| AppError::Internal(format!("workout {} vanished after create", id)))
    }

    /// Moves the map to a workout and counts the interaction. `None` when the id
    /// is unknown.
    pub fn select_workout(&mut self, id: &str) -> Option<&Workout> {
        let coordinates = self.store.select(id)?.coordinates();
        if self.phase == Phase::Ready {
            self.map.pan_to(coordinates, self.settings.map_zoom);
        }
        self.persist();
        self.store.find_by_id(id)
    }

    /// Drops every workout, persisted and in memory.
    pub fn reset(&mut self) -> Result<(), AppError> {
        self.storage.clear(&self.settings.storage_key)?;
        self.store.clear();
        self.map.clear_markers();
        self.list.clear();
        self.form = FormState::Idle;
        tracing::info!("All workouts cleared");
        Ok(())
    }

    /// Writes the whole collection. Failures are logged, never raised.
    pub fn persist(&self) -> bool {
        let written = self
            .store
            .serialize()
            .and_then(|blob| self.storage.write(&self.settings.storage_key, &blob));
        match written {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("Could not persist workouts: {}", err);
                false
            }
        }
    }

    pub fn store(&self) -> &WorkoutStore {
        &self.store
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn form_state(&self) -> FormState {
        self.form
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }
}
