use std::sync::{Arc, Mutex};

use crate::app::{App, AppSettings};
use crate::collab::{FileStorage, FixedPosition, MemoryStorage, RecordedList, RecordedMap, Storage};
use crate::config::Config;
use crate::error::AppError;

pub type ServerApp = App<Box<dyn Storage>, RecordedMap, RecordedList>;

/// Shared handle to the single app instance. The mutex runs every event to
/// completion before the next one starts.
#[derive(Clone)]
pub struct AppState {
    app: Arc<Mutex<ServerApp>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let storage: Box<dyn Storage> = match &config.storage_dir {
            Some(dir) => {
                tracing::info!("Persisting workouts under {}", dir.display());
                Box::new(FileStorage::new(dir.clone()))
            }
            None => {
                tracing::info!("Persisting workouts in memory");
                Box::new(MemoryStorage::new())
            }
        };
        Self::with_storage(config, storage)
    }

    /// Builds the app around `storage`, restores persisted workouts and requests
    /// the boot position.
    pub fn with_storage(config: Config, storage: Box<dyn Storage>) -> Self {
        let mut app = App::new(
            AppSettings::from(&config),
            storage,
            RecordedMap::new(),
            RecordedList::new(),
        );
        app.boot();
        if app.request_position(&FixedPosition(config.home_position)).is_err() {
            tracing::info!("Waiting for a position before enabling the map");
        }

        Self {
            app: Arc::new(Mutex::new(app)),
        }
    }

    pub fn with_app<R>(&self, f: impl FnOnce(&mut ServerApp) -> R) -> Result<R, AppError> {
        let mut app = self
            .app
            .lock()
            .map_err(|_| AppError::Internal("app state poisoned".to_string()))?;
        Ok(f(&mut app))
    }
}
