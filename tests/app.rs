use mapty_rs::app::{App, AppSettings, FormState, FormSubmission, Phase};
use mapty_rs::collab::{FixedPosition, MemoryStorage, RecordedList, RecordedMap, Storage};
use mapty_rs::error::{AppError, GeolocationError, StorageError, ValidationError};
use mapty_rs::pipeline::validate::ValidationPolicy;
use mapty_rs::types::workout::{Coordinates, WorkoutKind};

const KEY: &str = "workouts";

fn settings() -> AppSettings {
    AppSettings {
        storage_key: KEY.to_string(),
        map_zoom: 13,
        policy: ValidationPolicy::default(),
    }
}

fn booted<S: Storage>(storage: S) -> App<S, RecordedMap, RecordedList> {
    let mut app = App::new(settings(), storage, RecordedMap::new(), RecordedList::new());
    app.boot();
    app.request_position(&FixedPosition(Some(Coordinates::new(38.7, -9.1))))
        .expect("position");
    app
}

fn run() -> FormSubmission {
    FormSubmission {
        kind: WorkoutKind::Running,
        distance_km: 5.2,
        duration_min: 24.0,
        param: 178.0,
    }
}

fn ride() -> FormSubmission {
    FormSubmission {
        kind: WorkoutKind::Cycling,
        distance_km: 27.0,
        duration_min: 95.0,
        param: 523.0,
    }
}

struct FullStorage;

impl Storage for FullStorage {
    fn write(&self, _key: &str, _blob: &str) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            "quota exceeded",
        )))
    }

    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn clear(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

#[test]
fn boot_without_position_stays_uninitialized() {
    let mut app = App::new(settings(), MemoryStorage::new(), RecordedMap::new(), RecordedList::new());
    app.boot();

    let err = app.request_position(&FixedPosition(None)).expect_err("denied");
    assert_eq!(err, GeolocationError::Denied);
    assert_eq!(app.phase(), Phase::Uninitialized);
    assert!(matches!(
        app.pick_location(Coordinates::new(1.0, 2.0)),
        Err(AppError::Conflict(_))
    ));
}

#[test]
fn pick_then_submit_renders_and_persists() {
    let storage = MemoryStorage::new();
    let mut app = booted(storage.clone());
    assert_eq!(app.phase(), Phase::Ready);
    assert_eq!(app.map().zoom(), Some(13));

    let spot = Coordinates::new(39.0, -12.0);
    app.pick_location(spot).expect("pick");
    assert_eq!(app.form_state(), FormState::FormOpen { pending: spot });

    let id = app.submit(run()).expect("submit").id().to_string();

    assert_eq!(app.form_state(), FormState::Idle);
    assert_eq!(app.map().markers().len(), 1);
    assert_eq!(app.map().markers()[0].coordinates, spot);
    assert_eq!(app.list().items()[0].workout_id, id);

    let blob = storage.read(KEY).expect("read").expect("blob written");
    assert!(blob.contains(&id));
}

#[test]
fn invalid_submission_keeps_form_open() {
    let mut app = booted(MemoryStorage::new());
    let spot = Coordinates::new(39.0, -12.0);
    app.pick_location(spot).expect("pick");

    let err = app
        .submit(FormSubmission {
            distance_km: 0.0,
            ..run()
        })
        .expect_err("invalid");

    assert!(matches!(err, AppError::Validation(ValidationError::NotPositive("distance"))));
    assert_eq!(app.form_state(), FormState::FormOpen { pending: spot });
    assert!(app.store().is_empty());
    assert!(app.map().markers().is_empty());
}

#[test]
fn submit_without_location_is_rejected() {
    let mut app = booted(MemoryStorage::new());
    assert!(matches!(app.submit(run()), Err(AppError::Conflict(_))));
}

#[test]
fn list_shows_newest_first() {
    let mut app = booted(MemoryStorage::new());
    app.pick_location(Coordinates::new(39.0, -12.0)).expect("pick");
    app.submit(run()).expect("run");
    app.pick_location(Coordinates::new(39.1, -12.1)).expect("pick");
    app.submit(ride()).expect("ride");

    let kinds: Vec<WorkoutKind> = app.list().items().iter().map(|i| i.kind).collect();
    assert_eq!(kinds, vec![WorkoutKind::Cycling, WorkoutKind::Running]);

    let markers: Vec<&str> = app.map().markers().iter().map(|m| m.popup_class.as_str()).collect();
    assert_eq!(markers, vec!["running-popup", "cycling-popup"]);
}

#[test]
fn restart_restores_workouts_in_order() {
    let storage = MemoryStorage::new();
    let mut first = booted(storage.clone());
    first.pick_location(Coordinates::new(39.0, -12.0)).expect("pick");
    first.submit(run()).expect("run");
    first.pick_location(Coordinates::new(39.1, -12.1)).expect("pick");
    first.submit(ride()).expect("ride");
    let before = first.store().all().to_vec();

    let mut second = App::new(settings(), storage, RecordedMap::new(), RecordedList::new());
    assert_eq!(second.boot(), 2);
    assert_eq!(second.store().all(), before.as_slice());
    assert_eq!(second.list().items().len(), 2);
    // Markers appear only once the map is loaded.
    assert!(second.map().markers().is_empty());

    second
        .request_position(&FixedPosition(Some(Coordinates::new(38.7, -9.1))))
        .expect("position");
    assert_eq!(second.map().markers().len(), 2);

    second.position_acquired(Coordinates::new(40.0, -8.0)).expect("second fix");
    assert_eq!(second.map().markers().len(), 2);
}

#[test]
fn select_pans_and_counts_after_restore() {
    let storage = MemoryStorage::new();
    let mut first = booted(storage.clone());
    let spot = Coordinates::new(39.0, -12.0);
    first.pick_location(spot).expect("pick");
    let id = first.submit(ride()).expect("ride").id().to_string();

    let mut second = booted(storage.clone());
    let selected = second.select_workout(&id).expect("known id");
    assert_eq!(selected.interaction_count(), 1);
    assert_eq!(second.map().center(), Some(spot));

    let third = booted(storage);
    assert_eq!(third.store().all()[0].interaction_count(), 1);
}

#[test]
fn select_unknown_id_is_none() {
    let mut app = booted(MemoryStorage::new());
    assert!(app.select_workout("nope").is_none());
}

#[test]
fn write_failure_is_not_fatal() {
    let mut app = booted(FullStorage);
    app.pick_location(Coordinates::new(39.0, -12.0)).expect("pick");

    assert!(app.submit(run()).is_ok());
    assert_eq!(app.store().len(), 1);
    assert!(!app.persist());
}

#[test]
fn reset_clears_everything() {
    let storage = MemoryStorage::new();
    let mut app = booted(storage.clone());
    app.pick_location(Coordinates::new(39.0, -12.0)).expect("pick");
    app.submit(run()).expect("run");

    app.reset().expect("reset");

    assert!(app.store().is_empty());
    assert!(app.map().markers().is_empty());
    assert!(app.list().items().is_empty());
    assert_eq!(storage.read(KEY).expect("read"), None);
}
