use chrono::{TimeZone, Utc};
use mapty_rs::pipeline::render::{form_fields, to_list_item_descriptor, to_marker_descriptor};
use mapty_rs::pipeline::validate::{ValidationPolicy, WorkoutInput};
use mapty_rs::types::workout::{Coordinates, Workout, WorkoutKind};

fn workout(kind: WorkoutKind, distance_km: f64, duration_min: f64, param: f64) -> Workout {
    let input = WorkoutInput {
        kind,
        coordinates: Coordinates::new(39.0, -12.0),
        distance_km,
        duration_min,
        param,
    };
    let created_at = Utc.with_ymd_and_hms(2024, 4, 14, 10, 0, 0).unwrap();
    Workout::new(&input, &ValidationPolicy::default(), format!("{}-1", kind.as_str()), created_at)
        .expect("valid workout")
}

#[test]
fn running_list_item_shows_pace_and_cadence() {
    let item = to_list_item_descriptor(&workout(WorkoutKind::Running, 5.2, 24.0, 178.0));

    assert_eq!(item.workout_id, "running-1");
    assert_eq!(item.css_class, "workout workout--running");
    assert_eq!(item.title, "Running on April 14");

    let rows: Vec<(&str, &str)> = item.details.iter().map(|d| (d.value.as_str(), d.unit)).collect();
    assert_eq!(
        rows,
        vec![("5.2", "km"), ("24", "min"), ("4.6", "min/km"), ("178", "spm")]
    );
    assert_eq!(item.details[0].icon, "🏃‍♂️");
}

#[test]
fn cycling_list_item_shows_speed_and_elevation() {
    let item = to_list_item_descriptor(&workout(WorkoutKind::Cycling, 27.0, 95.0, 523.0));

    assert_eq!(item.css_class, "workout workout--cycling");
    let rows: Vec<(&str, &str)> = item.details.iter().map(|d| (d.value.as_str(), d.unit)).collect();
    assert_eq!(
        rows,
        vec![("27", "km"), ("95", "min"), ("17.1", "km/h"), ("523", "m")]
    );
    assert_eq!(item.details[0].icon, "🚴‍♀️");
    assert_eq!(item.details[3].icon, "⛰");
}

#[test]
fn marker_carries_popup_style_and_label() {
    let marker = to_marker_descriptor(&workout(WorkoutKind::Cycling, 27.0, 95.0, 523.0));

    assert_eq!(marker.coordinates, Coordinates::new(39.0, -12.0));
    assert_eq!(marker.popup_class, "cycling-popup");
    assert_eq!(marker.content, "🚴‍♀️ Cycling on April 14");
    assert!(!marker.auto_close);
    assert!(!marker.close_on_click);
    assert_eq!((marker.min_width, marker.max_width), (100, 250));
}

#[test]
fn form_swaps_the_type_specific_field() {
    let running: Vec<&str> = form_fields(WorkoutKind::Running).fields.iter().map(|f| f.name).collect();
    let cycling: Vec<&str> = form_fields(WorkoutKind::Cycling).fields.iter().map(|f| f.name).collect();

    assert_eq!(running, vec!["distance", "duration", "cadence"]);
    assert_eq!(cycling, vec!["distance", "duration", "elevation"]);
}
