use crate::types::descriptor::{
    DetailDescriptor, FormDescriptor, FormFieldDescriptor, ListItemDescriptor, MarkerDescriptor,
};
use crate::types::workout::{Workout, WorkoutKind};

const RUNNING_ICON: &str = "🏃‍♂️";
const CYCLING_ICON: &str = "🚴‍♀️";
const DURATION_ICON: &str = "⏱";
const METRIC_ICON: &str = "⚡️";
const CADENCE_ICON: &str = "🦶🏼";
const ELEVATION_ICON: &str = "⛰";

const POPUP_MAX_WIDTH: u32 = 250;
const POPUP_MIN_WIDTH: u32 = 100;

pub fn to_marker_descriptor(workout: &Workout) -> MarkerDescriptor {
    let icon = match workout {
        Workout::Running(_) => RUNNING_ICON,
        Workout::Cycling(_) => CYCLING_ICON,
    };

    MarkerDescriptor {
        workout_id: workout.id().to_string(),
        coordinates: workout.coordinates(),
        popup_class: format!("{}-popup", workout.kind().as_str()),
        content: format!("{} {}", icon, workout.description()),
        max_width: POPUP_MAX_WIDTH,
        min_width: POPUP_MIN_WIDTH,
        auto_close: false,
        close_on_click: false,
    }
}

pub fn to_list_item_descriptor(workout: &Workout) -> ListItemDescriptor {
    let (icon, metric, param) = match workout {
        Workout::Running(r) => (
            RUNNING_ICON,
            detail(METRIC_ICON, format!("{:.1}", r.pace_min_per_km()), "min/km"),
            detail(CADENCE_ICON, r.cadence_spm().to_string(), "spm"),
        ),
        Workout::Cycling(c) => (
            CYCLING_ICON,
            detail(METRIC_ICON, format!("{:.1}", c.speed_km_per_h()), "km/h"),
            detail(ELEVATION_ICON, c.elevation_gain_m().to_string(), "m"),
        ),
    };

    ListItemDescriptor {
        workout_id: workout.id().to_string(),
        kind: workout.kind(),
        css_class: format!("workout workout--{}", workout.kind().as_str()),
        title: workout.description().to_string(),
        details: vec![
            detail(icon, workout.distance_km().to_string(), "km"),
            detail(DURATION_ICON, workout.duration_min().to_string(), "min"),
            metric,
            param,
        ],
    }
}

/// Entry form fields for a workout type. Switching type swaps the last field.
pub fn form_fields(kind: WorkoutKind) -> FormDescriptor {
    let param = match kind {
        WorkoutKind::Running => FormFieldDescriptor {
            name: "cadence",
            label: "Cadence",
            unit: "step/min",
            allows_zero: false,
        },
        WorkoutKind::Cycling => FormFieldDescriptor {
            name: "elevation",
            label: "Elev Gain",
            unit: "meters",
            allows_zero: true,
        },
    };

    FormDescriptor {
        kind,
        fields: vec![
            FormFieldDescriptor {
                name: "distance",
                label: "Distance",
                unit: "km",
                allows_zero: false,
            },
            FormFieldDescriptor {
                name: "duration",
                label: "Duration",
                unit: "min",
                allows_zero: false,
            },
            param,
        ],
    }
}

fn detail(icon: &'static str, value: String, unit: &'static str) -> DetailDescriptor {
    DetailDescriptor { icon, value, unit }
}
