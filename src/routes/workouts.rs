use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::app::FormSubmission;
use crate::error::{AppError, ValidationError};
use crate::pipeline::render;
use crate::state::AppState;
use crate::types::descriptor::{FormDescriptor, ListItemDescriptor, MarkerDescriptor};
use crate::types::record::WorkoutRecord;
use crate::types::workout::WorkoutKind;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/workouts",
            get(list_workouts).post(create_workout).delete(reset_workouts),
        )
        .route("/api/workouts/:id/select", post(select_workout))
        .route("/api/form/:kind", get(form_fields))
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CreateWorkoutRequest {
    #[serde(rename = "type")]
    kind: String,
    distance_km: f64,
    duration_min: f64,
    param: f64,
}

#[derive(Serialize)]
struct WorkoutResponse {
    workout: WorkoutRecord,
    list_item: ListItemDescriptor,
    marker: MarkerDescriptor,
}

async fn list_workouts(State(state): State<AppState>) -> Result<Json<Vec<ListItemDescriptor>>, AppError> {
    state.with_app(|app| Json(app.list().items().to_vec()))
}

async fn create_workout(
    State(state): State<AppState>,
    Json(req): Json<CreateWorkoutRequest>,
) -> Result<(StatusCode, Json<WorkoutResponse>), AppError> {
    let kind = WorkoutKind::from_str(&req.kind)
        .ok_or_else(|| ValidationError::UnknownKind(req.kind.clone()))?;

    let submission = FormSubmission {
        kind,
        distance_km: req.distance_km,
        duration_min: req.duration_min,
        param: req.param,
    };

    let response = state.with_app(|app| {
        app.submit(submission).map(|workout| WorkoutResponse {
            workout: workout.to_record(),
            list_item: render::to_list_item_descriptor(workout),
            marker: render::to_marker_descriptor(workout),
        })
    })??;

    Ok((StatusCode::CREATED, Json(response)))
}

async fn select_workout(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WorkoutRecord>, AppError> {
    state
        .with_app(|app| app.select_workout(&id).map(|w| w.to_record()))?
        .map(Json)
        .ok_or(AppError::NotFound(id))
}

async fn reset_workouts(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.with_app(|app| app.reset())??;
    Ok(StatusCode::NO_CONTENT)
}

async fn form_fields(Path(kind): Path<String>) -> Result<Json<FormDescriptor>, AppError> {
    let kind = WorkoutKind::from_str(&kind)
        .ok_or_else(|| ValidationError::UnknownKind(kind.clone()))?;
    Ok(Json(render::form_fields(kind)))
}
