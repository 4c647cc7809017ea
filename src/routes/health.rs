use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::app::Phase;
use crate::error::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

async fn health(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let (map_ready, workouts) = state.with_app(|app| (app.phase() == Phase::Ready, app.store().len()))?;
    Ok(Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "map_ready": map_ready,
        "workouts": workouts
    })))
}
