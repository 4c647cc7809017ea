use axum::{extract::State, http::StatusCode, routing::{get, post}, Json, Router};
use serde::{Deserialize, Serialize};

use crate::app::{FormState, Phase};
use crate::error::AppError;
use crate::state::AppState;
use crate::types::descriptor::MarkerDescriptor;
use crate::types::workout::Coordinates;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/map", get(map_view))
        .route("/api/map/click", post(click))
        .route("/api/position", post(position))
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl From<LatLng> for Coordinates {
    fn from(p: LatLng) -> Self {
        Coordinates::new(p.lat, p.lng)
    }
}

#[derive(Serialize)]
struct MapResponse {
    ready: bool,
    center: Option<Coordinates>,
    zoom: Option<u8>,
    pending: Option<Coordinates>,
    markers: Vec<MarkerDescriptor>,
}

async fn map_view(State(state): State<AppState>) -> Result<Json<MapResponse>, AppError> {
    state.with_app(|app| {
        let pending = match app.form_state() {
            FormState::FormOpen { pending } => Some(pending),
            FormState::Idle => None,
        };
        Json(MapResponse {
            ready: app.phase() == Phase::Ready,
            center: app.map().center(),
            zoom: app.map().zoom(),
            pending,
            markers: app.map().markers().to_vec(),
        })
    })
}

async fn click(
    State(state): State<AppState>,
    Json(point): Json<LatLng>,
) -> Result<StatusCode, AppError> {
    let coordinates = Coordinates::from(point);
    state.with_app(|app| app.pick_location(coordinates))??;
    tracing::debug!("Form opened at {}, {}", coordinates.lat, coordinates.lng);
    Ok(StatusCode::NO_CONTENT)
}

async fn position(
    State(state): State<AppState>,
    Json(point): Json<LatLng>,
) -> Result<StatusCode, AppError> {
    state.with_app(|app| app.position_acquired(point.into()))??;
    Ok(StatusCode::NO_CONTENT)
}
