use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::services::attendance_service::{self, RegistrationError};
use crate::web::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterBody {
    name: String,
    generation: i64,
}

pub async fn register_handler(
    State(state): State<AppState>,
    Json(body): Json<RegisterBody>,
) -> impl IntoResponse {
    match attendance_service::register_attendance(&state.store, &body.name, body.generation).await
    {
        Ok(seat) => Json(seat).into_response(),
        Err(e @ RegistrationError::SeatNotFound { .. }) => {
            // The only failure class the client gets to see; the form
            // renders this message as-is.
            (StatusCode::NOT_FOUND, Json(json!({ "error": e.to_string() }))).into_response()
        }
        Err(RegistrationError::Database(e)) => {
            warn!(
                "registration failed for {} ({}期): {}",
                body.name, body.generation, e
            );
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LatestQuery {
    limit: Option<i64>,
}

pub async fn latest_attendance_handler(
    State(state): State<AppState>,
    Query(query): Query<LatestQuery>,
) -> impl IntoResponse {
    let limit = query
        .limit
        .unwrap_or(attendance_service::DEFAULT_LATEST_LIMIT);

    match attendance_service::latest_attendance(&state.store, limit).await {
        Ok(records) => Json(records).into_response(),
        Err(e) => {
            warn!("latest attendance query failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn all_attendance_handler(State(state): State<AppState>) -> impl IntoResponse {
    match attendance_service::all_attendance(&state.store).await {
        Ok(records) => Json(records).into_response(),
        Err(e) => {
            warn!("full attendance query failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
