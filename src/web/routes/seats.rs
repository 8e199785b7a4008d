use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::warn;

use crate::services::roster_service;
use crate::web::AppState;

#[derive(Debug, Deserialize)]
pub struct SeatQuery {
    name: Option<String>,
    generation: Option<i64>,
}

pub async fn find_seat_handler(
    State(state): State<AppState>,
    Query(query): Query<SeatQuery>,
) -> impl IntoResponse {
    let (Some(name), Some(generation)) = (query.name.as_deref(), query.generation) else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    match roster_service::find_seat(&state.store, name, generation).await {
        Ok(Some(seat)) => Json(seat).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            warn!("seat lookup failed for {} ({}期): {}", name, generation, e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
