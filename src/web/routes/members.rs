use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::warn;

use crate::models::MemberRow;
use crate::services::roster_service;
use crate::web::AppState;

#[derive(Debug, Deserialize)]
pub struct MembersQuery {
    generation: Option<i64>,
}

pub async fn list_members_handler(
    State(state): State<AppState>,
    Query(query): Query<MembersQuery>,
) -> impl IntoResponse {
    let Some(generation) = query.generation else {
        return (StatusCode::BAD_REQUEST, Json(Vec::<MemberRow>::new())).into_response();
    };

    match roster_service::list_members(&state.store, generation).await {
        Ok(members) => Json(members).into_response(),
        Err(e) => {
            warn!("member list failed for {}期: {}", generation, e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
