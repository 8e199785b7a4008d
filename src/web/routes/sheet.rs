use axum::{response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;

use crate::services::sheet_service::{self, SheetConfig};

#[derive(Debug, Deserialize)]
pub struct SyncBody {
    name: String,
    generation: i64,
}

// Manual re-sync for one person. Sync failure is a payload value, not an
// error status: the sheet is advisory.
pub async fn sync_handler(Json(body): Json<SyncBody>) -> impl IntoResponse {
    let config = SheetConfig::from_env();
    let synced = sheet_service::sync_attendance_to_sheet(&config, &body.name, body.generation).await;
    Json(json!({ "synced": synced }))
}
