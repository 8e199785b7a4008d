use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::database::{attendance_repo, Store};
use crate::models::AttendanceRow;
use crate::services::{roster_service, sheet_service};

pub const DEFAULT_LATEST_LIMIT: i64 = 10;
pub const MAX_LATEST_LIMIT: i64 = 100;

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("seat not found for {name} ({generation}期)")]
    SeatNotFound { name: String, generation: i64 },
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct AssignedSeat {
    pub table_number: String,
    pub seat_position: i64,
}

/// The check-in workflow: resolve the pre-assigned seat, append a ledger
/// row, and kick off the spreadsheet sync as a detached task.
///
/// The sync task is never awaited against the response and its outcome is
/// only visible in the logs; a failed sync leaves the row pending for the
/// reconciliation job. Registering twice appends two rows: there is no
/// uniqueness constraint and no pre-check against prior attendance.
pub async fn register_attendance(
    store: &Store,
    name: &str,
    generation: i64,
) -> Result<AssignedSeat, RegistrationError> {
    let seat = roster_service::find_seat(store, name, generation)
        .await?
        .ok_or_else(|| RegistrationError::SeatNotFound {
            name: name.to_string(),
            generation,
        })?;

    if let Some(pool) = store.pool() {
        attendance_repo::insert(
            pool,
            attendance_repo::NewAttendance {
                name,
                generation,
                table_number: &seat.table_number,
                seat_position: seat.seat_position,
            },
        )
        .await?;
    } else {
        warn!("database not configured; attendance for {} not recorded", name);
    }

    let sync_name = name.to_string();
    tokio::spawn(async move {
        let config = sheet_service::SheetConfig::from_env();
        if !sheet_service::sync_attendance_to_sheet(&config, &sync_name, generation).await {
            warn!("sheet sync failed for {} ({}期)", sync_name, generation);
        }
    });

    Ok(AssignedSeat {
        table_number: seat.table_number,
        seat_position: seat.seat_position,
    })
}

/// Newest check-ins first. Whatever the caller asks for, the limit lands
/// in [0, 100]; oversized requests are capped, not rejected.
pub async fn latest_attendance(store: &Store, limit: i64) -> sqlx::Result<Vec<AttendanceRow>> {
    let limit = limit.clamp(0, MAX_LATEST_LIMIT);
    let Some(pool) = store.pool() else {
        warn!("database not configured; returning empty attendance list");
        return Ok(Vec::new());
    };
    attendance_repo::list_latest(pool, limit).await
}

/// Full ledger, newest first. Unbounded; fine at event scale.
pub async fn all_attendance(store: &Store) -> sqlx::Result<Vec<AttendanceRow>> {
    let Some(pool) = store.pool() else {
        warn!("database not configured; returning empty attendance list");
        return Ok(Vec::new());
    };
    attendance_repo::list_all(pool).await
}
