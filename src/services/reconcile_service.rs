use tracing::warn;

use crate::database::{attendance_repo, Store};
use crate::models::SyncStatus;
use crate::services::sheet_service::{self, SheetConfig};

#[derive(Debug, Default)]
pub struct ReconcileReport {
    pub candidates: usize,
    pub synced: usize,
    pub failed: usize,
}

/// Re-attempt the spreadsheet sync for every ledger row still marked
/// pending, oldest first, and record the outcome. This is the only path
/// that moves a row out of pending; the check-in flow itself never touches
/// the sync status.
pub async fn reconcile_pending(
    store: &Store,
    config: &SheetConfig,
) -> sqlx::Result<ReconcileReport> {
    let Some(pool) = store.pool() else {
        warn!("database not configured; nothing to reconcile");
        return Ok(ReconcileReport::default());
    };

    let pending = attendance_repo::list_pending(pool).await?;
    let mut report = ReconcileReport {
        candidates: pending.len(),
        ..ReconcileReport::default()
    };

    for record in pending {
        let ok =
            sheet_service::sync_attendance_to_sheet(config, &record.name, record.generation)
                .await;
        let status = if ok {
            report.synced += 1;
            SyncStatus::Synced
        } else {
            report.failed += 1;
            SyncStatus::Failed
        };
        attendance_repo::set_sync_status(pool, record.id, status).await?;
    }

    Ok(report)
}
