use serde::Serialize;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AttendanceRow {
    pub id: i64,
    pub name: String,
    pub generation: i64,
    pub table_number: String,
    pub seat_position: i64,
    pub synced_to_sheet: String,
    pub recorded_at: String,
}

/// Spreadsheet reconciliation state of an attendance row. New rows start
/// out pending; only the reconciliation job moves them further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    Pending,
    Synced,
    Failed,
}

impl SyncStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SyncStatus::Pending => "pending",
            SyncStatus::Synced => "synced",
            SyncStatus::Failed => "failed",
        }
    }
}
