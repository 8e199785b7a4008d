use sqlx::SqlitePool;

use crate::models::{AttendanceRow, SyncStatus};

pub const SQL_INSERT: &str = r#"
INSERT INTO attendance (
  name,
  generation,
  table_number,
  seat_position,
  synced_to_sheet
) VALUES (?1, ?2, ?3, ?4, 'pending')
"#;

// recorded_at only has millisecond precision; id breaks ties so that
// newest-first stays insertion order within the same millisecond.
pub const SQL_LIST_LATEST: &str = r#"
SELECT
  id,
  name,
  generation,
  table_number,
  seat_position,
  synced_to_sheet,
  recorded_at
FROM attendance
ORDER BY recorded_at DESC, id DESC
LIMIT ?1
"#;

pub const SQL_LIST_ALL: &str = r#"
SELECT
  id,
  name,
  generation,
  table_number,
  seat_position,
  synced_to_sheet,
  recorded_at
FROM attendance
ORDER BY recorded_at DESC, id DESC
"#;

pub const SQL_LIST_PENDING: &str = r#"
SELECT
  id,
  name,
  generation,
  table_number,
  seat_position,
  synced_to_sheet,
  recorded_at
FROM attendance
WHERE synced_to_sheet = 'pending'
ORDER BY recorded_at ASC, id ASC
"#;

pub const SQL_SET_SYNC_STATUS: &str = r#"
UPDATE attendance
SET synced_to_sheet = ?2
WHERE id = ?1
"#;

pub struct NewAttendance<'a> {
    pub name: &'a str,
    pub generation: i64,
    pub table_number: &'a str,
    pub seat_position: i64,
}

pub async fn insert(pool: &SqlitePool, record: NewAttendance<'_>) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT)
        .bind(record.name)
        .bind(record.generation)
        .bind(record.table_number)
        .bind(record.seat_position)
        .execute(pool)
        .await?;
    Ok(res.last_insert_rowid())
}

pub async fn list_latest(pool: &SqlitePool, limit: i64) -> sqlx::Result<Vec<AttendanceRow>> {
    sqlx::query_as::<_, AttendanceRow>(SQL_LIST_LATEST)
        .bind(limit)
        .fetch_all(pool)
        .await
}

pub async fn list_all(pool: &SqlitePool) -> sqlx::Result<Vec<AttendanceRow>> {
    sqlx::query_as::<_, AttendanceRow>(SQL_LIST_ALL)
        .fetch_all(pool)
        .await
}

pub async fn list_pending(pool: &SqlitePool) -> sqlx::Result<Vec<AttendanceRow>> {
    sqlx::query_as::<_, AttendanceRow>(SQL_LIST_PENDING)
        .fetch_all(pool)
        .await
}

pub async fn set_sync_status(
    pool: &SqlitePool,
    id: i64,
    status: SyncStatus,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_SET_SYNC_STATUS)
        .bind(id)
        .bind(status.as_str())
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
