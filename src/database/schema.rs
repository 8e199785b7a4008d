use sqlx::SqlitePool;

// recorded_at keeps millisecond precision; CURRENT_TIMESTAMP only has
// seconds and would make newest-first ordering collapse within a burst
// of check-ins.
pub const SQL_CREATE_MEMBERS: &str = r#"
CREATE TABLE IF NOT EXISTS members (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL,
  generation INTEGER NOT NULL,
  created_at TEXT NOT NULL DEFAULT (datetime('now'))
)
"#;

pub const SQL_CREATE_SEATS: &str = r#"
CREATE TABLE IF NOT EXISTS seats (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL,
  generation INTEGER NOT NULL,
  table_number TEXT NOT NULL,
  seat_position INTEGER NOT NULL,
  created_at TEXT NOT NULL DEFAULT (datetime('now'))
)
"#;

pub const SQL_CREATE_ATTENDANCE: &str = r#"
CREATE TABLE IF NOT EXISTS attendance (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL,
  generation INTEGER NOT NULL,
  table_number TEXT NOT NULL,
  seat_position INTEGER NOT NULL,
  synced_to_sheet TEXT NOT NULL DEFAULT 'pending'
    CHECK (synced_to_sheet IN ('pending', 'synced', 'failed')),
  recorded_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
)
"#;

// The (name, generation) index on seats is non-unique: the seat chart is
// hand-maintained and can hold duplicate assignments. Lookups take the
// first match.
pub const SQL_CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_members_generation ON members(generation)",
    "CREATE INDEX IF NOT EXISTS idx_seats_name_generation ON seats(name, generation)",
    "CREATE INDEX IF NOT EXISTS idx_attendance_recorded_at ON attendance(recorded_at)",
];

pub async fn ensure_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::query(SQL_CREATE_MEMBERS).execute(pool).await?;
    sqlx::query(SQL_CREATE_SEATS).execute(pool).await?;
    sqlx::query(SQL_CREATE_ATTENDANCE).execute(pool).await?;
    for sql in SQL_CREATE_INDEXES {
        sqlx::query(sql).execute(pool).await?;
    }
    Ok(())
}
