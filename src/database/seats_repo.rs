use sqlx::SqlitePool;

use crate::models::SeatRow;

// Exact string match on name, no trimming or normalization. If the chart
// holds duplicate assignments for one person the first row wins.
pub const SQL_FIND_BY_NAME: &str = r#"
SELECT
  id,
  name,
  generation,
  table_number,
  seat_position
FROM seats
WHERE name = ?1
  AND generation = ?2
LIMIT 1
"#;

pub async fn find_by_name(
    pool: &SqlitePool,
    name: &str,
    generation: i64,
) -> sqlx::Result<Option<SeatRow>> {
    sqlx::query_as::<_, SeatRow>(SQL_FIND_BY_NAME)
        .bind(name)
        .bind(generation)
        .fetch_optional(pool)
        .await
}
