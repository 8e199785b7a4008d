use sqlx::SqlitePool;

use crate::models::MemberRow;

pub const SQL_LIST_BY_GENERATION: &str = r#"
SELECT
  id,
  name,
  generation
FROM members
WHERE generation = ?1
ORDER BY id ASC
"#;

pub async fn list_by_generation(
    pool: &SqlitePool,
    generation: i64,
) -> sqlx::Result<Vec<MemberRow>> {
    sqlx::query_as::<_, MemberRow>(SQL_LIST_BY_GENERATION)
        .bind(generation)
        .fetch_all(pool)
        .await
}
