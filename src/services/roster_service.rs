use tracing::warn;

use crate::database::{members_repo, seats_repo, Store};
use crate::models::{MemberRow, SeatRow};

/// Members of one generation, in roster order. An unknown generation is an
/// empty list, not an error; so is a missing database.
pub async fn list_members(store: &Store, generation: i64) -> sqlx::Result<Vec<MemberRow>> {
    let Some(pool) = store.pool() else {
        warn!("database not configured; returning empty member list");
        return Ok(Vec::new());
    };
    members_repo::list_by_generation(pool, generation).await
}

/// Seat lookup by the exact name string the chart stores. Whitespace
/// matters: "荘　茗" and "荘茗" are different people as far as the chart
/// is concerned.
pub async fn find_seat(
    store: &Store,
    name: &str,
    generation: i64,
) -> sqlx::Result<Option<SeatRow>> {
    let Some(pool) = store.pool() else {
        warn!("database not configured; seat lookup for {} skipped", name);
        return Ok(None);
    };
    seats_repo::find_by_name(pool, name, generation).await
}
