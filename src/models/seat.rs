use serde::Serialize;

/// One pre-planned seat. `table_number` is "1"-"12" or the free-seating
/// marker "自由".
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SeatRow {
    pub id: i64,
    pub name: String,
    pub generation: i64,
    pub table_number: String,
    pub seat_position: i64,
}
