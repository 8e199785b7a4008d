use sqlx::sqlite::SqlitePoolOptions;

use reception::database::{attendance_repo, schema, seed, Store};
use reception::services::attendance_service::{self, RegistrationError};
use reception::services::roster_service;

// One connection, kept alive: each sqlite::memory: connection is its own
// database, so the pool must never open a second one.
async fn seeded_store() -> Store {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    schema::ensure_schema(&pool).await.unwrap();
    seed::seed_roster(&pool).await.unwrap();
    Store::from_pool(pool)
}

#[tokio::test]
async fn list_members_returns_seeded_generation() {
    let store = seeded_store().await;

    let members = roster_service::list_members(&store, 27).await.unwrap();
    assert!(!members.is_empty());
    assert!(members.iter().all(|m| m.generation == 27));
    assert!(members.iter().any(|m| m.name == "荘　茗"));
}

#[tokio::test]
async fn list_members_unknown_generation_is_empty() {
    let store = seeded_store().await;

    let members = roster_service::list_members(&store, 99).await.unwrap();
    assert!(members.is_empty());
}

#[tokio::test]
async fn find_seat_matches_exact_name() {
    let store = seeded_store().await;

    let seat = roster_service::find_seat(&store, "荘茗", 27)
        .await
        .unwrap()
        .expect("seat should exist");
    assert_eq!(seat.table_number, "1");
    assert_eq!(seat.seat_position, 1);

    // The roster spells this name with an ideographic space; the chart
    // does not. Lookup is exact, so the spaced variant misses.
    let spaced = roster_service::find_seat(&store, "荘　茗", 27).await.unwrap();
    assert!(spaced.is_none());
}

#[tokio::test]
async fn register_attendance_returns_assigned_seat() {
    let store = seeded_store().await;

    let seat = attendance_service::register_attendance(&store, "荘茗", 27)
        .await
        .unwrap();
    assert_eq!(seat.table_number, "1");
    assert_eq!(seat.seat_position, 1);

    let records = attendance_service::latest_attendance(&store, 10).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "荘茗");
    assert_eq!(records[0].synced_to_sheet, "pending");
}

#[tokio::test]
async fn register_attendance_unknown_member_fails_without_ledger_write() {
    let store = seeded_store().await;

    let result = attendance_service::register_attendance(&store, "存在しない人", 27).await;
    assert!(matches!(
        result,
        Err(RegistrationError::SeatNotFound { .. })
    ));

    let records = attendance_service::latest_attendance(&store, 10).await.unwrap();
    assert!(records.is_empty());
}

// Current behavior, not an endorsement: nothing stops the same person
// checking in twice, and each call appends a fresh ledger row.
#[tokio::test]
async fn duplicate_registration_creates_two_records() {
    let store = seeded_store().await;

    let first = attendance_service::register_attendance(&store, "吉積夏帆", 27)
        .await
        .unwrap();
    let second = attendance_service::register_attendance(&store, "吉積夏帆", 27)
        .await
        .unwrap();
    assert_eq!(first.table_number, second.table_number);

    let records = attendance_service::latest_attendance(&store, 10).await.unwrap();
    assert_eq!(records.len(), 2);
    assert_ne!(records[0].id, records[1].id);
}

#[tokio::test]
async fn latest_attendance_caps_limit_at_100() {
    let store = seeded_store().await;
    let pool = store.pool().unwrap();

    for i in 0..105 {
        let name = format!("guest{}", i);
        attendance_repo::insert(
            pool,
            attendance_repo::NewAttendance {
                name: &name,
                generation: 27,
                table_number: "1",
                seat_position: 1,
            },
        )
        .await
        .unwrap();
    }

    let records = attendance_service::latest_attendance(&store, 1000).await.unwrap();
    assert_eq!(records.len(), 100);
}

#[tokio::test]
async fn latest_attendance_orders_newest_first() {
    let store = seeded_store().await;
    let pool = store.pool().unwrap();

    for name in ["first", "second", "third"] {
        attendance_repo::insert(
            pool,
            attendance_repo::NewAttendance {
                name,
                generation: 27,
                table_number: "1",
                seat_position: 1,
            },
        )
        .await
        .unwrap();
    }

    let records = attendance_service::latest_attendance(&store, 2).await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "third");
    assert_eq!(records[1].name, "second");
}

#[tokio::test]
async fn reads_degrade_to_empty_without_database() {
    let store = Store::unavailable();

    let members = roster_service::list_members(&store, 27).await.unwrap();
    assert!(members.is_empty());

    let records = attendance_service::latest_attendance(&store, 10).await.unwrap();
    assert!(records.is_empty());

    // With no store the seat lookup comes back absent, so registration
    // surfaces as SeatNotFound rather than a crash.
    let result = attendance_service::register_attendance(&store, "荘茗", 27).await;
    assert!(matches!(
        result,
        Err(RegistrationError::SeatNotFound { .. })
    ));
}
