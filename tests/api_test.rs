use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use tokio::net::TcpListener;

use reception::database::{schema, seed, Store};
use reception::web::{build_router, AppState};

async fn start_app() -> String {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    schema::ensure_schema(&pool).await.unwrap();
    seed::seed_roster(&pool).await.unwrap();

    let app = build_router(AppState {
        store: Store::from_pool(pool),
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn members_endpoint_filters_by_generation() {
    let base = start_app().await;
    let client = reqwest::Client::new();

    let members: Vec<Value> = client
        .get(format!("{}/api/members?generation=28", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!members.is_empty());
    assert!(members.iter().all(|m| m["generation"] == 28));

    let missing_param = client
        .get(format!("{}/api/members", base))
        .send()
        .await
        .unwrap();
    assert_eq!(missing_param.status(), 400);
}

#[tokio::test]
async fn register_endpoint_returns_seat_or_not_found() {
    let base = start_app().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/attendance", base))
        .json(&serde_json::json!({ "name": "荘茗", "generation": 27 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let seat: Value = resp.json().await.unwrap();
    assert_eq!(seat["table_number"], "1");
    assert_eq!(seat["seat_position"], 1);

    let resp = client
        .post(format!("{}/api/attendance", base))
        .json(&serde_json::json!({ "name": "存在しない人", "generation": 27 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("存在しない人"));
}

#[tokio::test]
async fn latest_endpoint_defaults_and_caps() {
    let base = start_app().await;
    let client = reqwest::Client::new();

    for _ in 0..12 {
        client
            .post(format!("{}/api/attendance", base))
            .json(&serde_json::json!({ "name": "宮田駿", "generation": 27 }))
            .send()
            .await
            .unwrap();
    }

    let records: Vec<Value> = client
        .get(format!("{}/api/attendance/latest", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(records.len(), 10);

    let records: Vec<Value> = client
        .get(format!("{}/api/attendance/latest?limit=3", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(records.len(), 3);
}

#[tokio::test]
async fn all_attendance_requires_admin_token() {
    let base = start_app().await;
    let client = reqwest::Client::new();
    std::env::set_var("ADMIN_TOKEN", "operator-secret");

    let resp = client
        .get(format!("{}/api/attendance/all", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    let resp = client
        .get(format!("{}/api/attendance/all", base))
        .header("Authorization", "Bearer wrong")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    let resp = client
        .get(format!("{}/api/attendance/all", base))
        .header("Authorization", "Bearer operator-secret")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}
