use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use tracing::info;

use reception::database::{schema, Store};
use reception::web::{self, AppState};

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let store = Store::connect_from_env().await;
    if let Some(pool) = store.pool() {
        schema::ensure_schema(pool)
            .await
            .expect("schema setup failed");
    }

    let app = web::build_router(AppState { store });

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("invalid HOST/PORT");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    info!("reception listening on http://{}", addr);

    axum::serve(listener, app).await.unwrap();
}
