use dotenvy::dotenv;
use sqlx::sqlite::SqlitePoolOptions;
use std::env;

use reception::database::{schema, seed};

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set to seed");
    let pool = SqlitePoolOptions::new()
        .connect(&db_url)
        .await
        .expect("failed to connect to database");

    if let Err(e) = schema::ensure_schema(&pool).await {
        eprintln!("schema setup failed: {}", e);
        std::process::exit(1);
    }

    match seed::seed_roster(&pool).await {
        Ok(()) => {
            println!(
                "seeded {} members and {} seats",
                seed::MEMBERS.len(),
                seed::SEATS.len()
            );
        }
        Err(e) => {
            eprintln!("seeding failed: {}", e);
            std::process::exit(1);
        }
    }
}
