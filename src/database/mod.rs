use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::env;
use tracing::warn;

pub mod attendance_repo;
pub mod members_repo;
pub mod schema;
pub mod seats_repo;
pub mod seed;

/// Handle to the (optional) SQLite store. The service keeps running when
/// `DATABASE_URL` is unset or the connect fails: reads degrade to empty
/// results and writes to logged no-ops instead of crashing.
#[derive(Clone)]
pub struct Store {
    pool: Option<SqlitePool>,
}

impl Store {
    pub async fn connect_from_env() -> Self {
        let Ok(db_url) = env::var("DATABASE_URL") else {
            warn!("DATABASE_URL not set; running without a database");
            return Store { pool: None };
        };

        match SqlitePoolOptions::new().connect(&db_url).await {
            Ok(pool) => Store { pool: Some(pool) },
            Err(e) => {
                warn!("database connect failed: {}", e);
                Store { pool: None }
            }
        }
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Store { pool: Some(pool) }
    }

    pub fn unavailable() -> Self {
        Store { pool: None }
    }

    pub fn pool(&self) -> Option<&SqlitePool> {
        self.pool.as_ref()
    }
}
