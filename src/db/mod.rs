//! SQLite storage: the explicitly constructed `Database` handle, schema
//! bootstrap and the repository functions the services run per session.
use std::str::FromStr;
use std::time::Duration;

use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool};
use tracing::info;

pub mod activities;
pub mod participants;
pub mod schema;
pub mod seed;

const MAX_CONNECTIONS: u32 = 5;

/// Cheap to clone; every clone shares one pool.
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

/// A pooled connection handed to one request. Returned to the pool on drop,
/// whichever way the request exits. Nothing is committed implicitly.
pub type Session = PoolConnection<Sqlite>;

impl Database {
    pub async fn connect(url: &str) -> sqlx::Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5));

        let pool = if is_in_memory(url) {
            // Each new connection to `:memory:` opens an empty database, so pin one.
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(MAX_CONNECTIONS)
                .connect_with(options.journal_mode(SqliteJournalMode::Wal))
                .await?
        };

        info!(url, "Connected to database");
        Ok(Self { pool })
    }

    pub async fn connect_in_memory() -> sqlx::Result<Self> {
        Self::connect("sqlite::memory:").await
    }

    /// Creates missing tables. Existing tables are left as they are.
    pub async fn init(&self) -> sqlx::Result<()> {
        let mut session = self.session().await?;
        schema::create_tables(&mut session).await
    }

    pub async fn session(&self) -> sqlx::Result<Session> {
        self.pool.acquire().await
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[cfg(test)]
pub(crate) async fn test_database() -> Database {
    let db = Database::connect_in_memory().await.unwrap();
    db.init().await.unwrap();
    db
}
