use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::info;

pub mod migrator;
pub mod repositories;

pub use repositories::search::SearchRepository;

use crate::entities::user_search;

/// Owns the lazily-initialized connection handle to the relational store.
///
/// The first `connect` performs the handshake and applies migrations; later
/// calls return the cached handle. The mutex keeps concurrent first calls
/// from racing into a second handshake.
pub struct Gateway {
    db_url: String,
    max_connections: u32,
    min_connections: u32,
    handle: Mutex<Option<DatabaseConnection>>,
}

impl Gateway {
    #[must_use]
    pub fn new(db_url: &str) -> Self {
        Self::with_pool_options(db_url, 5, 1)
    }

    #[must_use]
    pub fn with_pool_options(db_url: &str, max_connections: u32, min_connections: u32) -> Self {
        // Each pooled connection to an in-memory SQLite gets its own
        // database; keep one connection so every statement sees the same
        // store.
        let max_connections = if db_url.contains(":memory:") {
            1
        } else {
            max_connections
        };

        Self {
            db_url: db_url.to_string(),
            max_connections,
            min_connections: min_connections.min(max_connections),
            handle: Mutex::new(None),
        }
    }

    pub async fn connect(&self) -> Result<DatabaseConnection> {
        use sea_orm_migration::MigratorTrait;

        let mut guard = self.handle.lock().await;

        if let Some(conn) = guard.as_ref() {
            return Ok(conn.clone());
        }

        if !self.db_url.contains(":memory:") {
            let path_str = self.db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(self.db_url.clone());
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connection established (pool: {}-{})",
            self.min_connections, self.max_connections
        );

        *guard = Some(conn.clone());
        Ok(conn)
    }

    /// Closes and clears the cached handle. Returns whether the gateway is
    /// still connected, which is `false` on success. No-op if never
    /// connected.
    pub async fn disconnect(&self) -> Result<bool> {
        let mut guard = self.handle.lock().await;

        if let Some(conn) = guard.take() {
            conn.close().await?;
            info!("Database connection closed");
        }

        Ok(guard.is_some())
    }

    pub async fn is_connected(&self) -> bool {
        self.handle.lock().await.is_some()
    }
}

/// Facade over the history repository: one cloneable value for state and
/// handlers, delegating to repositories the way the rest of the crate
/// expects.
#[derive(Clone)]
pub struct Store {
    gateway: Arc<Gateway>,
}

impl Store {
    #[must_use]
    pub fn new(db_url: &str) -> Self {
        Self {
            gateway: Arc::new(Gateway::new(db_url)),
        }
    }

    #[must_use]
    pub fn with_pool_options(db_url: &str, max_connections: u32, min_connections: u32) -> Self {
        Self {
            gateway: Arc::new(Gateway::with_pool_options(
                db_url,
                max_connections,
                min_connections,
            )),
        }
    }

    #[must_use]
    pub fn gateway(&self) -> &Arc<Gateway> {
        &self.gateway
    }

    fn search_repo(&self) -> SearchRepository {
        SearchRepository::new(self.gateway.clone())
    }

    pub async fn ping(&self) -> Result<()> {
        let conn = self.gateway.connect().await?;
        let backend = conn.get_database_backend();
        conn.query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    pub async fn save_search(
        &self,
        user_id: &str,
        search_term: &str,
    ) -> Result<user_search::Model> {
        self.search_repo().save(user_id, search_term).await
    }

    pub async fn delete_searches(&self, user_id: &str) -> Result<u64> {
        self.search_repo().delete_for_user(user_id).await
    }

    pub async fn get_history(&self, user_id: &str) -> Result<Vec<user_search::Model>> {
        self.search_repo().history(user_id).await
    }

    pub async fn search_count(&self) -> Result<u64> {
        self.search_repo().count_all().await
    }
}
