//! # Database Handle
//!
//! One [`Database`] is opened when the server starts and shared by every
//! request. It owns the `SqlitePool`, applies the schema on open, and hands
//! out the three repositories.
//!
//! ```text
//!   ServerConfig::db_config()          DbConfig::in_memory()
//!   (file, max_connections)            (":memory:", 1 connection)
//!              │                                  │
//!              └──────────────┬───────────────────┘
//!                             ▼
//!                   Database::new(config)
//!                   ├── journal_mode = WAL, synchronous = NORMAL
//!                   ├── pool: min 1, acquire 30 s, idle 10 min
//!                   └── migrations::apply
//!                             │
//!          ┌──────────────────┼──────────────────┐
//!          ▼                  ▼                  ▼
//!     db.services()      db.barbers()       db.sales()
//! ```
//!
//! SQLite serializes writers on its own; nothing here adds locking.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use tracing::info;

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::barber::BarberRepository;
use crate::repository::sale::SaleRepository;
use crate::repository::service::ServiceRepository;

/// Path SQLite treats as a private in-memory database.
const IN_MEMORY: &str = ":memory:";

/// Connections kept open while idle.
const MIN_CONNECTIONS: u32 = 1;

/// How long a request waits for a free connection.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Idle connections above the minimum are closed after this long.
const IDLE_TIMEOUT: Duration = Duration::from_secs(600);

// =============================================================================
// Configuration
// =============================================================================

/// Where the database lives and how many connections it may use.
#[derive(Debug, Clone, PartialEq)]
pub struct DbConfig {
    pub database_path: PathBuf,

    /// Default: 5
    pub max_connections: u32,
}

impl DbConfig {
    /// File-backed database; the file is created on first open.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            max_connections: 5,
        }
    }

    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Fresh, isolated in-memory database for tests.
    ///
    /// Limited to one connection: every connection to `:memory:` would
    /// otherwise see a different, empty database.
    pub fn in_memory() -> Self {
        DbConfig::new(IN_MEMORY).max_connections(1)
    }

    fn is_in_memory(&self) -> bool {
        self.database_path == Path::new(IN_MEMORY)
    }
}

// =============================================================================
// Database
// =============================================================================

/// Shared database handle. Cloning shares the same pool.
#[derive(Debug, Clone)]
pub struct Database {
    pub(crate) pool: SqlitePool,
}

impl Database {
    /// Opens (or creates) the database and brings the schema up to date.
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(
            path = %config.database_path.display(),
            max_connections = config.max_connections,
            "Opening database"
        );

        let url = format!("sqlite://{}?mode=rwc", config.database_path.display());
        let options = SqliteConnectOptions::from_str(&url)
            .map_err(|e| DbError::Open(e.to_string()))?
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .create_if_missing(true);

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(MIN_CONNECTIONS)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .idle_timeout(Some(IDLE_TIMEOUT));
        if config.is_in_memory() {
            // Dropping the last connection would drop the data with it.
            pool_options = pool_options.idle_timeout(None).max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| DbError::Open(e.to_string()))?;

        migrations::apply(&pool).await?;
        Ok(Database { pool })
    }

    pub fn services(&self) -> ServiceRepository {
        ServiceRepository::new(self.pool.clone())
    }

    pub fn barbers(&self) -> BarberRepository {
        BarberRepository::new(self.pool.clone())
    }

    pub fn sales(&self) -> SaleRepository {
        SaleRepository::new(self.pool.clone())
    }

    /// Waits for in-flight queries, then closes every connection. Later
    /// repository calls fail with [`DbError::Closed`].
    pub async fn close(&self) {
        info!("Closing database");
        self.pool.close().await;
    }

    /// `true` when a trivial query succeeds.
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}
