//! # Schema Migrations
//!
//! The SQL files under `migrations/sqlite/` are compiled into the binary by
//! `sqlx::migrate!` and applied every time a [`Database`](crate::Database)
//! is opened. sqlx keeps its bookkeeping in `_sqlx_migrations`, so files that
//! already ran are skipped.
//!
//! Current files:
//!
//! - `001_initial_schema.sql` - `services`, `barbers`, `sales` and the
//!   sale-day index
//!
//! Never edit a file that has shipped; add `002_*.sql` instead.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::DbResult;

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Applies every embedded migration that has not run on `pool` yet.
pub(crate) async fn apply(pool: &SqlitePool) -> DbResult<()> {
    let embedded = MIGRATOR.migrations.len();
    MIGRATOR.run(pool).await?;

    info!(embedded, "Schema up to date");
    Ok(())
}
