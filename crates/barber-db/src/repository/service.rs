//! # Service Repository
//!
//! Database operations for the service catalog.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use barber_core::{NewService, Service};

/// Repository for service catalog operations.
#[derive(Debug, Clone)]
pub struct ServiceRepository {
    pool: SqlitePool,
}

impl ServiceRepository {
    /// Creates a new ServiceRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ServiceRepository { pool }
    }

    /// Lists every service, ordered by name.
    pub async fn list(&self) -> DbResult<Vec<Service>> {
        let services = sqlx::query_as::<_, Service>(
            r#"
            SELECT id, name, price
            FROM services
            ORDER BY name, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = services.len(), "Listed services");
        Ok(services)
    }

    /// Inserts a service and returns it with its generated id.
    pub async fn insert(&self, service: &NewService) -> DbResult<Service> {
        debug!(name = %service.name, price = service.price, "Inserting service");

        let result = sqlx::query("INSERT INTO services (name, price) VALUES (?1, ?2)")
            .bind(&service.name)
            .bind(service.price)
            .execute(&self.pool)
            .await?;

        Ok(Service {
            id: result.last_insert_rowid(),
            name: service.name.clone(),
            price: service.price,
        })
    }

    /// Deletes a service by id and returns the number of rows removed.
    ///
    /// A missing id is not an error: the result is simply 0. Sales that
    /// sold this service keep their snapshot.
    pub async fn delete(&self, id: i64) -> DbResult<u64> {
        debug!(id, "Deleting service");

        let result = sqlx::query("DELETE FROM services WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Counts services (used by the seeder).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM services")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig, DbError};
    use barber_core::NewService;

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_list_ordered_by_name() {
        let db = db().await;
        let repo = db.services();

        let shave = repo.insert(&NewService::new("Shave", 10.0).unwrap()).await.unwrap();
        let cut = repo.insert(&NewService::new("Cut", 20.0).unwrap()).await.unwrap();
        assert_ne!(shave.id, cut.id);

        let names: Vec<_> = repo.list().await.unwrap().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Cut", "Shave"]);

        let listed = repo.list().await.unwrap();
        assert!(listed.contains(&shave));
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_delete_reports_changes() {
        let db = db().await;
        let repo = db.services();

        let shave = repo.insert(&NewService::new("Shave", 10.0).unwrap()).await.unwrap();

        assert_eq!(repo.delete(shave.id).await.unwrap(), 1);
        assert_eq!(repo.delete(shave.id).await.unwrap(), 0);
        assert_eq!(repo.delete(9_999).await.unwrap(), 0);
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_check_constraint_rejects_negative_price() {
        let db = db().await;

        let bypass = NewService {
            name: "Broken".to_string(),
            price: -1.0,
        };
        let err = db.services().insert(&bypass).await.unwrap_err();
        assert!(matches!(err, DbError::Constraint(_)));
    }
}
