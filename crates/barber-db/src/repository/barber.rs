//! # Barber Repository
//!
//! Database operations for barbers.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use barber_core::{Barber, NewBarber};

/// Repository for barber operations.
#[derive(Debug, Clone)]
pub struct BarberRepository {
    pool: SqlitePool,
}

impl BarberRepository {
    /// Creates a new BarberRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BarberRepository { pool }
    }

    /// Lists every barber, ordered by name.
    pub async fn list(&self) -> DbResult<Vec<Barber>> {
        let barbers = sqlx::query_as::<_, Barber>(
            r#"
            SELECT id, name, commission
            FROM barbers
            ORDER BY name, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = barbers.len(), "Listed barbers");
        Ok(barbers)
    }

    /// Inserts a barber and returns it with its generated id.
    pub async fn insert(&self, barber: &NewBarber) -> DbResult<Barber> {
        let commission = i64::from(barber.commission.percent());
        debug!(name = %barber.name, commission, "Inserting barber");

        let result = sqlx::query("INSERT INTO barbers (name, commission) VALUES (?1, ?2)")
            .bind(&barber.name)
            .bind(commission)
            .execute(&self.pool)
            .await?;

        Ok(Barber {
            id: result.last_insert_rowid(),
            name: barber.name.clone(),
            commission,
        })
    }

    /// Deletes a barber by id and returns the number of rows removed.
    ///
    /// Past sales keep the barber's name; there is no foreign key to break.
    pub async fn delete(&self, id: i64) -> DbResult<u64> {
        debug!(id, "Deleting barber");

        let result = sqlx::query("DELETE FROM barbers WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Counts barbers (used by the seeder).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM barbers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig};
    use barber_core::NewBarber;

    #[tokio::test]
    async fn test_insert_list_delete() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.barbers();

        let sam = repo.insert(&NewBarber::new("Sam", 35).unwrap()).await.unwrap();
        let alex = repo.insert(&NewBarber::new("Alex", 40).unwrap()).await.unwrap();
        assert_eq!(alex.commission, 40);

        let barbers = repo.list().await.unwrap();
        assert_eq!(barbers, vec![alex.clone(), sam.clone()]);

        assert_eq!(repo.delete(alex.id).await.unwrap(), 1);
        assert_eq!(repo.delete(alex.id).await.unwrap(), 0);
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
