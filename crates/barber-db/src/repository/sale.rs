//! # Sale Repository
//!
//! Database operations for recorded sales.
//!
//! ## Storage Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  NewSale (barber-core)              sales row                          │
//! │  ─────────────────────              ─────────                          │
//! │  barber_name            ──────────► barber_name      (snapshot)        │
//! │  services: Vec<Line>    ──JSON────► services_json    (snapshot)        │
//! │  total_price            ──────────► total_price                        │
//! │  payment_method         ──────────► payment_method                     │
//! │  commission_total       ──────────► commission_total                   │
//! │  sale_date              ──RFC3339─► sale_date  "2024-01-15T10:30:00.000Z"
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Date lookups use SQLite's `date(sale_date)`, so only the calendar day
//! (UTC) of the timestamp is compared.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use barber_core::sale::decode_services;
use barber_core::{NewSale, Sale};

/// Raw `sales` row before the snapshot and timestamp are decoded.
#[derive(Debug, sqlx::FromRow)]
struct SaleRow {
    id: i64,
    barber_name: String,
    services_json: String,
    total_price: f64,
    payment_method: String,
    commission_total: f64,
    sale_date: String,
}

impl TryFrom<SaleRow> for Sale {
    type Error = DbError;

    fn try_from(row: SaleRow) -> DbResult<Self> {
        let services =
            decode_services(&row.services_json).map_err(|e| DbError::decode("sale", row.id, e))?;

        let sale_date = DateTime::parse_from_rfc3339(&row.sale_date)
            .map_err(|e| DbError::decode("sale", row.id, e))?
            .with_timezone(&Utc);

        Ok(Sale {
            id: row.id,
            barber_name: row.barber_name,
            services,
            total_price: row.total_price,
            payment_method: row.payment_method,
            commission_total: row.commission_total,
            sale_date,
        })
    }
}

/// Repository for sale database operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Appends a recorded sale and returns its generated id.
    pub async fn insert(&self, sale: &NewSale) -> DbResult<i64> {
        let services_json = sale
            .services_json()
            .map_err(|e| DbError::Encode(e.to_string()))?;
        let sale_date = sale.sale_date_text();

        debug!(
            barber = %sale.barber_name,
            total = sale.total_price,
            lines = sale.services.len(),
            "Inserting sale"
        );

        let result = sqlx::query(
            r#"
            INSERT INTO sales (
                barber_name, services_json, total_price,
                payment_method, commission_total, sale_date
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&sale.barber_name)
        .bind(services_json)
        .bind(sale.total_price)
        .bind(&sale.payment_method)
        .bind(sale.commission_total)
        .bind(sale_date)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Lists every sale whose timestamp falls on `day`, oldest first.
    ///
    /// Time of day is ignored; no pagination.
    pub async fn list_by_day(&self, day: NaiveDate) -> DbResult<Vec<Sale>> {
        let day = day.format("%Y-%m-%d").to_string();

        let rows = sqlx::query_as::<_, SaleRow>(
            r#"
            SELECT id, barber_name, services_json, total_price,
                   payment_method, commission_total, sale_date
            FROM sales
            WHERE date(sale_date) = ?1
            ORDER BY sale_date, id
            "#,
        )
        .bind(&day)
        .fetch_all(&self.pool)
        .await?;

        debug!(day = %day, count = rows.len(), "Listed sales for day");
        rows.into_iter().map(Sale::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};
    use barber_core::sale::{record_sale, BarberSnapshot, SaleInput};
    use barber_core::{NewBarber, NewService, ServiceLine};
    use chrono::TimeZone;

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn line(name: &str, price: f64) -> ServiceLine {
        ServiceLine {
            name: name.to_string(),
            price,
        }
    }

    fn sale_at(at: DateTime<Utc>, services: Vec<ServiceLine>) -> NewSale {
        let total = services.iter().map(|s| s.price).sum();
        let input = SaleInput {
            barber: BarberSnapshot {
                name: "Alex".to_string(),
                commission: 40,
            },
            services,
            total_price: total,
            payment_method: "cash".to_string(),
        };
        record_sale(input, at).unwrap()
    }

    #[tokio::test]
    async fn test_insert_round_trips_snapshot() {
        let db = db().await;
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let lines = vec![line("Wash", 5.5), line("Cut", 20.0), line("Beard", 12.25)];

        let id = db.sales().insert(&sale_at(at, lines.clone())).await.unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let sales = db.sales().list_by_day(day).await.unwrap();
        assert_eq!(sales.len(), 1);

        let sale = &sales[0];
        assert_eq!(sale.id, id);
        assert_eq!(sale.barber_name, "Alex");
        assert_eq!(sale.services, lines);
        assert_eq!(sale.payment_method, "cash");
        assert!((sale.commission_total - 37.75 * 0.4).abs() < 1e-9);
        assert_eq!(sale.sale_date, at);
    }

    #[tokio::test]
    async fn test_list_by_day_ignores_time_of_day() {
        let db = db().await;
        let repo = db.sales();

        let before = Utc.with_ymd_and_hms(2024, 1, 14, 23, 59, 59).unwrap();
        let start = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 15, 23, 59, 59).unwrap();
        let after = Utc.with_ymd_and_hms(2024, 1, 16, 0, 0, 1).unwrap();

        for at in [after, end, before, start] {
            repo.insert(&sale_at(at, vec![line("Cut", 20.0)])).await.unwrap();
        }

        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let sales = repo.list_by_day(day).await.unwrap();
        let dates: Vec<_> = sales.iter().map(|s| s.sale_date).collect();
        assert_eq!(dates, vec![start, end]);

        let empty = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert!(repo.list_by_day(empty).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_catalog_deletes_leave_history() {
        let db = db().await;

        let barber = db.barbers().insert(&NewBarber::new("Alex", 40).unwrap()).await.unwrap();
        let service = db.services().insert(&NewService::new("Cut", 20.0).unwrap()).await.unwrap();

        let at = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let id = db
            .sales()
            .insert(&sale_at(at, vec![line(&service.name, service.price)]))
            .await
            .unwrap();

        db.barbers().delete(barber.id).await.unwrap();
        db.services().delete(service.id).await.unwrap();

        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let sales = db.sales().list_by_day(day).await.unwrap();
        let sale = sales.iter().find(|s| s.id == id).unwrap();
        assert_eq!(sale.barber_name, "Alex");
        assert_eq!(sale.services, vec![line("Cut", 20.0)]);
        assert_eq!(sale.commission_total, 8.0);
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_is_decode_error() {
        let db = db().await;

        sqlx::query(
            r#"
            INSERT INTO sales (barber_name, services_json, total_price,
                               payment_method, commission_total, sale_date)
            VALUES ('Alex', 'not json', 20.0, 'cash', 8.0, '2024-01-15T10:00:00.000Z')
            "#,
        )
        .execute(&db.pool)
        .await
        .unwrap();

        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let err = db.sales().list_by_day(day).await.unwrap_err();
        assert!(matches!(err, DbError::Decode { .. }));
    }
}
