//! # Sales Routes
//!
//! ```text
//! POST /api/sales
//!   { barber: {name, commission}, services: [{name, price}],
//!     totalPrice, paymentMethod }
//!        │
//!        ▼
//!   CreateSaleRequest::into_input()   missing field ──► 400 "<field> is required"
//!        │
//!        ▼
//!   barber_core::record_sale()        bad value ─────► 400
//!        │  commission_total = totalPrice × commission / 100
//!        ▼
//!   SaleRepository::insert()          write failure ──► 400
//!        │
//!        ▼
//!   { message, id, commission_total, sale_date }
//!
//! GET /api/sales?date=YYYY-MM-DD ──► Sale[] for that UTC calendar day
//! ```

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use barber_core::sale::{BarberSnapshot, SaleInput};
use barber_core::validation::{parse_sale_day, required};
use barber_core::{record_sale, Sale, ServiceLine, ValidationError};

use crate::error::{ApiError, ApiResult};
use crate::SharedState;

// =============================================================================
// Request / Response Schemas
// =============================================================================

/// Barber as sent by the checkout screen.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BarberBody {
    pub name: Option<String>,
    pub commission: Option<i64>,
}

/// Body of `POST /api/sales`.
///
/// Every field is optional at the parsing stage so a missing one can be
/// reported by name instead of as a generic decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSaleRequest {
    pub barber: Option<BarberBody>,
    pub services: Option<Vec<ServiceLine>>,
    pub total_price: Option<f64>,
    pub payment_method: Option<String>,
}

impl CreateSaleRequest {
    /// Checks presence of every field and builds the recorder input.
    pub fn into_input(self) -> Result<SaleInput, ValidationError> {
        let barber = required(self.barber, "barber")?;

        Ok(SaleInput {
            barber: BarberSnapshot {
                name: required(barber.name, "barber.name")?,
                commission: required(barber.commission, "barber.commission")?,
            },
            services: required(self.services, "services")?,
            total_price: required(self.total_price, "totalPrice")?,
            payment_method: required(self.payment_method, "paymentMethod")?,
        })
    }
}

/// Body returned by `POST /api/sales`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSaleResponse {
    pub message: String,
    pub id: i64,
    pub commission_total: f64,
    pub sale_date: String,
}

/// Query string of `GET /api/sales`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SalesQuery {
    pub date: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Records a sale, snapshotting the barber and services as submitted.
pub async fn create_sale(
    State(state): State<SharedState>,
    payload: Result<Json<CreateSaleRequest>, JsonRejection>,
) -> ApiResult<Json<CreateSaleResponse>> {
    let Json(request) = payload?;

    let sale = record_sale(request.into_input()?, Utc::now())?;
    let id = state.db.sales().insert(&sale).await.map_err(ApiError::write)?;

    info!(
        id,
        barber = %sale.barber_name,
        total = sale.total_price,
        commission = sale.commission_total,
        method = %sale.payment_method,
        "Sale recorded"
    );

    Ok(Json(CreateSaleResponse {
        message: "Sale recorded".to_string(),
        id,
        commission_total: sale.commission_total,
        sale_date: sale.sale_date_text(),
    }))
}

/// Lists sales whose timestamp falls on the requested day.
pub async fn list_sales(
    State(state): State<SharedState>,
    query: Result<Query<SalesQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Sale>>> {
    let Query(query) = query?;

    let day = parse_sale_day(&required(query.date, "date")?)?;
    let sales = state
        .db
        .sales()
        .list_by_day(day)
        .await
        .map_err(ApiError::read)?;

    Ok(Json(sales))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateSaleRequest {
        CreateSaleRequest {
            barber: Some(BarberBody {
                name: Some("Alex".to_string()),
                commission: Some(40),
            }),
            services: Some(vec![ServiceLine {
                name: "Cut".to_string(),
                price: 20.0,
            }]),
            total_price: Some(20.0),
            payment_method: Some("cash".to_string()),
        }
    }

    #[test]
    fn test_into_input_names_missing_field() {
        let mut request = full_request();
        request.payment_method = None;
        assert_eq!(
            request.into_input().unwrap_err(),
            ValidationError::required("paymentMethod")
        );

        let mut request = full_request();
        request.barber = Some(BarberBody {
            name: Some("Alex".to_string()),
            commission: None,
        });
        assert_eq!(
            request.into_input().unwrap_err(),
            ValidationError::required("barber.commission")
        );

        assert_eq!(
            CreateSaleRequest::default().into_input().unwrap_err(),
            ValidationError::required("barber")
        );
    }

    #[test]
    fn test_request_uses_camel_case_and_ignores_service_ids() {
        let request: CreateSaleRequest = serde_json::from_str(
            r#"{
                "barber": {"name": "Alex", "commission": 40},
                "services": [{"id": 3, "name": "Cut", "price": 20}],
                "totalPrice": 20,
                "paymentMethod": "card"
            }"#,
        )
        .unwrap();

        let input = request.into_input().unwrap();
        assert_eq!(input.total_price, 20.0);
        assert_eq!(input.payment_method, "card");
        assert_eq!(input.services[0].name, "Cut");
    }
}
