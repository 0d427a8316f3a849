//! # Sale Recorder
//!
//! Turns a validated checkout into a [`NewSale`] ready to be persisted.
//!
//! ## Recording Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Recording a Sale                                  │
//! │                                                                         │
//! │  SaleInput { barber, services, total_price, payment_method }           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  record_sale(input, now) ← THIS MODULE                                 │
//! │       │                                                                 │
//! │       ├── validate barber name, commission, services, totals           │
//! │       ├── commission_total = total_price × commission / 100            │
//! │       └── sale_date = now                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  NewSale ──► SaleRepository::insert ──► one row in `sales`             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The commission is computed from the rate carried in the request, i.e. the
//! barber's commission at the time of sale, never looked up later.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreResult, ValidationError};
use crate::types::{CommissionRate, ServiceLine};
use crate::validation::{validate_name, validate_payment_method, validate_price};

// =============================================================================
// Input
// =============================================================================

/// The barber as presented at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarberSnapshot {
    pub name: String,
    pub commission: i64,
}

/// Everything the recorder needs to build a sale.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleInput {
    pub barber: BarberSnapshot,
    pub services: Vec<ServiceLine>,
    pub total_price: f64,
    pub payment_method: String,
}

// =============================================================================
// New Sale
// =============================================================================

/// A recorded sale that has not been assigned a row id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSale {
    pub barber_name: String,
    pub services: Vec<ServiceLine>,
    pub total_price: f64,
    pub payment_method: String,
    pub commission_rate: CommissionRate,
    pub commission_total: f64,
    pub sale_date: DateTime<Utc>,
}

impl NewSale {
    /// Encodes the service snapshot as the JSON array stored in `services_json`.
    pub fn services_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string(&self.services)?)
    }

    /// Returns `sale_date` in its stored text form.
    pub fn sale_date_text(&self) -> String {
        format_sale_date(&self.sale_date)
    }
}

/// Formats a sale timestamp as stored: RFC 3339, UTC, millisecond precision.
///
/// ## Example
/// ```rust
/// use barber_core::sale::format_sale_date;
/// use chrono::{TimeZone, Utc};
///
/// let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
/// assert_eq!(format_sale_date(&ts), "2024-01-15T10:30:00.000Z");
/// ```
pub fn format_sale_date(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serde adapter keeping `sale_date` in the stored text form on the wire.
pub mod sale_date_format {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_sale_date(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let text = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&text)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}

/// Decodes a stored service snapshot.
pub fn decode_services(json: &str) -> CoreResult<Vec<ServiceLine>> {
    Ok(serde_json::from_str(json)?)
}

// =============================================================================
// Recorder
// =============================================================================

/// Validates a checkout and computes the derived fields of the sale.
///
/// ## Errors
/// `CoreError::Validation` when:
/// - the barber name is blank or the commission is outside 0..=100
/// - the service list is empty or contains a blank name / negative price
/// - the total price is negative or not finite
/// - the payment method is blank
pub fn record_sale(input: SaleInput, now: DateTime<Utc>) -> CoreResult<NewSale> {
    let SaleInput {
        barber,
        services,
        total_price,
        payment_method,
    } = input;

    validate_name("barber.name", &barber.name)?;
    let commission_rate = CommissionRate::from_percent(barber.commission)?;

    if services.is_empty() {
        return Err(ValidationError::Empty {
            field: "services".to_string(),
        }
        .into());
    }
    for line in &services {
        validate_name("services.name", &line.name)?;
        validate_price("services.price", line.price)?;
    }

    validate_price("totalPrice", total_price)?;
    validate_payment_method(&payment_method)?;

    Ok(NewSale {
        barber_name: barber.name.trim().to_string(),
        services,
        total_price,
        payment_method: payment_method.trim().to_string(),
        commission_rate,
        commission_total: commission_rate.apply(total_price),
        sale_date: now,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use chrono::TimeZone;

    fn line(name: &str, price: f64) -> ServiceLine {
        ServiceLine {
            name: name.to_string(),
            price,
        }
    }

    fn checkout(commission: i64, total: f64) -> SaleInput {
        SaleInput {
            barber: BarberSnapshot {
                name: "Alex".to_string(),
                commission,
            },
            services: vec![line("Cut", 20.0)],
            total_price: total,
            payment_method: "cash".to_string(),
        }
    }

    #[test]
    fn test_commission_from_sale_time_rate() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
        let sale = record_sale(checkout(40, 20.0), now).unwrap();

        assert_eq!(sale.barber_name, "Alex");
        assert_eq!(sale.commission_rate.percent(), 40);
        assert_eq!(sale.commission_total, 8.0);
        assert_eq!(sale.sale_date, now);
    }

    #[test]
    fn test_commission_matches_formula() {
        let now = Utc::now();
        for (commission, total) in [(0, 35.0), (15, 47.5), (33, 12.99), (100, 80.0), (50, 0.0)] {
            let sale = record_sale(checkout(commission, total), now).unwrap();
            let expected = total * (commission as f64 / 100.0);
            assert!(
                (sale.commission_total - expected).abs() < 1e-9,
                "commission {commission}% of {total}"
            );
        }
    }

    #[test]
    fn test_services_json_preserves_order() {
        let mut input = checkout(30, 45.0);
        input.services = vec![line("Shave", 10.0), line("Cut", 20.0), line("Wash", 15.0)];

        let sale = record_sale(input, Utc::now()).unwrap();
        let json = sale.services_json().unwrap();
        assert_eq!(
            json,
            r#"[{"name":"Shave","price":10.0},{"name":"Cut","price":20.0},{"name":"Wash","price":15.0}]"#
        );
        assert_eq!(decode_services(&json).unwrap(), sale.services);
    }

    #[test]
    fn test_rejects_empty_services() {
        let mut input = checkout(40, 20.0);
        input.services.clear();

        let err = record_sale(input, Utc::now()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Empty { .. })
        ));
    }

    #[test]
    fn test_rejects_invalid_fields() {
        let now = Utc::now();

        assert!(record_sale(checkout(140, 20.0), now).is_err());
        assert!(record_sale(checkout(40, -20.0), now).is_err());

        let mut blank_barber = checkout(40, 20.0);
        blank_barber.barber.name = "  ".to_string();
        assert!(record_sale(blank_barber, now).is_err());

        let mut blank_payment = checkout(40, 20.0);
        blank_payment.payment_method = String::new();
        assert!(record_sale(blank_payment, now).is_err());

        let mut bad_line = checkout(40, 20.0);
        bad_line.services.push(line("Beard", -3.0));
        assert!(record_sale(bad_line, now).is_err());
    }

    #[test]
    fn test_trims_payment_method() {
        let mut input = checkout(40, 20.0);
        input.payment_method = " card ".to_string();

        let sale = record_sale(input, Utc::now()).unwrap();
        assert_eq!(sale.payment_method, "card");
    }

    #[test]
    fn test_commission_stays_finite_for_large_totals() {
        let sale = record_sale(checkout(40, 1e308), Utc::now()).unwrap();

        assert!(sale.commission_total.is_finite());
        let expected = 1e308 * (40.0 / 100.0);
        assert!((sale.commission_total - expected).abs() <= expected * 1e-15);
    }

    #[test]
    fn test_sale_date_text() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 23, 59, 59).unwrap();
        let sale = record_sale(checkout(40, 20.0), now).unwrap();
        assert_eq!(sale.sale_date_text(), "2024-01-15T23:59:59.000Z");
    }
}
